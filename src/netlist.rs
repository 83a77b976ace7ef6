use crate::{Graph, PartitionError, PartitionResult};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// A graph read from a netlist together with what the reader had to skip.
#[derive(Clone, Debug)]
pub struct Netlist {
    pub graph: Graph,
    /// The net count from the second line. Not used by the partitioner.
    pub net_count: Option<u64>,
    /// Edge lines that were ignored because they did not name two distinct vertices.
    pub skipped_lines: usize,
}

impl Graph {
    pub fn from_netlist_file<P: AsRef<Path>>(path: P) -> PartitionResult<Netlist> {
        let reader = BufReader::new(File::open(path)?);
        Self::deserialize_netlist(reader)
    }

    /// Reads a netlist: the vertex count, the net count, then one 1-based
    /// vertex pair per line. Only a bad vertex count is fatal; unusable edge
    /// lines are skipped.
    pub fn deserialize_netlist<R: BufRead>(reader: R) -> PartitionResult<Netlist> {
        let mut lines = reader.lines();

        // Parse the header lines
        let header = lines.next().ok_or(PartitionError::MissingVertexCount)??;
        let vertex_count = parse_vertex_count(&header)?;

        let net_count = match lines.next() {
            Some(line) => line?
                .split_ascii_whitespace()
                .next()
                .and_then(|t| t.parse::<u64>().ok()),
            None => None,
        };
        log::debug!("netlist header: {vertex_count} vertices, net count {net_count:?}");

        // Parse the edges
        let mut graph = Graph::new(vertex_count);
        let mut skipped_lines = 0;
        for (i, line) in lines.enumerate() {
            // Line numbers are 1-based and the header took two lines.
            let line_no = i + 3;
            let line = match line {
                Ok(line) => line,
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    log::debug!("ignoring netlist line {line_no}: not valid UTF-8");
                    skipped_lines += 1;
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            let trimmed = line.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('%') || trimmed.starts_with('#') {
                continue;
            }

            match parse_pair(trimmed, vertex_count) {
                Some((a, b)) => graph.increment_weight(a, b),
                None => {
                    log::debug!("ignoring malformed netlist line {line_no}: {line:?}");
                    skipped_lines += 1;
                }
            }
        }

        if skipped_lines > 0 {
            log::info!("skipped {skipped_lines} malformed netlist lines");
        }

        Ok(Netlist {
            graph,
            net_count,
            skipped_lines,
        })
    }
}

fn parse_vertex_count(line: &str) -> PartitionResult<usize> {
    let token = line
        .split_ascii_whitespace()
        .next()
        .ok_or(PartitionError::MissingVertexCount)?;
    token
        .parse::<u32>()
        .map(|n| n as usize)
        .map_err(|_| PartitionError::InvalidVertexCount(token.to_string()))
}

/// Returns the 0-based pair named by the first two tokens of the line.
fn parse_pair(line: &str, vertex_count: usize) -> Option<(u32, u32)> {
    let mut parts = line.split_ascii_whitespace();
    let a = parts.next()?.parse::<u64>().ok()?;
    let b = parts.next()?.parse::<u64>().ok()?;

    let in_range = |v: u64| v >= 1 && v <= vertex_count as u64;
    if !in_range(a) || !in_range(b) || a == b {
        return None;
    }
    Some(((a - 1) as u32, (b - 1) as u32))
}

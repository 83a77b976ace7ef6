use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

struct TestContext {
    _dir: TempDir,
    netlist_path: PathBuf,
}

impl TestContext {
    fn new(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let netlist_path = dir.path().join("graph.net");
        let mut file = File::create(&netlist_path).unwrap();
        write!(file, "{contents}").unwrap();
        Self {
            _dir: dir,
            netlist_path,
        }
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_kl-partition"))
            .arg(&self.netlist_path)
            .args(args)
            .env("RUST_LOG", "info")
            .output()
            .expect("Failed to execute binary")
    }
}

const DENSE_PAIRS: &str = "4\n5\n1 2\n1 2\n3 4\n3 4\n1 3\n";

#[test]
fn prints_cutset_and_both_sides() {
    let ctx = TestContext::new(DENSE_PAIRS);
    let output = ctx.run(&["42"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "1");
    let mut sides = [lines[1], lines[2]];
    sides.sort();
    assert_eq!(sides, ["0 1", "2 3"]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Using seed: 42"));
}

#[test]
fn same_seed_gives_same_output() {
    let ctx = TestContext::new("6\n0\n1 2\n2 3\n3 4\n4 5\n5 6\n6 1\n1 4\n");
    let first = ctx.run(&["7", "--selection", "greedy"]);
    let second = ctx.run(&["7", "--selection", "greedy"]);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn garbage_edge_lines_do_not_abort() {
    let ctx = TestContext::new("4\n2\n1 2\nnot an edge\n3 4\n\n\n");
    let output = ctx.run(&["1", "--initial", "modulo"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().next(), Some("0"));
}

#[test]
fn missing_vertex_count_exits_with_one() {
    let ctx = TestContext::new("");
    let output = ctx.run(&["1"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn odd_vertex_count_exits_with_one() {
    let ctx = TestContext::new("3\n1\n1 2\n");
    let output = ctx.run(&["1"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("even"));
}

#[test]
fn unreadable_file_exits_with_one() {
    let output = Command::new(env!("CARGO_BIN_EXE_kl-partition"))
        .arg("/nonexistent/graph.net")
        .output()
        .expect("Failed to execute binary");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

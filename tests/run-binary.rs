use assert_cmd::prelude::*;
use std::process::Command;

fn solver() -> Command {
    let mut cmd = Command::main_binary().unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn run_3x3() {
    let output = r"Solving puzzles/3x3-04.txt...
Minimum number of moves = 4
3
0 1 3
4 2 5
7 8 6

3
1 0 3
4 2 5
7 8 6

3
1 2 3
4 0 5
7 8 6

3
1 2 3
4 5 0
7 8 6

3
1 2 3
4 5 6
7 8 0

";

    solver()
        .arg("puzzles/3x3-04.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");

    // same solution with the other options
    solver()
        .arg("--hamming")
        .arg("--closed-set")
        .arg("puzzles/3x3-04.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_solved() {
    solver()
        .arg("puzzles/3x3-00.txt")
        .assert()
        .success()
        .stdout("Solving puzzles/3x3-00.txt...\nMinimum number of moves = 0\n3\n1 2 3\n4 5 6\n7 8 0\n\n")
        .stderr("");
}

#[test]
fn run_4x4() {
    let output = r"Solving puzzles/4x4-03.txt...
Minimum number of moves = 3
4
 1  2  3  4
 5  6  0  8
 9 10  7 11
13 14 15 12

4
 1  2  3  4
 5  6  7  8
 9 10  0 11
13 14 15 12

4
 1  2  3  4
 5  6  7  8
 9 10 11  0
13 14 15 12

4
 1  2  3  4
 5  6  7  8
 9 10 11 12
13 14 15  0

";

    solver()
        .arg("puzzles/4x4-03.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_2x2() {
    let output = r"Solving puzzles/2x2-06.txt...
Minimum number of moves = 6
2
0 3
2 1

2
2 3
0 1

2
2 3
1 0

2
2 0
1 3

2
0 2
1 3

2
1 2
0 3

2
1 2
3 0

";

    solver()
        .arg("puzzles/2x2-06.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_unsolvable() {
    for path in &["puzzles/3x3-unsolvable.txt", "puzzles/4x4-unsolvable.txt"] {
        let output = solver().arg(path).output().unwrap();
        assert!(output.status.success());
        assert_eq!(
            String::from_utf8(output.stdout).unwrap(),
            format!("Solving {}...\nNo solution possible\n", path)
        );
        assert!(output.stderr.is_empty());
    }
}

#[test]
fn run_stats() {
    let output = solver()
        .arg("--stats")
        .arg("puzzles/3x3-04.txt")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Solving puzzles/3x3-04.txt...\nMinimum number of moves = 4\n"));
    assert!(stdout.contains(
        "Initial board search:\n\
         States created total: 10\n\
         Unique visited total: 5\n\
         Reached duplicates total: 0\n\
         Suppressed predecessors total: 3\n\
         Created but not reached total: 5\n"
    ));
    assert!(stdout.contains("Twin board search:\n"));
}

#[test]
fn run_weighted() {
    let output = solver()
        .arg("--weight")
        .arg("3")
        .arg("puzzles/3x3-24.txt")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let moves: usize = stdout
        .lines()
        .nth(1)
        .unwrap()
        .trim_start_matches("Minimum number of moves = ")
        .parse()
        .unwrap();
    assert!(moves >= 24);

    // saturates instead of overflowing
    let output = solver()
        .arg("--weight")
        .arg("4000000000")
        .arg("puzzles/3x3-04.txt")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Solving puzzles/3x3-04.txt...\nMinimum number of moves = "));
}

#[test]
fn run_bad_args() {
    solver()
        .arg("--manhattan")
        .arg("--hamming")
        .arg("puzzles/3x3-04.txt")
        .assert()
        .failure()
        .stdout("");

    solver()
        .arg("--weight")
        .arg("0")
        .arg("puzzles/3x3-04.txt")
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn run_bad_files() {
    solver()
        .arg("puzzles/does-not-exist.txt")
        .assert()
        .failure()
        .stdout("");

    let output = solver().arg("puzzles/invalid.txt").output().unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Tile 8 appears more than once"));
}

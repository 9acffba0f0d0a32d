use std::process::Command;

use arraywalk::report::HEADER;

fn run(args: &[&str]) -> (String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_arraywalk"))
        .args(args)
        .output()
        .expect("Failed to run arraywalk");
    assert!(output.status.success(), "exit status: {}", output.status);
    (
        String::from_utf8(output.stdout).expect("stdout is not utf-8"),
        String::from_utf8(output.stderr).expect("stderr is not utf-8"),
    )
}

fn values(stdout: &str) -> Vec<i32> {
    stdout
        .lines()
        .skip(1)
        .map(|line| {
            let value = line
                .rsplit("value: ")
                .next()
                .unwrap_or_else(|| panic!("Malformed line {:?}", line));
            value.parse().unwrap_or_else(|e| panic!("Bad value in {:?}: {}", line, e))
        })
        .collect()
}

#[test]
fn default_run_prints_header_and_24_records() {
    let (stdout, _) = run(&[]);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 25);
    assert_eq!(lines[0], HEADER);
    for line in &lines[1..] {
        assert!(line.starts_with("addr: "), "{}", line);
        assert!(line.contains(", value: "), "{}", line);
    }
    assert_eq!(values(&stdout), (1..=24).collect::<Vec<_>>());
}

#[test]
fn landmark_lines() {
    let (stdout, _) = run(&[]);
    let values = values(&stdout);
    assert_eq!(values[0], 1);
    assert_eq!(values[11], 12);
    assert_eq!(values[12], 13);
    assert_eq!(values[23], 24);
}

#[test]
fn offsets_flag_prints_linear_offsets() {
    let (stdout, _) = run(&["--offsets"]);
    for (n, line) in stdout.lines().skip(1).enumerate() {
        assert_eq!(line, format!("addr: {}, value: {}", n, n + 1));
    }
}

#[test]
fn logs_stay_off_stdout() {
    let (quiet, _) = run(&["-o"]);
    let (loud, stderr) = run(&["-o", "-vvv"]);
    assert_eq!(quiet, loud);
    assert!(stderr.contains("walk finished"), "{}", stderr);
}

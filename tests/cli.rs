use std::process::Command;

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_marketsim"))
        .args(args)
        .env("RUST_LOG", "debug")
        .output()
        .expect("failed to launch marketsim")
}

#[test]
fn stdout_carries_only_progress_lines() {
    let output = run(&["--seed", "1", "--rounds", "2"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("INFO"), "log line on stdout:\n{stdout}");
    assert!(!stdout.contains('\u{1b}'), "escape codes on stdout:\n{stdout}");

    let prefixes = [
        "Starting Market Simulation...",
        "Market Simulator initialized.",
        "Assets initialized. ",
        "--- Round ",
        "Prices after simulation. ",
        "Executed transactions. ",
        "Current Portfolio Value: ",
        "Market Simulation complete.",
    ];
    for line in stdout.lines().filter(|l| !l.is_empty()) {
        assert!(
            prefixes.iter().any(|p| line.starts_with(p)),
            "unexpected stdout line: {line}"
        );
    }
    assert!(stdout.contains("Assets initialized. LKOH: 5896, SBER: 250\n"));
    assert_eq!(stdout.matches("--- Round ").count(), 2);
}

#[test]
fn out_of_range_rounds_fail_before_the_simulation() {
    let output = run(&["--rounds", "4294967295"]);
    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("Starting Market Simulation"));
}

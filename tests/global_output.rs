use std::process::{Command, Output};
use tintlog::fatal;
use tintlog::logger::*;

// The global logger writes to the real stdout, so each case runs
// `scenario` in a fresh copy of this test binary and reads its output.
const SCENARIO_VAR: &str = "TINTLOG_TEST_SCENARIO";

fn run_scenario(name: &str) -> Output {
    let exe = std::env::current_exe().unwrap();
    Command::new(exe)
        .args(["scenario", "--exact", "--nocapture", "--test-threads=1"])
        .args(["--color", "never", "--quiet"])
        .env(SCENARIO_VAR, name)
        .output()
        .unwrap()
}

/// Lines written by the logger, without the test harness chatter.
fn log_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter(|line| line.starts_with('\x1b') && line.contains('\t'))
        .map(str::to_string)
        .collect()
}

#[test]
fn scenario() {
    let Ok(name) = std::env::var(SCENARIO_VAR) else {
        return;
    };
    match name.as_str() {
        "lazy_debug" => {
            logger();
            debug!("lazy debug line");
        }
        "error_threshold" => {
            logger();
            set_level("ERROR");
            info!("hidden info");
            error!("visible error");
        }
        "fatal" => {
            build_logger(LEVEL_INFO);
            fatal!("cannot continue: {}", 3);
        }
        other => panic!("unknown scenario {other}"),
    }
}

#[test]
fn lazy_logger_writes_debug_and_nothing_else() {
    let output = run_scenario("lazy_debug");
    assert!(output.status.success(), "{output:?}");

    let lines = log_lines(&output);
    assert_eq!(lines.len(), 1, "{lines:?}");
    assert!(lines[0].starts_with("\x1b[36mDEBUG\x1b[0m\t"), "{:?}", lines[0]);
    assert!(lines[0].contains("global_output.rs:"), "{:?}", lines[0]);
    assert!(lines[0].ends_with("\tlazy debug line"), "{:?}", lines[0]);
}

#[test]
fn error_threshold_suppresses_info_on_stdout() {
    let output = run_scenario("error_threshold");
    assert!(output.status.success(), "{output:?}");

    let lines = log_lines(&output);
    assert_eq!(lines.len(), 1, "{lines:?}");
    assert!(lines[0].starts_with("\x1b[31mERROR\x1b[0m\t"), "{:?}", lines[0]);
    assert!(lines[0].ends_with("\tvisible error"), "{:?}", lines[0]);
}

#[test]
fn fatal_logs_then_exits_with_status_one() {
    let output = run_scenario("fatal");
    assert_eq!(output.status.code(), Some(1), "{output:?}");

    let lines = log_lines(&output);
    assert_eq!(lines.len(), 1, "{lines:?}");
    assert!(lines[0].starts_with("\x1b[1;31mFATAL\x1b[0m\t"), "{:?}", lines[0]);
    assert!(lines[0].ends_with("\tcannot continue: 3"), "{:?}", lines[0]);
}

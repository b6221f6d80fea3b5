#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Evaluation instant used across tests: Wednesday 2026-10-14, noon.
pub const NOW: &str = "2026-10-14T12:00";

pub const WEEK: &str = "\
monday:    { open: true, morningStart: \"07:00\", morningEnd: \"09:00\" }
tuesday:   { open: false }
wednesday: { open: false }
thursday:  { open: false }
friday:    { open: false }
saturday:  { open: false }
sunday:    { open: false }
";

pub fn pw() -> Command {
    cargo_bin_cmd!("pickupwindow")
}

/// Fresh per-test directory inside the system temp dir
pub fn test_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_pickupwindow", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// Write a schedule and a config pointing at it; `extra` is appended to the config YAML.
/// Returns the config path.
pub fn setup_config(name: &str, schedule: &str, extra: &str) -> String {
    let dir = test_dir(name);
    let schedule_path = dir.join("schedule.yaml");
    fs::write(&schedule_path, schedule).expect("write schedule");

    let config_path = dir.join("pickupwindow.conf");
    let config = format!(
        "pickup_days: [saturday, monday]\nlead_days: 8\nschedule: \"{}\"\n{}",
        schedule_path.to_string_lossy().replace('\\', "/"),
        extra
    );
    fs::write(&config_path, config).expect("write config");
    config_path.to_string_lossy().to_string()
}

pub fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let out = cmd.output().expect("run pickupwindow");
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    serde_json::from_slice(&out.stdout).expect("stdout is JSON")
}

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn base_command(dir: &std::path::Path, args: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lessonbook"));
    cmd.current_dir(dir)
        .args(args)
        .env_remove("LESSONBOOK_CONFIG")
        .env_remove("LESSONBOOK_TRACE")
        .env_remove("NO_COLOR")
        .env_remove("CLICOLOR_FORCE");
    cmd
}

fn lessonbook(dir: &std::path::Path, args: &[&str]) -> Output {
    base_command(dir, args)
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to execute lessonbook")
}

fn lessonbook_env(dir: &std::path::Path, args: &[&str], vars: &[(&str, &str)]) -> Output {
    let mut cmd = base_command(dir, args);
    for (k, v) in vars {
        cmd.env(k, v);
    }
    cmd.output().expect("failed to execute lessonbook")
}

fn stdout_ok(dir: &std::path::Path, args: &[&str]) -> String {
    let output = lessonbook(dir, args);
    assert!(
        output.status.success(),
        "lessonbook {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn sections_lists_both_tracks() {
    let tmp = TempDir::new().expect("tempdir");
    let full = stdout_ok(tmp.path(), &["sections"]);
    assert!(full.contains("C# Fundamentals"));
    assert!(full.contains("8. Full-Stack Integration"));

    let short = stdout_ok(tmp.path(), &["--track", "shortlist", "sections"]);
    assert!(short.contains("C# Essentials Review"));
    assert!(!short.contains("Full-Stack Integration"));
}

#[test]
fn out_of_range_section_exits_non_zero_with_message() {
    let tmp = TempDir::new().expect("tempdir");
    let output = lessonbook(tmp.path(), &["section", "9"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Section 9 does not exist. Valid range: 1-8"),
        "unexpected stderr: {}",
        stderr
    );

    let output = lessonbook(tmp.path(), &["lesson", "1", "0"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Lesson 0 does not exist in section 1"));
}

#[test]
fn lesson_markdown_output() {
    let tmp = TempDir::new().expect("tempdir");
    let md = stdout_ok(tmp.path(), &["--format", "markdown", "lesson", "6", "2"]);
    assert!(md.starts_with("# Narrowing and Discriminated Unions"));
    assert!(md.contains("```"));
}

#[test]
fn json_output_is_enveloped() {
    let tmp = TempDir::new().expect("tempdir");
    let out = stdout_ok(tmp.path(), &["--format", "json", "stats"]);
    let value: serde_json::Value = serde_json::from_str(&out).expect("json");
    assert_eq!(value["cmd"], "stats");
    assert_eq!(value["status"], "ok");
    assert_eq!(value["tracks"][0]["track"], "full");
    assert_eq!(value["tracks"][0]["sections"], 8);
    assert!(value["event_id"].as_str().is_some_and(|id| id.len() == 26));
}

#[test]
fn config_file_selects_track_and_flags_override_it() {
    let tmp = TempDir::new().expect("tempdir");
    fs::write(tmp.path().join("lessonbook.toml"), "track = \"shortlist\"\n").expect("write config");

    let short = stdout_ok(tmp.path(), &["section", "1"]);
    assert!(short.contains("C# ESSENTIALS REVIEW"));

    let full = stdout_ok(tmp.path(), &["--track", "full", "section", "1"]);
    assert!(full.contains("C# FUNDAMENTALS"));
}

#[test]
fn config_env_var_beats_working_directory_file() {
    let tmp = TempDir::new().expect("tempdir");
    fs::write(tmp.path().join("lessonbook.toml"), "track = \"full\"\n").expect("write config");
    fs::write(tmp.path().join("alt.toml"), "track = \"shortlist\"\n").expect("write alt");

    let output = lessonbook_env(
        tmp.path(),
        &["section", "1"],
        &[("LESSONBOOK_CONFIG", "alt.toml"), ("NO_COLOR", "1")],
    );
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("C# ESSENTIALS REVIEW"));
}

#[test]
fn config_env_var_naming_missing_file_fails() {
    let tmp = TempDir::new().expect("tempdir");
    fs::write(tmp.path().join("alt.toml"), "track = \"shortlist\"\n").expect("write alt");

    let output = lessonbook_env(
        tmp.path(),
        &["section", "1"],
        &[("LESSONBOOK_CONFIG", "alt.tml"), ("NO_COLOR", "1")],
    );
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Config error"), "unexpected stderr: {}", stderr);
    assert!(stderr.contains("alt.tml"));
}

#[test]
fn malformed_config_is_reported() {
    let tmp = TempDir::new().expect("tempdir");
    fs::write(tmp.path().join("lessonbook.toml"), "format = 3\n").expect("write config");
    let output = lessonbook(tmp.path(), &["sections"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Config error"));
}

#[test]
fn search_and_fragment() {
    let tmp = TempDir::new().expect("tempdir");
    let hits = stdout_ok(tmp.path(), &["search", "useEffect"]);
    assert!(hits.contains("7.3"));

    let out = stdout_ok(tmp.path(), &["fragment", "2", "1"]);
    let fragment: serde_json::Value = serde_json::from_str(&out).expect("json");
    assert_eq!(fragment["ref"], "full:2.1");
    assert_eq!(fragment["hash"].as_str().map(str::len), Some(64));
}

#[test]
fn challenge_missing_on_shortlist_section_is_not_found() {
    let tmp = TempDir::new().expect("tempdir");
    let output = lessonbook(tmp.path(), &["--track", "shortlist", "challenge", "1"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("has no challenge"));

    let ok = stdout_ok(tmp.path(), &["challenge", "4"]);
    assert!(ok.contains("bookmarks API"));
}

#[test]
fn validate_passes_on_shipped_content() {
    let tmp = TempDir::new().expect("tempdir");
    let out = stdout_ok(tmp.path(), &["validate"]);
    assert!(out.contains("validate: 5 passed, 0 failed"));
}

#[test]
fn validate_trace_names_gates_on_stderr() {
    let tmp = TempDir::new().expect("tempdir");
    let output = lessonbook_env(tmp.path(), &["validate"], &[("LESSONBOOK_TRACE", "1")]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("validate: trace non_empty_text"));
    assert!(stderr.contains("validate: trace unique_titles"));

    let quiet = lessonbook(tmp.path(), &["validate"]);
    assert!(!String::from_utf8_lossy(&quiet.stderr).contains("validate: trace"));
}

#[test]
fn color_can_be_turned_off_by_flag_or_config() {
    let tmp = TempDir::new().expect("tempdir");
    let forced = [("CLICOLOR_FORCE", "1")];

    let colored = lessonbook_env(tmp.path(), &["sections"], &forced);
    assert!(String::from_utf8_lossy(&colored.stdout).contains("\x1b["));

    let flag = lessonbook_env(tmp.path(), &["--no-color", "sections"], &forced);
    assert!(flag.status.success());
    let out = String::from_utf8_lossy(&flag.stdout);
    assert!(out.contains("C# Fundamentals"));
    assert!(!out.contains("\x1b["));

    fs::write(tmp.path().join("lessonbook.toml"), "color = false\n").expect("write config");
    let config = lessonbook_env(tmp.path(), &["sections"], &forced);
    assert!(config.status.success());
    assert!(!String::from_utf8_lossy(&config.stdout).contains("\x1b["));
}

#[test]
fn export_round_trips_section_titles() {
    let tmp = TempDir::new().expect("tempdir");
    let out = stdout_ok(tmp.path(), &["export"]);
    let value: serde_json::Value = serde_json::from_str(&out).expect("json");
    let titles: Vec<&str> = value["sections"]
        .as_array()
        .expect("sections array")
        .iter()
        .filter_map(|s| s["title"].as_str())
        .collect();
    let expected: Vec<&str> = lessonbook::CURRICULUM.iter().map(|s| s.title).collect();
    assert_eq!(titles, expected);
}

#[test]
fn help_describes_positional_arguments() {
    let tmp = TempDir::new().expect("tempdir");
    let challenge = stdout_ok(tmp.path(), &["challenge", "--help"]);
    assert!(challenge.contains("1-based section number"));

    let fragment = stdout_ok(tmp.path(), &["fragment", "--help"]);
    assert!(fragment.contains("1-based section number"));
    assert!(fragment.contains("1-based lesson number within the section"));
}

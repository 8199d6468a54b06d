//! Integration tests for retarget-cli.
//!
//! Runs the `retarget` binary against files in temporary directories. The
//! config home is redirected so a real user settings file never leaks in.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const SAMPLE: &str = "# exported by AutoEQ\nGraphicEQ: 20 2.0; 100 1.0; 1000 0.0; 8000 -1.0; 16000 -2.0;\n";

/// Helper to get the `retarget` binary with an isolated config home.
fn retarget_bin(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_retarget"));
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("RUST_LOG", "error");
    cmd
}

fn run(home: &Path, args: &[&str]) -> Output {
    retarget_bin(home)
        .args(args)
        .output()
        .expect("failed to run retarget")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Parse a GraphicEQ line back into a curve.
fn parse_line(text: &str) -> retarget_core::Curve {
    retarget_core::parse(text).unwrap().0
}

// ---------------------------------------------------------------------------
// convert
// ---------------------------------------------------------------------------

#[test]
fn cli_convert_writes_both_outputs() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("Moondrop Aria Graphic Filters Harman.txt");
    std::fs::write(&input, SAMPLE).unwrap();
    let out_dir = temp_dir.path().join("out");

    let output = run(
        temp_dir.path(),
        &["convert", input.to_str().unwrap(), "--output-dir", out_dir.to_str().unwrap()],
    );
    assert!(output.status.success(), "convert failed: {}", stderr(&output));
    assert!(stdout(&output).contains("Device:   Moondrop Aria"));

    for name in [
        "Moondrop Aria_AHTVC-By_MiFun.txt",
        "Moondrop Aria_AHTVCLr2-By_MiFun.txt",
    ] {
        let path = out_dir.join(name);
        let text = std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("missing {}: {e}", path.display()));
        assert!(text.starts_with("GraphicEQ: 20 "), "{name}: {text}");

        let curve = parse_line(&text);
        assert_eq!(curve.max_gain(), Some(0.0), "{name} needs a preamp");
        assert!(curve.contains(19871) && curve.contains(16000));
    }
}

#[test]
fn cli_convert_defaults_to_input_directory() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("HD650.txt");
    std::fs::write(&input, SAMPLE).unwrap();

    let output = run(temp_dir.path(), &["convert", input.to_str().unwrap(), "--device", "Custom"]);
    assert!(output.status.success(), "convert failed: {}", stderr(&output));
    assert!(temp_dir.path().join("Custom_AHTVC-By_MiFun.txt").is_file());
    assert!(temp_dir.path().join("Custom_AHTVCLr2-By_MiFun.txt").is_file());
}

#[test]
fn cli_convert_stdout_prints_both_curves() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("Aria target.txt");
    std::fs::write(&input, SAMPLE).unwrap();

    let output = run(temp_dir.path(), &["convert", input.to_str().unwrap(), "--stdout"]);
    assert!(output.status.success(), "convert failed: {}", stderr(&output));

    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4, "got: {text}");
    assert_eq!(lines[0], "# Aria_AHTVC-By_MiFun.txt");
    assert!(lines[1].starts_with("GraphicEQ: "));
    assert_eq!(lines[2], "# Aria_AHTVCLr2-By_MiFun.txt");
    assert!(lines[3].starts_with("GraphicEQ: "));
    assert_ne!(lines[1], lines[3]);
    assert!(!temp_dir.path().join("Aria_AHTVC-By_MiFun.txt").exists());
}

#[test]
fn cli_convert_uses_settings_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("eq.txt");
    std::fs::write(&input, "GraphicEQ: 100 3.0; 1000 3.0").unwrap();
    std::fs::write(temp_dir.path().join("flat.txt"), "GraphicEQ: 100 0.0").unwrap();
    let config = temp_dir.path().join("settings.toml");
    std::fs::write(
        &config,
        "correction_file = \"flat.txt\"\n\n[naming]\nprimary = \"{device}.a.txt\"\nsecondary = \"{device}.b.txt\"\n\n[[overlay]]\nfreq = 1000\ngain = 0.0\n",
    )
    .unwrap();

    let output = run(
        temp_dir.path(),
        &["convert", input.to_str().unwrap(), "--config", config.to_str().unwrap(), "--stdout"],
    );
    assert!(output.status.success(), "convert failed: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "# UnknownDevice.a.txt\nGraphicEQ: 100 0.0; 1000 0.0\n# UnknownDevice.b.txt\nGraphicEQ: 100 0.0; 1000 0.0\n"
    );
}

#[test]
fn cli_convert_missing_marker_fails() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("broken.txt");
    std::fs::write(&input, "Preamp: -6.0 dB\nFilter 1: ON PK Fc 100 Hz Gain 3 dB Q 1.0\n").unwrap();

    let output = run(temp_dir.path(), &["convert", input.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("not found"), "stderr: {}", stderr(&output));
}

#[test]
fn cli_convert_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.txt");

    let output = run(temp_dir.path(), &["convert", missing.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("failed to read"));
}

#[test]
fn cli_convert_rejects_invalid_start_freq() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("eq.txt");
    std::fs::write(&input, SAMPLE).unwrap();

    let output = run(
        temp_dir.path(),
        &["convert", input.to_str().unwrap(), "--start-freq=0", "--stdout"],
    );
    assert!(!output.status.success());
    assert!(stderr(&output).contains("start frequency"));
}

#[test]
fn cli_convert_counts_parse_and_pipeline_warnings() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("eq.txt");
    std::fs::write(&input, "GraphicEQ: 100 abc; 1000 0.0").unwrap();

    // One bad token while parsing, then an even window rejected by both branches.
    let output = run(temp_dir.path(), &["convert", input.to_str().unwrap(), "--window", "4"]);
    assert!(output.status.success(), "convert failed: {}", stderr(&output));
    assert!(stdout(&output).contains("Warnings: 3"), "got: {}", stdout(&output));
}

// ---------------------------------------------------------------------------
// inspect
// ---------------------------------------------------------------------------

#[test]
fn cli_inspect_json_reports_warnings() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("Aria Harman.txt");
    std::fs::write(&input, "GraphicEQ: 100 abc; 200 1.0; 30001 2.0; 400 -3.0").unwrap();

    let output = run(temp_dir.path(), &["inspect", input.to_str().unwrap(), "--json"]);
    assert!(output.status.success(), "inspect failed: {}", stderr(&output));

    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["device"], "Aria");
    assert_eq!(report["points"], 2);
    assert_eq!(report["min_freq"], 200);
    assert_eq!(report["max_freq"], 400);
    assert_eq!(report["min_gain"], -3.0);
    assert_eq!(report["max_gain"], 1.0);

    let warnings = report["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0]["kind"], "invalid_number");
    assert_eq!(warnings[1]["kind"], "frequency_out_of_range");
    assert_eq!(warnings[1]["freq"], 30001);
}

#[test]
fn cli_inspect_text_report() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("eq.txt");
    std::fs::write(&input, SAMPLE).unwrap();

    let output = run(temp_dir.path(), &["inspect", input.to_str().unwrap()]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Points:     5"), "got: {text}");
    assert!(text.contains("20 Hz - 16000 Hz"), "got: {text}");
    assert!(text.contains("Warnings:   0"), "got: {text}");
}

// ---------------------------------------------------------------------------
// builtin
// ---------------------------------------------------------------------------

#[test]
fn cli_builtin_overlay() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(temp_dir.path(), &["builtin", "overlay"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim_end(),
        "GraphicEQ: 62 1.6; 125 0.4; 250 -0.6; 500 0.0; 1000 -0.4; 2000 -0.7; 4000 -0.5; 8000 -0.1; 16000 0.3"
    );
}

#[test]
fn cli_builtin_correction() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(temp_dir.path(), &["builtin", "correction"]);
    assert!(output.status.success());

    let curve = parse_line(&stdout(&output));
    assert_eq!(curve.len(), 127);
    assert_eq!(curve.get(20), Some(-0.7));
    assert_eq!(curve.get(14305), Some(5.5));
}

#[test]
fn cli_builtin_rejects_unknown_curve() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(temp_dir.path(), &["builtin", "loudness"]);
    assert!(!output.status.success());
}

// ---------------------------------------------------------------------------
// config
// ---------------------------------------------------------------------------

#[test]
fn cli_config_init_and_show() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("conf").join("config.toml");
    let path_str = path.to_str().unwrap();

    let output = run(temp_dir.path(), &["config", "init", "--config", path_str]);
    assert!(output.status.success(), "init failed: {}", stderr(&output));
    assert!(path.is_file());

    let again = run(temp_dir.path(), &["config", "init", "--config", path_str]);
    assert!(!again.status.success());
    assert!(stderr(&again).contains("--force"));

    let forced = run(temp_dir.path(), &["config", "init", "--config", path_str, "--force"]);
    assert!(forced.status.success());

    let show = run(temp_dir.path(), &["config", "show", "--config", path_str]);
    assert!(show.status.success());
    let text = stdout(&show);
    assert!(text.contains("[smoothing]"));
    assert!(text.contains("window_size = 5"));
    assert!(text.contains("{device}_AHTVC-By_MiFun.txt"));
}

#[test]
fn cli_config_path_points_into_config_home() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(temp_dir.path(), &["config", "path"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.trim_end().ends_with("config.toml"), "got: {text}");
    assert!(text.contains("retarget"), "got: {text}");
}

#[test]
fn cli_config_show_defaults_without_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(temp_dir.path(), &["config", "show"]);
    assert!(output.status.success(), "show failed: {}", stderr(&output));
    assert!(stdout(&output).contains("start_freq_hz = 8000.0"));
}

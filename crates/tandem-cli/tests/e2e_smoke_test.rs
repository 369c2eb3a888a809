use std::fs;

use tempfile::tempdir;

use tandem_cli::{Args, run_with_output};

fn quiet_args() -> Args {
    Args {
        log_level: "off".to_string(),
        ..Args::default()
    }
}

#[test]
fn e2e_writes_both_outputs() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let text_path = temp_dir.path().join("diagram.txt");
    let svg_path = temp_dir.path().join("diagram.svg");

    let args = Args {
        text_output: Some(text_path.to_string_lossy().to_string()),
        svg_output: Some(svg_path.to_string_lossy().to_string()),
        ..quiet_args()
    };

    let mut stdout = Vec::new();
    run_with_output(&args, &mut stdout).expect("CLI run should succeed");

    let text = fs::read_to_string(&text_path).expect("text output should exist");
    let svg = fs::read_to_string(&svg_path).expect("svg output should exist");
    assert_eq!(text.lines().count(), 7);
    assert!(text.contains("Abstract Factory"));
    assert!(svg.starts_with("<?xml"));
    assert!(svg.ends_with("</svg>\n"));

    let stdout = String::from_utf8(stdout).unwrap();
    assert_eq!(
        stdout,
        format!("wrote {}\nwrote {}\n", text_path.display(), svg_path.display())
    );
}

#[test]
fn e2e_print_mode_writes_no_files() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let text_path = temp_dir.path().join("diagram.txt");

    let args = Args {
        print: true,
        text_output: Some(text_path.to_string_lossy().to_string()),
        ..quiet_args()
    };

    let mut stdout = Vec::new();
    run_with_output(&args, &mut stdout).expect("CLI run should succeed");

    let stdout = String::from_utf8(stdout).unwrap();
    let svg_start = stdout.find("<?xml").expect("svg output should be printed");
    assert!(stdout[..svg_start].contains("|   |%%Abstract Factory%%|   |"));
    assert!(stdout.ends_with("</svg>\n"));
    assert!(!stdout.contains("wrote"));
    assert!(!text_path.exists());
}

#[test]
fn e2e_single_backend() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let svg_path = temp_dir.path().join("only.svg");

    let args = Args {
        backend: Some(tandem::Backend::Svg),
        svg_output: Some(svg_path.to_string_lossy().to_string()),
        ..quiet_args()
    };

    let mut stdout = Vec::new();
    run_with_output(&args, &mut stdout).expect("CLI run should succeed");

    assert!(svg_path.exists());
    assert_eq!(String::from_utf8(stdout).unwrap().lines().count(), 1);
}

#[test]
fn e2e_config_file_controls_scale() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    let svg_path = temp_dir.path().join("scaled.svg");
    fs::write(&config_path, "[render]\nscale = 10\n").unwrap();

    let args = Args {
        backend: Some(tandem::Backend::Svg),
        svg_output: Some(svg_path.to_string_lossy().to_string()),
        config: Some(config_path.to_string_lossy().to_string()),
        ..quiet_args()
    };

    run_with_output(&args, &mut Vec::new()).expect("CLI run should succeed");

    let svg = fs::read_to_string(&svg_path).unwrap();
    assert!(svg.contains(r#"width="300px" height="70px""#));
}

#[test]
fn e2e_missing_config_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let args = Args {
        print: true,
        config: Some(
            temp_dir
                .path()
                .join("missing.toml")
                .to_string_lossy()
                .to_string(),
        ),
        ..quiet_args()
    };

    let result = run_with_output(&args, &mut Vec::new());
    assert!(matches!(result, Err(tandem::TandemError::Config(_))));
}

#[test]
fn e2e_unwritable_output_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let args = Args {
        backend: Some(tandem::Backend::Grid),
        text_output: Some(
            temp_dir
                .path()
                .join("no/such/dir/diagram.txt")
                .to_string_lossy()
                .to_string(),
        ),
        ..quiet_args()
    };

    let result = run_with_output(&args, &mut Vec::new());
    assert!(matches!(result, Err(tandem::TandemError::Io(_))));
}

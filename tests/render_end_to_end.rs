use std::fs;
use std::path::PathBuf;

use qtraj::config::{FigureConfig, PlotConfig};
use qtraj::core::table::{TableError, Trajectories};
use qtraj::plot;

const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

// Small canvas keeps the error-path and layout tests fast; the end-to-end
// test renders at the default 2400x2400.
fn small_cfg() -> PlotConfig {
    PlotConfig {
        figure: FigureConfig {
            width_px: 640,
            height_px: 480,
        },
        ..PlotConfig::default()
    }
}

fn unique_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!(
        "qtraj_e2e_{}_{}",
        name,
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&p).unwrap();
    p
}

#[test]
fn renders_png_for_well_formed_table() {
    let dir = unique_dir("ok");
    let input = dir.join("run1.txt");
    let output = dir.join("run1.png");
    fs::write(
        &input,
        "0 1.0 1+0j 0+0j\n1 0.5 0.707+0.707j 0.707-0.707j\n",
    )
    .unwrap();

    let traj = Trajectories::from_file(&input).unwrap();
    assert_eq!(traj.time, vec![0.0, 1.0]);
    assert_eq!(traj.envelope, vec![1.0, 0.5]);
    let pops = traj.populations();
    assert_eq!(pops.len(), 2);
    assert!((pops[0][0] - 1.0).abs() < 1e-12);
    assert!((pops[0][1] - 0.999698).abs() < 1e-6);
    assert!(pops[1][0].abs() < 1e-12);
    assert!((pops[1][1] - 0.999698).abs() < 1e-6);

    plot::render(&traj, &PlotConfig::default(), &output).unwrap();
    let bytes = fs::read(&output).unwrap();
    assert_eq!(&bytes[..8], &PNG_MAGIC);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn state_count_follows_file_width() {
    let dir = unique_dir("width");
    let input = dir.join("wide.txt");
    let output = dir.join("wide.png");

    // 8 columns: time, envelope, and 6 states.
    let mut text = String::new();
    for step in 0..10 {
        let t = step as f64 * 0.1;
        text.push_str(&format!("{t} 1.0"));
        for state in 0..6 {
            text.push_str(&format!(" 0.{state}+0.1j"));
        }
        text.push('\n');
    }
    fs::write(&input, text).unwrap();

    let traj = Trajectories::from_file(&input).unwrap();
    assert_eq!(traj.n_states(), 6);
    plot::render(&traj, &small_cfg(), &output).unwrap();
    assert!(output.exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_input_is_a_read_error() {
    let dir = unique_dir("missing");
    let input = dir.join("nope.txt");

    let err = Trajectories::from_file(&input).unwrap_err();
    match err {
        TableError::Read { path, .. } => assert_eq!(path, input),
        other => panic!("expected Read error, got {other:?}"),
    }

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn malformed_table_produces_no_image() {
    let dir = unique_dir("badtoken");
    let input = dir.join("run1.txt");
    let output = dir.join("run1.png");
    fs::write(&input, "0 1.0 1+0j\n1 0.5 abc\n").unwrap();

    let err = Trajectories::from_file(&input).unwrap_err();
    assert!(matches!(err, TableError::BadToken { line: 2, .. }));
    assert!(!output.exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn ragged_table_produces_no_image() {
    let dir = unique_dir("ragged");
    let input = dir.join("run1.txt");
    let output = dir.join("run1.png");
    fs::write(&input, "0 1 1 0\n0.5 1 1 0\n1 0.5 1 0 0\n").unwrap();

    let err = Trajectories::from_file(&input).unwrap_err();
    assert!(matches!(
        err,
        TableError::RaggedRow {
            line: 3,
            expected: 4,
            found: 5
        }
    ));
    assert!(!output.exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn overwrites_existing_output_file() {
    let dir = unique_dir("overwrite");
    let input = dir.join("run1.txt");
    let output = dir.join("run1.png");
    fs::write(&input, "0 1.0 1+0j\n1 0.5 0+1j\n").unwrap();
    fs::write(&output, b"stale bytes").unwrap();

    let traj = Trajectories::from_file(&input).unwrap();
    plot::render(&traj, &small_cfg(), &output).unwrap();
    let bytes = fs::read(&output).unwrap();
    assert_eq!(&bytes[..8], &PNG_MAGIC);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn single_row_table_still_renders() {
    let dir = unique_dir("onerow");
    let input = dir.join("one.txt");
    let output = dir.join("one.png");
    fs::write(&input, "0 1.0 1+0j 0+0j\n").unwrap();

    let traj = Trajectories::from_file(&input).unwrap();
    plot::render(&traj, &small_cfg(), &output).unwrap();
    assert!(output.exists());

    let _ = fs::remove_dir_all(&dir);
}

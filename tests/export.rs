//! Tree-wide export to CSV and JSON files.

use std::fs;
use std::path::PathBuf;

use multitab::export::write_figure_json;
use multitab::{ExportError, ExportFormat, Figure, Filenames, TabTree};

fn sample_figure(title: &str) -> Figure {
    let mut fig = Figure::new();
    fig.set_title(title).set_x_label("t [s]").set_y_label("v");
    fig.line("sine", [[0.0, 0.1], [1.0, 0.2]]);
    fig.scatter("spots", [[0.5, 0.5]]);
    fig
}

/// Fresh scratch directory under the system temp dir.
fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("multitab_export_{}_{}", tag, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn file_names(report: &multitab::SaveReport) -> Vec<String> {
    report
        .written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn default_filenames_join_sanitized_labels() {
    let mut t = TabTree::figures();
    t.insert_figure(["Run 1", "Power"], sample_figure("p")).unwrap();
    t.insert_figure(["Run 1", "Torque"], sample_figure("q")).unwrap();
    t.add_tab(["Run 2", "Power"]).unwrap(); // never realized

    let dir = scratch_dir("slugs");
    let report = t.save_data(&dir, Filenames::Default, ExportFormat::Csv).unwrap();

    assert_eq!(report.skipped, 1);
    assert_eq!(file_names(&report), ["Run_1_Power.csv", "Run_1_Torque.csv"]);
    assert!(dir.join("Run_1_Power.csv").is_file());
    assert!(!dir.join("Run_2_Power.csv").exists());

    let body = fs::read_to_string(dir.join("Run_1_Power.csv")).unwrap();
    assert!(body.starts_with("series,x,y\n"));
    assert!(body.contains("sine,0,0.1\n"));
    assert!(body.contains("spots,0.5,0.5\n"));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn templates_receive_the_slug_in_their_placeholder() {
    let mut t = TabTree::figures();
    t.insert_figure(["One"], sample_figure("one")).unwrap();

    let dir = scratch_dir("template");
    let report = t
        .save_data(&dir, Filenames::Template("fig_{}.json".to_string()), ExportFormat::Json)
        .unwrap();
    assert_eq!(file_names(&report), ["fig_One.json"]);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn templates_without_a_placeholder_are_rejected() {
    let mut t = TabTree::figures();
    t.insert_figure(["One"], sample_figure("one")).unwrap();

    let dir = scratch_dir("bad_template");
    let err = t
        .save_data(&dir, Filenames::Template("data.csv".to_string()), ExportFormat::Csv)
        .unwrap_err();
    assert!(matches!(err, ExportError::Template(_)));
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn explicit_filename_lists_must_cover_every_leaf() {
    let mut t = TabTree::figures();
    t.insert_figure(["One"], sample_figure("one")).unwrap();
    t.add_tab(["Two"]).unwrap();

    let dir = scratch_dir("list");
    let err = t
        .save_data(&dir, Filenames::List(vec!["only.csv".into()]), ExportFormat::Csv)
        .unwrap_err();
    match err {
        ExportError::FilenameCount { expected, got } => {
            assert_eq!(expected, 2);
            assert_eq!(got, 1);
        }
        other => panic!("unexpected error: {other}"),
    }

    // With a full list the unrealized leaf's entry stays unwritten.
    let names = Filenames::List(vec!["first.csv".into(), "second.csv".into()]);
    let report = t.save_data(&dir, names, ExportFormat::Csv).unwrap();
    assert_eq!(file_names(&report), ["first.csv"]);
    assert_eq!(report.skipped, 1);
    assert!(!dir.join("second.csv").exists());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn saving_nothing_is_an_error() {
    let t = TabTree::figures();
    let err = t
        .save_data(std::env::temp_dir(), Filenames::Default, ExportFormat::Csv)
        .unwrap_err();
    assert!(matches!(err, ExportError::NothingToSave));

    // A tree full of unrealized tabs is just as empty.
    let mut t = TabTree::figures();
    t.add_tab(["A"]).unwrap();
    t.add_tab(["B"]).unwrap();
    let err = t
        .save_data(std::env::temp_dir(), Filenames::Default, ExportFormat::Csv)
        .unwrap_err();
    assert!(matches!(err, ExportError::NothingToSave));
}

#[test]
fn json_keeps_labels_kinds_and_points() {
    let fig = sample_figure("Demo");
    let mut buf = Vec::new();
    write_figure_json(&mut buf, &fig).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(value["title"], "Demo");
    assert_eq!(value["x_label"], "t [s]");
    assert_eq!(value["series"][0]["name"], "sine");
    assert_eq!(value["series"][0]["kind"], "line");
    assert_eq!(value["series"][0]["points"][1], serde_json::json!([1.0, 0.2]));
    assert_eq!(value["series"][1]["kind"], "scatter");
}

#[test]
fn json_files_round_trip_through_save_data() {
    let mut t = TabTree::figures();
    t.insert_figure(["G", "&Leaf"], sample_figure("nested")).unwrap();

    let dir = scratch_dir("roundtrip");
    let report = t.save_data(&dir, Filenames::Default, ExportFormat::Json).unwrap();
    assert_eq!(file_names(&report), ["G_Leaf.json"]);

    let body = fs::read_to_string(&report.written[0]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["title"], "nested");
    assert_eq!(value["series"].as_array().unwrap().len(), 2);

    fs::remove_dir_all(&dir).unwrap();
}

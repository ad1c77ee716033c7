// File: crates/lineplot-core/tests/data_file.rs
// Purpose: Series validation and the tab-separated data file written for gnuplot.

use lineplot_core::files::FileManager;
use lineplot_core::{
    DataSeries, OutputFormat, PlotError, PlotSession, RecordingRenderer, SessionConfig, SessionState,
};

fn read_pairs(path: &std::path::Path) -> Vec<(f64, f64)> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_path(path)
        .expect("open data file");
    rdr.records()
        .map(|rec| {
            let rec = rec.expect("record");
            assert_eq!(rec.len(), 2);
            (rec[0].parse().expect("x"), rec[1].parse().expect("y"))
        })
        .collect()
}

#[test]
fn size_mismatch_reports_both_lengths() {
    for (nx, ny) in [(3usize, 2usize), (0, 1), (5, 9)] {
        let err = DataSeries::new(vec![0.0; nx], vec![0.0; ny], "").unwrap_err();
        match err {
            PlotError::SizeMismatch { x_len, y_len } => assert_eq!((x_len, y_len), (nx, ny)),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

#[test]
fn pairs_constructor_keeps_order() {
    let s = DataSeries::from_pairs(&[(1.0, 2.0), (3.0, 4.0)], "pairs");
    assert_eq!(s.x(), &[1.0, 3.0]);
    assert_eq!(s.y(), &[2.0, 4.0]);
    assert_eq!(s.legend(), "pairs");
    assert_eq!(s.len(), 2);
}

#[test]
fn data_file_round_trips_exactly() {
    let tmp = tempfile::tempdir().unwrap();
    let mut files = FileManager::new(&SessionConfig::rooted_at(tmp.path()));

    let x = vec![0.1, -2.5e10, std::f64::consts::PI, 1e-300, 0.0];
    let y = vec![1.0 / 3.0, f64::MAX, -0.0, 123456789.123456789, 7.0];
    let series = DataSeries::new(x.clone(), y.clone(), "rt").unwrap();

    let path = files.write_data_file(&series).unwrap();
    let back = read_pairs(&path);
    let want: Vec<(f64, f64)> = x.into_iter().zip(y).collect();
    assert_eq!(back, want);
}

#[test]
fn integers_are_written_without_fraction() {
    let tmp = tempfile::tempdir().unwrap();
    let mut files = FileManager::new(&SessionConfig::rooted_at(tmp.path()));
    let series = DataSeries::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 4.0], "").unwrap();

    let path = files.write_data_file(&series).unwrap();
    assert_eq!(std::fs::read_to_string(path).unwrap(), "0\t0\n1\t1\n2\t4\n");
}

#[test]
fn data_files_are_numbered_per_submission() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = SessionConfig::rooted_at(tmp.path());
    let mut files = FileManager::new(&cfg);
    let series = DataSeries::new(vec![1.0], vec![2.0], "").unwrap();

    let first = files.write_data_file(&series).unwrap();
    let second = files.write_data_file(&series).unwrap();
    assert_eq!(first, cfg.data_dir.join("data1.dat"));
    assert_eq!(second, cfg.data_dir.join("data2.dat"));
    assert!(first.exists() && second.exists());
    assert_eq!(files.plot_count(), 2);
}

#[test]
fn nested_data_dir_is_created() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = SessionConfig::default().with_data_dir(tmp.path().join("a/b/c"));
    let mut files = FileManager::new(&cfg);
    let path = files.write_data_file(&DataSeries::default()).unwrap();
    assert!(path.starts_with(tmp.path().join("a/b/c")));
    assert_eq!(std::fs::read_to_string(path).unwrap(), "");
}

#[test]
fn blocked_directory_is_a_directory_error() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("not-a-dir");
    std::fs::write(&blocker, b"file").unwrap();

    let cfg = SessionConfig::default().with_data_dir(blocker.join("data"));
    let mut files = FileManager::new(&cfg);
    let err = files.write_data_file(&DataSeries::default()).unwrap_err();
    assert!(matches!(err, PlotError::Directory { .. }), "{err:?}");
}

#[test]
fn unopenable_data_file_is_a_file_open_error() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = SessionConfig::rooted_at(tmp.path());
    // a directory squatting on the first data file name
    std::fs::create_dir_all(cfg.data_dir.join("data1.dat")).unwrap();

    let mut files = FileManager::new(&cfg);
    let series = DataSeries::new(vec![0.0, 1.0], vec![0.0, 1.0], "").unwrap();
    let err = files.write_data_file(&series).unwrap_err();
    match &err {
        PlotError::FileOpen { path, .. } => assert!(path.ends_with("data1.dat"), "{path:?}"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn failed_resubmission_keeps_previous_series() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = SessionConfig::rooted_at(tmp.path());
    let blocked = cfg.data_dir.join("data2.dat");
    let mut s = PlotSession::with_renderer(cfg, RecordingRenderer::new());
    s.set_output_file("out.png", OutputFormat::Auto);
    s.plot(vec![0.0, 1.0], vec![0.0, 1.0], "first").unwrap();

    std::fs::create_dir_all(&blocked).unwrap();
    let err = s.plot(vec![0.0, 2.0], vec![3.0, 4.0], "second").unwrap_err();
    assert!(matches!(err, PlotError::FileOpen { .. }), "{err:?}");

    assert_eq!(s.state(), SessionState::DataSubmitted);
    assert_eq!(s.series().map(|series| series.legend()), Some("first"));
    assert!(s.data_path().unwrap().ends_with("data1.dat"));

    // the earlier series is still what gets rendered
    let artifact = s.save().unwrap();
    assert!(artifact.directives.last().unwrap().contains("title 'first'"));
}

#[test]
fn huge_and_tiny_values_use_exponent_notation() {
    let tmp = tempfile::tempdir().unwrap();
    let mut files = FileManager::new(&SessionConfig::rooted_at(tmp.path()));
    let series = DataSeries::new(vec![0.0, 1.0], vec![1e20, 2.5e-9], "").unwrap();
    let path = files.write_data_file(&series).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "0\t1e20\n1\t2.5e-9\n");
    assert_eq!(read_pairs(&path), vec![(0.0, 1e20), (1.0, 2.5e-9)]);
}

#[test]
fn script_lines_are_written_in_order() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = SessionConfig::rooted_at(tmp.path()).with_script_name("custom.gplt");
    let files = FileManager::new(&cfg);
    let lines = vec!["set xrange [0:1]".to_string(), "plot 'x' with lines title ''".to_string()];

    let path = files.write_script_file(&lines).unwrap();
    assert_eq!(path, cfg.script_dir.join("custom.gplt"));
    assert_eq!(
        std::fs::read_to_string(path).unwrap(),
        "set xrange [0:1]\nplot 'x' with lines title ''\n"
    );
}

//! End-to-end pipeline tests over scratch datasets: load, transform, render,
//! plus the failure modes that must never leave an output image behind.

use std::fs;
use std::path::{Path, PathBuf};

use tidytuesday::charts::{
    BarChart, BarRow, Segment, StackedBarChart, StackedRow, COSMIC_PALETTE,
};
use tidytuesday::data::classify::{APOD_SUBJECTS, APOD_SUBJECT_ORDER};
use tidytuesday::data::{loader, transform, LoaderError, TransformError};

const FIXTURE: &str = "\
date,title,copyright
2020-01-01,The Andromeda Galaxy,ann
2020-01-02,Aurora over Iceland,bob
2020-01-03,The Ring Nebula,ann
2020-01-04,Comet NEOWISE at Dawn,cat
2020-01-05,Milky Way over the Dunes,ann
2020-01-06,Harvest Moon,bob
2020-01-07,A Quiet Sunset,NA
2020-01-08,Saturn at Opposition,
";

fn write_csv(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// The whole load -> transform -> chart shape every contribution follows.
fn chart_from(data: &Path) -> BarChart {
    let df = loader::read_csv(data).unwrap();
    loader::require_columns(&df, &["title", "copyright"]).unwrap();
    let credited = transform::drop_blank(&df, "copyright").unwrap();
    let counts = transform::value_counts(&credited, "copyright").unwrap();
    let top = transform::top_n(&counts, 3);

    let labels = transform::column_strings(&top, "copyright").unwrap();
    let values = transform::column_f64(&top, "count").unwrap();
    BarChart {
        title: "Most featured".into(),
        x_label: "Images".into(),
        rows: labels
            .into_iter()
            .zip(values)
            .map(|(label, value)| BarRow { label, value })
            .collect(),
        ..BarChart::default()
    }
}

#[test]
fn run_completes_and_writes_a_nonempty_png() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_csv(dir.path(), "apod.csv", FIXTURE);
    let out = dir.path().join("out.png");

    chart_from(&data).render(&out, (800, 500)).unwrap();

    assert!(fs::metadata(&out).unwrap().len() > 0);
    assert_eq!(image::image_dimensions(&out).unwrap(), (800, 500));
}

#[test]
fn rerun_with_identical_input_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_csv(dir.path(), "apod.csv", FIXTURE);
    let first = dir.path().join("first.png");
    let second = dir.path().join("second.png");

    let chart = chart_from(&data);
    chart.render(&first, (800, 500)).unwrap();
    chart.render(&second, (800, 500)).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn missing_required_column_fails_before_any_output() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_csv(dir.path(), "apod.csv", "date,title\n2020-01-01,Untitled\n");
    let out = dir.path().join("out.png");

    let df = loader::read_csv(&data).unwrap();
    let err = loader::require_columns(&df, &["title", "copyright"]).unwrap_err();
    assert!(matches!(err, LoaderError::MissingColumns { .. }));
    assert!(!out.exists());
}

#[test]
fn empty_table_fails_before_any_output() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_csv(dir.path(), "apod.csv", "date,title,copyright\n");
    let out = dir.path().join("out.png");

    let df = loader::read_csv(&data).unwrap();
    let credited = transform::drop_blank(&df, "copyright").unwrap();
    let err = transform::value_counts(&credited, "copyright").unwrap_err();
    assert!(matches!(err, TransformError::EmptyInput));
    assert!(!out.exists());
}

#[test]
fn ragged_input_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_csv(
        dir.path(),
        "bad.csv",
        "date,title,copyright\n2020-01-01,Untitled,ann,extra-field\n",
    );
    assert!(loader::read_csv(&data).is_err());
}

#[test]
fn classified_titles_render_as_stacked_bars() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_csv(dir.path(), "apod.csv", FIXTURE);
    let out = dir.path().join("stacked.png");

    let df = loader::read_csv(&data).unwrap();
    let credited = transform::drop_blank(&df, "copyright").unwrap();
    let counts = transform::value_counts(&credited, "copyright").unwrap();
    let names = transform::column_strings(&counts, "copyright").unwrap();

    let mut rows = Vec::new();
    for name in &names {
        let photos = transform::filter_eq(&credited, "copyright", name).unwrap();
        let titles = transform::column_strings(&photos, "title").unwrap();
        let segments = APOD_SUBJECT_ORDER
            .iter()
            .zip(COSMIC_PALETTE)
            .filter_map(|(subject, color)| {
                let count = titles
                    .iter()
                    .filter(|t| APOD_SUBJECTS.classify(t) == *subject)
                    .count();
                (count > 0).then(|| Segment {
                    label: (*subject).to_string(),
                    value: count as f64,
                    color,
                })
            })
            .collect();
        rows.push(StackedRow {
            label: name.clone(),
            segments,
        });
    }

    let chart = StackedBarChart {
        title: "Subjects by photographer".into(),
        label_threshold: 1.0,
        rows,
        ..StackedBarChart::default()
    };
    chart.render(&out, (900, 600)).unwrap();
    assert!(fs::metadata(&out).unwrap().len() > 0);
}

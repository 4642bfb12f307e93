//! TidyTuesday 2026-01-20: NASA's Astronomy Picture of the Day.
//!
//! Story: a small community of dedicated astrophotographers has collectively
//! contributed hundreds of images to APOD over 18 years. Each has their
//! specialty - deep sky hunters chase galaxies and nebulae, while night sky
//! photographers capture auroras and the Milky Way from Earth.
//!
//! Design: dark sky background, horizontal stacked bars for easy name
//! reading, color encodes subject, direct labels instead of a legend.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use tidytuesday::charts::{Segment, StackedBarChart, StackedRow, Theme, COSMIC_PALETTE};
use tidytuesday::data::classify::{APOD_SUBJECTS, APOD_SUBJECT_ORDER};
use tidytuesday::data::{loader, transform};

const DATA: &str = "contributions/2026/20260120/apod.csv";
const OUTPUT: &str = "contributions/2026/20260120/output.png";
const TOP_N: usize = 10;

fn main() -> anyhow::Result<()> {
    let df = loader::read_csv(DATA).with_context(|| format!("loading {DATA}"))?;
    loader::require_columns(&df, &["title", "copyright"])?;
    println!("loaded {} rows from {DATA}", df.height());

    let credited = transform::drop_blank(&df, "copyright")?;
    let counts = transform::value_counts(&credited, "copyright")?;
    let top = transform::top_n(&counts, TOP_N);
    let photographers = transform::column_strings(&top, "copyright")?;

    // One stacked row per photographer, most-featured on top, segments in
    // fixed subject order so colors line up across bars.
    let mut rows = Vec::with_capacity(photographers.len());
    for name in &photographers {
        let photos = transform::filter_eq(&credited, "copyright", name)?;
        let titles = transform::column_strings(&photos, "title")?;

        let mut by_subject: HashMap<&str, u32> = HashMap::new();
        for title in &titles {
            *by_subject.entry(APOD_SUBJECTS.classify(title)).or_insert(0) += 1;
        }

        let segments = APOD_SUBJECT_ORDER
            .iter()
            .zip(COSMIC_PALETTE)
            .filter_map(|(subject, color)| {
                let count = by_subject.get(subject).copied().unwrap_or(0);
                (count > 0).then(|| Segment {
                    label: (*subject).to_string(),
                    value: f64::from(count),
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
        title: "The Guardians of the Night Sky".into(),
        subtitle: "Top 10 astrophotographers by total number of images featured in NASA's APOD (2007-2025)"
            .into(),
        caption: "Data: NASA APOD via TidyTuesday".into(),
        x_label: "Total number of photographs featured in APOD".into(),
        theme: Theme::cosmic(),
        label_gutter: 280,
        rows,
        ..StackedBarChart::default()
    };

    chart
        .render(Path::new(OUTPUT), (1800, 1200))
        .with_context(|| format!("rendering {OUTPUT}"))?;
    println!("wrote {OUTPUT}");
    Ok(())
}

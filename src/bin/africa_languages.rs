//! TidyTuesday 2026-01-13: Languages of Africa.
//!
//! Story: the number of languages natively spoken in Africa is variously
//! estimated (depending on the delineation of language vs. dialect) at
//! between 1,250 and 2,100, by some counts over 3,000. This chart answers
//! the first question the dataset invites: which country has the largest
//! number of spoken languages?
//!
//! Design: minimalist light theme, nothing on the canvas but the bars,
//! their names and their counts.

use std::path::Path;

use anyhow::Context;
use tidytuesday::charts::{rgb, BarChart, BarRow, Theme};
use tidytuesday::data::{loader, transform};

const DATA: &str = "contributions/2026/20260113/africa.csv";
const OUTPUT: &str = "contributions/2026/20260113/languages_by_country.png";
const TOP_N: usize = 15;

fn main() -> anyhow::Result<()> {
    let df = loader::read_csv(DATA).with_context(|| format!("loading {DATA}"))?;
    loader::require_columns(&df, &["language", "country"])?;
    println!("loaded {} rows from {DATA}", df.height());
    if loader::require_columns(&df, &["family"]).is_ok() {
        let families = transform::unique_values(&df, "family")?;
        println!("{} language families represented", families.len());
    }

    let located = transform::drop_blank(&df, "country")?;
    let counts = transform::value_counts(&located, "country")?;
    let top = transform::top_n(&counts, TOP_N);

    let countries = transform::column_strings(&top, "country")?;
    let totals = transform::column_f64(&top, "count")?;
    let rows = countries
        .into_iter()
        .zip(totals)
        .map(|(label, value)| BarRow { label, value })
        .collect();

    let chart = BarChart {
        title: "A Continent of Many Tongues".into(),
        subtitle: "African countries with the most documented living languages".into(),
        caption: "Data: TidyTuesday, 2026-01-13".into(),
        x_label: "Number of documented languages".into(),
        theme: Theme::minimal(),
        bar_color: rgb(0xB5551D),
        label_gutter: 320,
        rows,
    };

    chart
        .render(Path::new(OUTPUT), (1600, 1000))
        .with_context(|| format!("rendering {OUTPUT}"))?;
    println!("wrote {OUTPUT}");
    Ok(())
}

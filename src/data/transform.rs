//! Table Transform Module
//! The short, linear table operations every contribution is built from:
//! filter, count, sort, take, extract. Input frames are never mutated;
//! every operation returns a new derived table.

use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("input table has no rows")]
    EmptyInput,
}

/// Drop rows where `column` is null, empty, or the literal "NA".
///
/// Upstream datasets use "NA" for missing credits rather than a real null.
pub fn drop_blank(df: &DataFrame, column: &str) -> Result<DataFrame, TransformError> {
    let kept = df
        .clone()
        .lazy()
        .filter(
            col(column)
                .is_not_null()
                .and(col(column).neq(lit("")))
                .and(col(column).neq(lit("NA"))),
        )
        .collect()?;
    Ok(kept)
}

/// Keep rows where `column` equals `value`.
pub fn filter_eq(df: &DataFrame, column: &str, value: &str) -> Result<DataFrame, TransformError> {
    let filtered = df
        .clone()
        .lazy()
        .filter(col(column).eq(lit(value)))
        .collect()?;
    Ok(filtered)
}

/// Count rows per distinct value of `column`.
///
/// Output columns are `[column, "count"]`, sorted by count descending with
/// ties broken alphabetically so re-runs always order rows the same way.
/// An empty input is a hard error: rendering a chart from zero rows would
/// silently overwrite a previous good image with a blank one.
pub fn value_counts(df: &DataFrame, column: &str) -> Result<DataFrame, TransformError> {
    if df.height() == 0 {
        return Err(TransformError::EmptyInput);
    }

    let counts = df
        .clone()
        .lazy()
        .group_by([col(column)])
        .agg([len().alias("count")])
        .sort(
            ["count", column],
            SortMultipleOptions::default().with_order_descending_multi([true, false]),
        )
        .collect()?;
    Ok(counts)
}

/// First `n` rows of a derived table.
pub fn top_n(df: &DataFrame, n: usize) -> DataFrame {
    df.head(Some(n))
}

/// Sorted unique non-null values of a string column.
pub fn unique_values(df: &DataFrame, column: &str) -> Result<Vec<String>, TransformError> {
    let unique = df.column(column)?.unique()?;
    let series = unique.as_materialized_series();

    let mut values: Vec<String> = (0..series.len())
        .filter_map(|i| {
            let val = series.get(i).ok()?;
            if val.is_null() {
                None
            } else {
                Some(val.to_string().trim_matches('"').to_string())
            }
        })
        .collect();
    values.sort();
    Ok(values)
}

/// Extract a string column in row order.
pub fn column_strings(df: &DataFrame, column: &str) -> Result<Vec<String>, TransformError> {
    let series = df.column(column)?;
    let values = (0..df.height())
        .filter_map(|i| {
            let val = series.get(i).ok()?;
            if val.is_null() {
                None
            } else {
                Some(val.to_string().trim_matches('"').to_string())
            }
        })
        .collect();
    Ok(values)
}

/// Extract a numeric column as f64 in row order, skipping nulls.
pub fn column_f64(df: &DataFrame, column: &str) -> Result<Vec<f64>, TransformError> {
    let as_f64 = df.column(column)?.cast(&DataType::Float64)?;
    let ca = as_f64.f64()?;
    Ok(ca.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DataFrame {
        DataFrame::new(vec![
            Column::new(
                "copyright".into(),
                vec!["ann", "bob", "NA", "", "ann", "cat", "bob", "ann"],
            ),
            Column::new(
                "title".into(),
                vec!["t1", "t2", "t3", "t4", "t5", "t6", "t7", "t8"],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn drop_blank_removes_empty_and_na() {
        let credited = drop_blank(&sample(), "copyright").unwrap();
        assert_eq!(credited.height(), 6);
        let names = column_strings(&credited, "copyright").unwrap();
        assert!(!names.iter().any(|n| n.is_empty() || n == "NA"));
    }

    #[test]
    fn value_counts_sorts_desc_with_alpha_tiebreak() {
        let credited = drop_blank(&sample(), "copyright").unwrap();
        let counts = value_counts(&credited, "copyright").unwrap();
        assert_eq!(
            column_strings(&counts, "copyright").unwrap(),
            vec!["ann", "bob", "cat"]
        );
        assert_eq!(column_f64(&counts, "count").unwrap(), vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn value_counts_rejects_empty_input() {
        let empty = sample().head(Some(0));
        let err = value_counts(&empty, "copyright").unwrap_err();
        assert!(matches!(err, TransformError::EmptyInput));
    }

    #[test]
    fn top_n_truncates() {
        let credited = drop_blank(&sample(), "copyright").unwrap();
        let counts = value_counts(&credited, "copyright").unwrap();
        let top = top_n(&counts, 2);
        assert_eq!(top.height(), 2);
        // top_n past the end is the whole table
        assert_eq!(top_n(&counts, 99).height(), 3);
    }

    #[test]
    fn filter_eq_selects_matching_rows() {
        let ann = filter_eq(&sample(), "copyright", "ann").unwrap();
        assert_eq!(ann.height(), 3);
        assert_eq!(
            column_strings(&ann, "title").unwrap(),
            vec!["t1", "t5", "t8"]
        );
    }

    #[test]
    fn unique_values_sorted_without_nulls() {
        let families = DataFrame::new(vec![Column::new(
            "family".into(),
            vec![Some("Niger-Congo"), None, Some("Afro-Asiatic"), Some("Niger-Congo")],
        )])
        .unwrap();
        assert_eq!(
            unique_values(&families, "family").unwrap(),
            vec!["Afro-Asiatic", "Niger-Congo"]
        );
    }
}

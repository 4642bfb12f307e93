//! CSV Data Loader Module
//! Strict CSV loading for contribution datasets using Polars.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("dataset not found: {0}")]
    FileNotFound(PathBuf),
    #[error("failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("missing required column(s): {}", missing.join(", "))]
    MissingColumns { missing: Vec<String> },
}

/// Load a contribution dataset.
///
/// Datasets are pre-cleaned upstream, so anything Polars cannot parse is a
/// fatal error rather than a row to skip.
pub fn read_csv(path: impl AsRef<Path>) -> Result<DataFrame, LoaderError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoaderError::FileNotFound(path.to_path_buf()));
    }

    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(10000))
        .finish()?
        .collect()?;

    Ok(df)
}

/// Verify the columns a transform depends on before doing anything else.
///
/// This runs ahead of any rendering, so a schema mismatch can never leave a
/// partial or stale-looking output image behind.
pub fn require_columns(df: &DataFrame, required: &[&str]) -> Result<(), LoaderError> {
    let present: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    let missing: Vec<String> = required
        .iter()
        .filter(|name| !present.iter().any(|p| p == *name))
        .map(|name| name.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(LoaderError::MissingColumns { missing })
    }
}

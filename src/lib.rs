//! Weekly TidyTuesday data visualizations.
//!
//! Each contribution lives in its own binary under `src/bin/` and follows the
//! same shape: load a dataset from its contribution directory, derive a small
//! table with Polars, render one static chart image next to the data. The
//! library modules here are the shared vocabulary for that pipeline; they hold
//! no state and no coupling between contributions.

pub mod charts;
pub mod data;

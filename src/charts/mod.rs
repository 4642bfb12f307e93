//! Charts module - static chart rendering

mod bars;
mod style;

pub use bars::{BarChart, BarRow, ChartError, Segment, StackedBarChart, StackedRow};
pub use style::{contrast_ink, rgb, Theme, COSMIC_PALETTE};

//! Chart Style Module
//! Themes and palettes shared by the static renderers.

use plotters::style::RGBColor;

/// `0xRRGGBB` to an RGB color.
pub const fn rgb(hex: u32) -> RGBColor {
    RGBColor((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// Colors for the non-data parts of a chart.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: RGBColor,
    /// Titles and row labels.
    pub ink: RGBColor,
    /// Subtitles, totals, tick labels, captions.
    pub muted: RGBColor,
    /// Axis lines.
    pub faint: RGBColor,
}

impl Theme {
    /// Dark space theme.
    pub const fn cosmic() -> Self {
        Self {
            background: rgb(0x0B1E38),
            ink: rgb(0xE8E8E8),
            muted: rgb(0x888888),
            faint: rgb(0x333333),
        }
    }

    /// Light theme with as little non-data ink as possible.
    pub const fn minimal() -> Self {
        Self {
            background: rgb(0xFFFFFF),
            ink: rgb(0x222222),
            muted: rgb(0x757575),
            faint: rgb(0xD9D9D9),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::minimal()
    }
}

/// Segment colors for the APOD subjects, indexed in
/// [`crate::data::classify::APOD_SUBJECT_ORDER`] order.
pub const COSMIC_PALETTE: [RGBColor; 10] = [
    rgb(0x5B9BD5), // Galaxies - spiral-arm blue
    rgb(0xFF6B35), // Nebulae - emission orange-red
    rgb(0xF4E04D), // Milky Way - galactic-core yellow
    rgb(0xE8E8E8), // Moon - silver
    rgb(0x70D6FF), // Planets - gas-giant cyan
    rgb(0x06FFA5), // Auroras - emerald
    rgb(0xC77DFF), // Comets - ion-tail purple
    rgb(0xFFB703), // Sun - corona amber
    rgb(0x8B8B8B), // Eclipses - gray
    rgb(0x4A4A4A), // Other - dark gray
];

/// Black or white, whichever reads better on `fill`.
pub fn contrast_ink(fill: &RGBColor) -> RGBColor {
    let RGBColor(r, g, b) = *fill;
    let luminance = 0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
    if luminance < 140.0 {
        rgb(0xFFFFFF)
    } else {
        rgb(0x111111)
    }
}

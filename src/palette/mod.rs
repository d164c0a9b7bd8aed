//! Colour palettes for chart series.
//!
//! - [`categorical()`]: hand-picked palettes for separating unrelated groups
//! - [`diverging()`]: two hues diverging from a light midpoint
//! - [`sequential()`]: a luminosity ramp around a single base colour
//! - [`lum_shift()`]: lighten or darken a list of colours
//!
//! Every palette returns `#rrggbb` strings in lower case.
//!
//! ```rust
//! use series_summary::palette::{categorical, lum_shift, sequential};
//!
//! let colors = categorical(1).unwrap();
//! assert_eq!(colors.len(), 9);
//! assert!(categorical(7).is_none());
//!
//! let lighter = lum_shift(colors.as_slice(), 0.2).unwrap();
//! assert_eq!(lighter.len(), colors.len());
//!
//! let reds = sequential("#ff0000", 9).unwrap();
//! assert_eq!(reds[4], "#ff0000");
//! ```

mod color;

pub use color::HexColor;

use crate::error::SeriesResult;

/// Luminosity change between neighbouring steps of a sequential palette (per unit of count).
const SEQUENTIAL_LUM_STEP: f64 = 0.1;

/// Palettes for categorical (nominal) data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoricalPalette {
    /// Stephen Few, "Show Me the Numbers".
    ShowMeTheNumbers = 1,
    /// ColorBrewer pastel set.
    ColorBrewerPastel = 2,
    /// Material design accents.
    MaterialDesign = 3,
}

impl CategoricalPalette {
    /// Look up a palette by its numeric id.
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::ShowMeTheNumbers),
            2 => Some(Self::ColorBrewerPastel),
            3 => Some(Self::MaterialDesign),
            _ => None,
        }
    }

    /// The nine colours of this palette, in display order.
    pub fn colors(self) -> &'static [&'static str; 9] {
        match self {
            // blue, orange, green, pink, light brown, purple, dark yellow, red, black
            Self::ShowMeTheNumbers => &[
                "#5da5da", "#faa43a", "#60bd68", "#f17cb0", "#b2912f", "#b276b2", "#decf3f",
                "#f15854", "#4d4d4d",
            ],
            Self::ColorBrewerPastel => &[
                "#fbb4ae", "#b3cde3", "#ccebc5", "#decbe4", "#fed9a6", "#ffffcc", "#e5d8bd",
                "#fddaec", "#f2f2f2",
            ],
            Self::MaterialDesign => &[
                "#3f51b5", "#ff9800", "#8bc34a", "#9c27b0", "#ffeb3b", "#03a9f4", "#f44336",
                "#009688", "#795548",
            ],
        }
    }
}

/// Palettes for quantitative data with a critical midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivergingPalette {
    /// ColorBrewer brown to teal, colour-blind safe.
    BrownTeal = 1,
    /// ColorBrewer red, amber, green.
    RedYellowGreen = 2,
    /// Blue through ivory to red.
    BlueIvoryRed = 3,
}

impl DivergingPalette {
    /// Look up a palette by its numeric id.
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::BrownTeal),
            2 => Some(Self::RedYellowGreen),
            3 => Some(Self::BlueIvoryRed),
            _ => None,
        }
    }

    /// The nine colours from one end of the scale to the other, midpoint fifth.
    pub fn colors(self) -> &'static [&'static str; 9] {
        match self {
            Self::BrownTeal => &[
                "#8c510a", "#bf812d", "#dfc27d", "#f6e8c3", "#f5f5f5", "#c7eae5", "#80cdc1",
                "#35978f", "#01665e",
            ],
            Self::RedYellowGreen => &[
                "#d73027", "#f46d43", "#fdae61", "#fee08b", "#ffffbf", "#d9ef8b", "#a6d96a",
                "#66bd63", "#1a9850",
            ],
            Self::BlueIvoryRed => &[
                "#0000ff", "#8052fe", "#b58bfb", "#ddc5f7", "#fffff0", "#ffcfb4", "#ff9e7a",
                "#ff6842", "#ff0000",
            ],
        }
    }
}

/// Categorical palette `id` (1, 2 or 3); `None` for any other id.
pub fn categorical(id: u8) -> Option<Vec<String>> {
    CategoricalPalette::from_id(id).map(|p| to_strings(p.colors()))
}

/// Diverging palette `id` (1, 2 or 3); `None` for any other id.
pub fn diverging(id: u8) -> Option<Vec<String>> {
    DivergingPalette::from_id(id).map(|p| to_strings(p.colors()))
}

/// `count` shades of `base`, darkest first.
///
/// Luminosity offsets run linearly from `-0.05 * count` to `+0.05 * count`; a single shade is
/// the base colour itself.
pub fn sequential(base: &str, count: usize) -> SeriesResult<Vec<String>> {
    let base = HexColor::parse(base)?;
    let lum_max = SEQUENTIAL_LUM_STEP * count as f64 / 2.0;
    let lum_min = -lum_max;

    Ok((0..count)
        .map(|i| {
            let lum = if count > 1 {
                lum_min + (lum_max - lum_min) * i as f64 / (count - 1) as f64
            } else {
                0.0
            };
            base.shift_luminosity(lum).to_string()
        })
        .collect())
}

/// Apply the same luminosity shift to every colour in `colors`.
pub fn lum_shift<S: AsRef<str>>(colors: &[S], luminosity: f64) -> SeriesResult<Vec<String>> {
    colors
        .iter()
        .map(|c| Ok(HexColor::parse(c.as_ref())?.shift_luminosity(luminosity).to_string()))
        .collect()
}

fn to_strings(colors: &[&str]) -> Vec<String> {
    colors.iter().map(|c| c.to_string()).collect()
}

//! Hex colour parsing and luminosity shifting.

use std::fmt;

use crate::error::{SeriesError, SeriesResult};

/// An opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex colour string.
    ///
    /// Characters other than hex digits are stripped first, so `"#FF8800"`, `"ff8800"` and
    /// `" #ff-88-00 "` all parse alike. Fewer than six digits are read as `rgb` shorthand (each of
    /// the first three digits doubled); beyond six, the remainder is ignored.
    pub fn parse(raw: &str) -> SeriesResult<Self> {
        let digits: Vec<u8> = raw
            .chars()
            .filter_map(|c| c.to_digit(16))
            .map(|d| d as u8)
            .collect();

        let channel = |hi: u8, lo: u8| hi * 16 + lo;
        match digits.as_slice() {
            [r1, r2, g1, g2, b1, b2, ..] => Ok(Self::new(
                channel(*r1, *r2),
                channel(*g1, *g2),
                channel(*b1, *b2),
            )),
            [r, g, b, ..] => Ok(Self::new(channel(*r, *r), channel(*g, *g), channel(*b, *b))),
            _ => Err(SeriesError::InvalidColor {
                raw: raw.to_string(),
            }),
        }
    }

    /// Scale each channel by `1 + luminosity`, clamped to `0..=255`.
    ///
    /// Positive values lighten, negative values darken, zero is a no-op. NaN counts as zero.
    pub fn shift_luminosity(self, luminosity: f64) -> Self {
        let lum = if luminosity.is_nan() { 0.0 } else { luminosity };
        let shift = |c: u8| {
            let c = f64::from(c);
            (c + c * lum).clamp(0.0, 255.0).round() as u8
        };
        Self::new(shift(self.r), shift(self.g), shift(self.b))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

//! Square colours
//!
//! A colour is a 24-bit RGB value written `#RRGGBB` in uppercase hex.
//! New squares draw a uniformly random colour that differs from the colour
//! of the square added just before them.

use crate::rng::RngManager;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of distinct 24-bit RGB values
pub const COLOR_SPACE: u64 = 0x100_0000;

/// Errors that can occur when parsing a colour
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("Invalid colour '{0}': expected '#' followed by six hex digits")]
    InvalidFormat(String),
}

/// A `#RRGGBB` colour, always stored normalised to uppercase
///
/// # Example
/// ```
/// use square_sequencer_core::placement::Color;
///
/// let color = Color::parse("#ff5733").unwrap();
/// assert_eq!(color.as_str(), "#FF5733");
/// assert_eq!(Color::from_rgb(0x00_00_0A).as_str(), "#00000A");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Build a colour from the low 24 bits of `rgb`
    pub fn from_rgb(rgb: u32) -> Self {
        Color(format!("#{:06X}", rgb & 0xFF_FFFF))
    }

    /// Parse `#RRGGBB` (either hex case)
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let digits = s
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| ColorError::InvalidFormat(s.to_string()))?;

        Ok(Color(format!("#{}", digits.to_ascii_uppercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The colour as a 24-bit integer
    pub fn rgb(&self) -> u32 {
        // Invariant: self.0 is always '#' + six hex digits
        u32::from_str_radix(&self.0[1..], 16).unwrap_or_default()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

/// Draw the colour for the next square
///
/// Resamples until the result differs from `previous`. Only the single
/// previous colour is avoided; colours further back may repeat. `None`
/// (no previous square) accepts the first draw.
///
/// # Example
/// ```
/// use square_sequencer_core::placement::next_color;
/// use square_sequencer_core::RngManager;
///
/// let mut rng = RngManager::new(7);
/// let first = next_color(None, &mut rng);
/// let second = next_color(Some(&first), &mut rng);
/// assert_ne!(first, second);
/// ```
pub fn next_color(previous: Option<&Color>, rng: &mut RngManager) -> Color {
    loop {
        let candidate = Color::from_rgb(rng.next_below(COLOR_SPACE) as u32);
        if previous != Some(&candidate) {
            return candidate;
        }
    }
}

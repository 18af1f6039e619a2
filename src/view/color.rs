//! Color types for point styling.

use std::{fmt, str::FromStr};

use anyhow::{Result, anyhow, ensure};
use serde::{Deserialize, Serialize};

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Build from a packed `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }
}

impl fmt::Display for Rgb {
    /// Format as CSS hex: #rrggbb
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = anyhow::Error;

    /// Parse `#rrggbb` or the short `#rgb` form.
    fn from_str(s: &str) -> Result<Self> {
        let hex = s.trim().strip_prefix('#')
            .ok_or_else(|| anyhow!("[view::color] Color {:?} must start with '#'", s))?;
        ensure!(hex.chars().all(|c| c.is_ascii_hexdigit()), "[view::color] Color {:?} is not hexadecimal", s);

        let expanded = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect::<String>(),
            6 => hex.to_string(),
            _ => return Err(anyhow!("[view::color] Color {:?} must have 3 or 6 hex digits", s)),
        };

        let packed = u32::from_str_radix(&expanded, 16)?;
        Ok(Self::from_hex(packed))
    }
}

impl TryFrom<String> for Rgb {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> { value.parse() }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self { color.to_string() }
}

/// Default and selected shade for one category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorPair {
    pub default: Rgb,
    pub selected: Rgb,
}

impl ColorPair {
    pub const fn new(default: u32, selected: u32) -> Self {
        Self { default: Rgb::from_hex(default), selected: Rgb::from_hex(selected) }
    }

    #[inline]
    pub fn pick(&self, is_selected: bool) -> Rgb {
        if is_selected { self.selected } else { self.default }
    }
}

#[cfg(test)]
mod tests {
    use super::{ColorPair, Rgb};

    #[test]
    fn hex_display_round_trips_through_parse() {
        let color = Rgb::from_hex(0x87aa4b);
        assert_eq!(color.to_string(), "#87aa4b");
        assert_eq!("#87AA4B".parse::<Rgb>().unwrap(), color);
    }

    #[test]
    fn short_form_expands() {
        assert_eq!("#333".parse::<Rgb>().unwrap(), Rgb::from_hex(0x333333));
    }

    #[test]
    fn rejects_malformed_colors() {
        assert!("87aa4b".parse::<Rgb>().is_err());
        assert!("#87aa4".parse::<Rgb>().is_err());
        assert!("#zzzzzz".parse::<Rgb>().is_err());
    }

    #[test]
    fn pair_picks_by_selection() {
        let pair = ColorPair::new(0xa5444d, 0x89303b);
        assert_eq!(pair.pick(false).to_string(), "#a5444d");
        assert_eq!(pair.pick(true).to_string(), "#89303b");
    }
}

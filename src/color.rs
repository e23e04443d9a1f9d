use std::{fmt, str::FromStr};

use color::DynamicColor;
use serde::Deserialize;

/// Wrapper around the `DynamicColor` type from the color crate.
/// This provides convenience methods for working with colors in schematic
/// commands and in the SVG exporter.
#[derive(Clone, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Color { color }),
            Err(err) => Err(format!("Invalid color '{color_str}': {err}")),
        }
    }

    /// Get the sanitized ID-safe string for this color (for use in markers)
    pub fn to_id_safe_string(&self) -> String {
        let color_str = self.to_string();
        // Replace invalid ID characters with underscores
        let mut sanitized = color_str
            .replace('#', "hex")
            .replace(['(', ')', ',', ' ', ';', '.', '%'], "_");

        // Ensure the ID starts with a letter (required for valid SVG IDs)
        if sanitized.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            sanitized = format!("c_{sanitized}");
        }

        sanitized
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").unwrap()
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Themes name colors as plain CSS strings in TOML
impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        svg::node::Value::from(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_color() {
        let color = Color::new("red").unwrap();
        // Display yields a CSS serialization that parses back to the same
        // color, whatever form the color crate chooses.
        assert_eq!(Color::new(&color.to_string()).unwrap(), color);
    }

    #[test]
    fn test_parse_hex_color() {
        assert!(Color::new("#47c295").is_ok());
    }

    #[test]
    fn test_parse_invalid_color() {
        let err = Color::new("not-a-color").unwrap_err();
        assert!(err.contains("not-a-color"));
    }

    #[test]
    fn test_default_is_black() {
        assert_eq!(Color::default(), Color::new("black").unwrap());
    }

    #[test]
    fn test_id_safe_string() {
        let id = Color::new("rgb(255, 0, 0)").unwrap().to_id_safe_string();
        assert!(!id.contains('('));
        assert!(!id.contains(','));
        assert!(!id.contains(' '));
        assert!(!id.chars().next().unwrap().is_ascii_digit());
    }

    #[test]
    fn test_deserialize_from_toml_string() {
        #[derive(Deserialize)]
        struct Holder {
            fill: Color,
        }

        let holder: Holder = toml::from_str(r#"fill = "brown""#).unwrap();
        assert_eq!(holder.fill, Color::new("brown").unwrap());

        assert!(toml::from_str::<Holder>(r#"fill = "bogus!""#).is_err());
    }
}

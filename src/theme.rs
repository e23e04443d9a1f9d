//! Visual constants for the schematic.
//!
//! All generator geometry flows from a single immutable [`Theme`] passed
//! explicitly through the pipeline; there are no module-level constants.
//! Every field can be overridden from the `[theme]` section of a TOML
//! config file, which is how alternate scales and palettes are tested.

use serde::Deserialize;

use crate::color::Color;

/// Geometry and palette for one schematic.
///
/// Lengths are in drawing units (the chip is `chip_width` wide); stroke
/// weights, tap sizes and label offsets are in surface points and are
/// applied by the renderer after scaling.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Width of a single memory chip
    pub chip_width: f32,
    /// Height of a single memory chip
    pub chip_height: f32,
    /// Width of the bracket framing each chip's MAR notch
    pub notch_width: f32,
    /// Width of the MAR cell extending left of the notch
    pub mar_width: f32,
    /// X position of the R/W trunk line
    pub rw_x: f32,
    /// X offset of the per-chip R/W elbow from the chip origin
    pub rw_connect_offset: f32,
    /// X position of the decoder's output edge
    pub decoder_x: f32,
    /// Height of the decoder body
    pub decoder_height: f32,
    /// X offset of the per-chip select tap from the chip origin
    pub select_offset: f32,
    /// X offset of the per-chip data-bus taps from the chip origin
    pub data_tap_offset: f32,

    /// Stroke color for chips, decoder and address lines
    pub outline: Color,
    /// Fill color for chip bodies
    pub chip_fill: Color,
    /// Fill color for MAR cells
    pub mar_fill: Color,
    /// Stroke color for the R/W control lines
    pub control: Color,

    /// Stroke weight for chip and MAR outlines
    pub outline_weight: f32,
    /// Stroke weight for decoder and selection lines
    pub select_weight: f32,
    /// Stroke weight for plain connection and bus lines
    pub line_weight: f32,
    /// Diameter of the decoder tap markers
    pub tap_size: f32,
}

impl Theme {
    /// Center-to-center distance between adjacent chips. Derived from the
    /// chip width so scaled themes keep their proportions.
    pub fn chip_spacing(&self) -> f32 {
        self.chip_width.mul_add(2.0, 1.0)
    }

    /// Y offset of the R/W tap above each chip's baseline.
    pub fn rw_y(&self) -> f32 {
        self.chip_height + self.chip_height / 6.0
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            chip_width: 1.0,
            chip_height: 1.5,
            notch_width: 0.15,
            mar_width: 0.2,
            rw_x: -3.0,
            rw_connect_offset: 0.25,
            decoder_x: -5.0,
            decoder_height: 2.0,
            select_offset: 0.6,
            data_tap_offset: 0.25,
            outline: Color::new("black").unwrap(),
            chip_fill: Color::new("#47c295").unwrap(),
            mar_fill: Color::new("brown").unwrap(),
            control: Color::new("red").unwrap(),
            outline_weight: 2.0,
            select_weight: 1.75,
            line_weight: 1.5,
            tap_size: 7.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_default_derived_geometry() {
        let theme = Theme::default();
        assert_approx_eq!(f32, theme.chip_spacing(), 3.0);
        assert_approx_eq!(f32, theme.rw_y(), 1.75);
    }

    #[test]
    fn test_derived_geometry_follows_scale() {
        let theme = Theme {
            chip_width: 2.0,
            chip_height: 3.0,
            ..Theme::default()
        };
        assert_approx_eq!(f32, theme.chip_spacing(), 5.0);
        assert_approx_eq!(f32, theme.rw_y(), 3.5);
    }

    #[test]
    fn test_deserialize_partial_override() {
        let theme: Theme = toml::from_str(
            r#"
            chip_width = 2.0
            chip_fill = "steelblue"
            "#,
        )
        .unwrap();

        assert_approx_eq!(f32, theme.chip_width, 2.0);
        assert_eq!(theme.chip_fill, Color::new("steelblue").unwrap());
        // Untouched fields keep their defaults
        assert_approx_eq!(f32, theme.mar_width, 0.2);
        assert_eq!(theme.control, Color::new("red").unwrap());
    }
}

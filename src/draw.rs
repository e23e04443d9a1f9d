//! Renderer-agnostic drawing primitives.
//!
//! The layout engine's sole output is an ordered `Vec<DrawCommand>`; the
//! order of the sequence is the z-order of overlapping strokes. Commands
//! carry no reference to any drawing surface, which is what makes the
//! geometry testable headlessly.

use crate::{
    color::Color,
    geometry::{Bounds, Point},
};

/// Style for a text annotation.
///
/// `size` is in surface points; the renderer applies it after scaling.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelStyle {
    pub size: f32,
    pub bold: bool,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            size: 10.0,
            bold: false,
        }
    }
}

/// A single drawing primitive in schematic coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// An axis-aligned rectangle anchored at its bottom-left corner.
    Rect {
        origin: Point,
        width: f32,
        height: f32,
        stroke: Color,
        fill: Color,
        weight: f32,
    },
    /// A straight line segment. A zero-length segment is legal and renders
    /// as nothing visible; the R/W trunk degenerates to one for single-row
    /// grids.
    Line {
        from: Point,
        to: Point,
        color: Color,
        weight: f32,
    },
    /// A line segment with an arrowhead at `to`. `head_size` is in drawing
    /// units.
    Arrow {
        from: Point,
        to: Point,
        head_size: f32,
        color: Color,
        weight: f32,
    },
    /// A text annotation anchored at `position`, nudged by `offset` surface
    /// points (positive y is up, matching the schematic axis).
    Label {
        position: Point,
        text: String,
        offset: Point,
        style: LabelStyle,
    },
    /// A filled circular tap marker; `size` is its diameter in surface
    /// points.
    Tap {
        center: Point,
        size: f32,
        color: Color,
    },
}

impl DrawCommand {
    /// Bounding box in drawing units.
    ///
    /// Label offsets, tap sizes and stroke weights are surface-point
    /// quantities and do not extend the bounds.
    pub fn bounds(&self) -> Bounds {
        match self {
            Self::Rect {
                origin,
                width,
                height,
                ..
            } => Bounds::from_point(*origin)
                .include(Point::new(origin.x + width, origin.y + height)),
            Self::Line { from, to, .. } | Self::Arrow { from, to, .. } => {
                Bounds::from_point(*from).include(*to)
            }
            Self::Label { position, .. } => Bounds::from_point(*position),
            Self::Tap { center, .. } => Bounds::from_point(*center),
        }
    }
}

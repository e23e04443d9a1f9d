//! The row decoder: a trapezoid-pair symbol left of the grid whose output
//! taps fan out to one chip-select line per row.
//!
//! Taps are laid out symmetrically from the outside in: pair `k` serves the
//! k-th row from the bottom and the k-th row from the top. Each pair is
//! computed independently from `rows`, the body span and `k` alone, so the
//! geometry has no loop-carried state. For an odd row count the innermost
//! pair collapses onto the middle row and emits a single connection set.

use crate::{
    draw::DrawCommand,
    geometry::Point,
    memory::GridDimensions,
    theme::Theme,
};

/// Horizontal stagger added to each pair's reach so selection lines from
/// different pairs never overlap.
const REACH_STEP: f32 = 0.2;

/// Inset of the inner bracket relative to the outer one.
const BRACKET_INSET: f32 = 0.25;

/// Horizontal gap between the outer and inner brackets.
const BRACKET_GAP: f32 = 0.3;

/// Length of the enable stub on the decoder's left edge.
const ENABLE_STUB: f32 = 0.5;

/// How far each chip-select line floats above its row of chips.
const SELECT_RISE: f32 = 0.5;

pub fn generate(dims: &GridDimensions, theme: &Theme, out: &mut Vec<DrawCommand>) {
    let rows = dims.rows();
    let spacing = theme.chip_spacing();

    let x = theme.decoder_x;
    let x_left = x - BRACKET_GAP;
    let top = rows as f32 * spacing / 2.0;
    let bottom = top - theme.decoder_height;

    if rows > 1 {
        body(theme, x, x_left, bottom, top, out);
    }

    // Vertical pitch between adjacent output taps on the decoder edge.
    let step = (top - bottom) / (rows as f32 + 1.0);
    let select_y = |row: u32| row as f32 * spacing + theme.chip_height + SELECT_RISE;
    let reach_end = (dims.columns() - 1) as f32 * spacing + theme.select_offset;

    for k in 1..=rows.div_ceil(2) {
        let low_row = k - 1;
        let high_row = rows - k;
        let y_low = bottom + k as f32 * step;
        let y_high = top - k as f32 * step;
        let reach_x = x + REACH_STEP * k as f32;

        // For odd row counts the innermost pair is the middle row paired
        // with itself; emit its connection set exactly once.
        let mut rows_in_pair = vec![(low_row, y_low)];
        if high_row != low_row {
            rows_in_pair.push((high_row, y_high));
        }

        if rows > 1 {
            for (_, y) in &rows_in_pair {
                out.push(DrawCommand::Tap {
                    center: Point::new(x, *y),
                    size: theme.tap_size,
                    color: theme.outline.clone(),
                });
            }
            for (_, y) in &rows_in_pair {
                out.push(DrawCommand::Line {
                    from: Point::new(x, *y),
                    to: Point::new(reach_x, *y),
                    color: theme.outline.clone(),
                    weight: theme.select_weight,
                });
            }
            for (row, y) in &rows_in_pair {
                out.push(DrawCommand::Line {
                    from: Point::new(reach_x, *y),
                    to: Point::new(reach_x, select_y(*row)),
                    color: theme.outline.clone(),
                    weight: theme.select_weight,
                });
            }
        }

        for (row, _) in &rows_in_pair {
            out.push(DrawCommand::Line {
                from: Point::new(reach_x, select_y(*row)),
                to: Point::new(reach_end, select_y(*row)),
                color: theme.outline.clone(),
                weight: theme.select_weight,
            });
        }

        for col in 0..dims.columns() {
            let tap_x = col as f32 * spacing + theme.select_offset;
            for (row, _) in &rows_in_pair {
                out.push(DrawCommand::Line {
                    from: Point::new(tap_x, select_y(*row)),
                    to: Point::new(tap_x, select_y(*row) - SELECT_RISE),
                    color: theme.outline.clone(),
                    weight: theme.select_weight,
                });
            }
            for (row, _) in &rows_in_pair {
                out.push(DrawCommand::Tap {
                    center: Point::new(tap_x, select_y(*row) - SELECT_RISE),
                    size: theme.tap_size,
                    color: theme.outline.clone(),
                });
            }
        }
    }
}

/// The decoder symbol itself: outer bracket on the output edge, smaller
/// inner bracket on the input side, two diagonals joining them, and an
/// enable stub at the vertical midpoint.
fn body(theme: &Theme, x: f32, x_left: f32, bottom: f32, top: f32, out: &mut Vec<DrawCommand>) {
    let bottom_l = bottom + BRACKET_INSET;
    let top_l = top - BRACKET_INSET;

    out.push(DrawCommand::Line {
        from: Point::new(x, bottom),
        to: Point::new(x, top),
        color: theme.outline.clone(),
        weight: theme.line_weight,
    });
    out.push(DrawCommand::Line {
        from: Point::new(x_left, bottom_l),
        to: Point::new(x_left, top_l),
        color: theme.outline.clone(),
        weight: theme.line_weight,
    });
    out.push(DrawCommand::Line {
        from: Point::new(x_left, bottom_l),
        to: Point::new(x, bottom),
        color: theme.outline.clone(),
        weight: theme.line_weight,
    });
    out.push(DrawCommand::Line {
        from: Point::new(x_left, top_l),
        to: Point::new(x, top),
        color: theme.outline.clone(),
        weight: theme.line_weight,
    });

    let mid_y = bottom_l + (top_l - bottom_l) / 2.0;
    out.push(DrawCommand::Line {
        from: Point::new(x_left - ENABLE_STUB, mid_y),
        to: Point::new(x_left, mid_y),
        color: theme.outline.clone(),
        weight: theme.select_weight,
    });
}

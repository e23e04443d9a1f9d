//! Per-chip addressing units: a bracket notch on the chip's left edge and
//! the MAR (memory address register) cell extending left from it.

use crate::{
    draw::DrawCommand,
    geometry::Point,
    memory::GridDimensions,
    theme::Theme,
};

pub fn generate(dims: &GridDimensions, theme: &Theme, out: &mut Vec<DrawCommand>) {
    let spacing = theme.chip_spacing();

    for row in 0..dims.rows() {
        for col in 0..dims.columns() {
            let x_start = col as f32 * spacing - theme.notch_width;
            let x_end = col as f32 * spacing;
            let chip_bottom = row as f32 * spacing;
            let chip_top = chip_bottom + theme.chip_height;
            let y_bottom = chip_bottom + theme.notch_width;
            let y_top = chip_top - theme.notch_width;

            // Bracket: two slanted lips meeting the chip corners, closed by
            // a vertical bar.
            out.push(DrawCommand::Line {
                from: Point::new(x_start, y_bottom),
                to: Point::new(x_end, chip_bottom),
                color: theme.outline.clone(),
                weight: theme.outline_weight,
            });
            out.push(DrawCommand::Line {
                from: Point::new(x_start, y_top),
                to: Point::new(x_end, chip_top),
                color: theme.outline.clone(),
                weight: theme.outline_weight,
            });
            out.push(DrawCommand::Line {
                from: Point::new(x_start, y_bottom),
                to: Point::new(x_start, y_top),
                color: theme.outline.clone(),
                weight: theme.outline_weight,
            });

            // The MAR cell sits flush against the bracket bar, extending
            // left by mar_width.
            out.push(DrawCommand::Rect {
                origin: Point::new(x_start - theme.mar_width, y_bottom),
                width: theme.mar_width,
                height: y_top - y_bottom,
                stroke: theme.outline.clone(),
                fill: theme.mar_fill.clone(),
                weight: theme.outline_weight,
            });
        }
    }
}

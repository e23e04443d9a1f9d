//! The data bus: a bidirectional trunk right of the grid, one horizontal
//! bus line below each row, and paired read/write arrows under every chip.

use crate::{
    draw::DrawCommand,
    geometry::Point,
    memory::GridDimensions,
    theme::Theme,
};

/// Arrowhead length for every data-path arrow.
const HEAD_SIZE: f32 = 0.1;

pub fn generate(dims: &GridDimensions, theme: &Theme, out: &mut Vec<DrawCommand>) {
    let spacing = theme.chip_spacing();
    let trunk_x = dims.columns() as f32 * spacing;
    let trunk_top = dims.rows() as f32 * spacing - 1.0;

    // The trunk carries traffic both ways; one arrow per direction.
    out.push(DrawCommand::Arrow {
        from: Point::new(trunk_x, -1.0),
        to: Point::new(trunk_x, trunk_top),
        head_size: HEAD_SIZE,
        color: theme.outline.clone(),
        weight: theme.line_weight,
    });
    out.push(DrawCommand::Arrow {
        from: Point::new(trunk_x, trunk_top),
        to: Point::new(trunk_x, -1.0),
        head_size: HEAD_SIZE,
        color: theme.outline.clone(),
        weight: theme.line_weight,
    });

    for row in 0..dims.rows() {
        let bus_y = row as f32 * spacing - spacing / 10.0;

        out.push(DrawCommand::Line {
            from: Point::new(0.0, bus_y),
            to: Point::new(trunk_x, bus_y),
            color: theme.outline.clone(),
            weight: theme.line_weight,
        });

        for col in 0..dims.columns() {
            let tap_x = col as f32 * spacing + theme.data_tap_offset;
            let chip_bottom = row as f32 * spacing;

            // Write path: bus up into the chip. Read path: chip down to
            // the bus.
            out.push(DrawCommand::Arrow {
                from: Point::new(tap_x, bus_y),
                to: Point::new(tap_x, bus_y + spacing / 15.0),
                head_size: HEAD_SIZE,
                color: theme.outline.clone(),
                weight: theme.line_weight,
            });
            out.push(DrawCommand::Arrow {
                from: Point::new(tap_x, chip_bottom),
                to: Point::new(tap_x, chip_bottom - spacing / 15.0),
                head_size: HEAD_SIZE,
                color: theme.outline.clone(),
                weight: theme.line_weight,
            });
        }
    }
}

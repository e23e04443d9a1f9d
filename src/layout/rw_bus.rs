//! The read/write control bus: a vertical trunk left of the grid and one
//! elbow tap into the top of every chip.

use crate::{
    draw::{DrawCommand, LabelStyle},
    geometry::Point,
    memory::GridDimensions,
    theme::Theme,
};

pub fn generate(dims: &GridDimensions, theme: &Theme, out: &mut Vec<DrawCommand>) {
    let spacing = theme.chip_spacing();
    let rw_y = theme.rw_y();

    // Single-row grids need no trunk; it collapses to the lone tap point.
    let trunk_top = if dims.rows() == 1 {
        rw_y
    } else {
        dims.rows() as f32 * spacing
    };

    out.push(DrawCommand::Line {
        from: Point::new(theme.rw_x, rw_y),
        to: Point::new(theme.rw_x, trunk_top),
        color: theme.control.clone(),
        weight: theme.line_weight,
    });
    out.push(DrawCommand::Label {
        position: Point::new(theme.rw_x, trunk_top),
        text: "R/W".to_string(),
        offset: Point::new(6.0, -15.0),
        style: LabelStyle {
            size: 10.0,
            bold: true,
        },
    });

    for col in 0..dims.columns() {
        for row in 0..dims.rows() {
            let tap_y = row as f32 * spacing + rw_y;
            let elbow_x = col as f32 * spacing + theme.rw_connect_offset;

            out.push(DrawCommand::Line {
                from: Point::new(theme.rw_x, tap_y),
                to: Point::new(elbow_x, tap_y),
                color: theme.control.clone(),
                weight: theme.line_weight,
            });
            out.push(DrawCommand::Line {
                from: Point::new(elbow_x, tap_y),
                to: Point::new(elbow_x, row as f32 * spacing + theme.chip_height),
                color: theme.control.clone(),
                weight: theme.line_weight,
            });
        }
    }
}

//! Address lines from the decoder to every MAR cell: a short stub out of
//! the decoder, a vertical trunk halfway to the grid, one branch per row,
//! and (for multi-column grids) a fan-out rail below each row.

use crate::{
    draw::DrawCommand,
    geometry::Point,
    memory::GridDimensions,
    theme::Theme,
};

/// How far below the chip's vertical midline the fan-out rail runs.
const FAN_DROP: f32 = 0.5;

pub fn generate(dims: &GridDimensions, theme: &Theme, out: &mut Vec<DrawCommand>) {
    let spacing = theme.chip_spacing();
    let mid_h = theme.chip_height / 2.0;

    // Left face of the first column's MAR cell.
    let mar_left = -theme.notch_width - theme.mar_width;
    let trunk_x = theme.decoder_x / 2.0;

    out.push(DrawCommand::Line {
        from: Point::new(theme.decoder_x - 0.3, mid_h),
        to: Point::new(mar_left, mid_h),
        color: theme.outline.clone(),
        weight: theme.select_weight,
    });

    // Single-row grids need no trunk; it collapses to the stub height.
    let trunk_top = if dims.rows() == 1 {
        mid_h
    } else {
        (dims.rows() - 1) as f32 * spacing + mid_h
    };
    out.push(DrawCommand::Line {
        from: Point::new(trunk_x, mid_h),
        to: Point::new(trunk_x, trunk_top),
        color: theme.outline.clone(),
        weight: theme.select_weight,
    });

    // Midpoint between the trunk and the MAR face, where the fan-out rail
    // and its risers live.
    let fan_x = (trunk_x + mar_left) / 2.0;

    for row in 0..dims.rows() {
        let branch_y = row as f32 * spacing + mid_h;

        out.push(DrawCommand::Line {
            from: Point::new(trunk_x, branch_y),
            to: Point::new(mar_left, branch_y),
            color: theme.outline.clone(),
            weight: theme.line_weight,
        });

        // A single column is fed by the branch directly.
        if dims.columns() > 1 {
            let rail_y = branch_y - (mid_h + FAN_DROP);

            out.push(DrawCommand::Line {
                from: Point::new(fan_x, rail_y),
                to: Point::new((dims.columns() - 1) as f32 * spacing + fan_x, rail_y),
                color: theme.outline.clone(),
                weight: theme.line_weight,
            });
            for col in 0..dims.columns() {
                let riser_x = col as f32 * spacing + fan_x;

                out.push(DrawCommand::Line {
                    from: Point::new(riser_x, branch_y),
                    to: Point::new(riser_x, rail_y),
                    color: theme.outline.clone(),
                    weight: theme.line_weight,
                });
                out.push(DrawCommand::Line {
                    from: Point::new(riser_x, branch_y),
                    to: Point::new(col as f32 * spacing + mar_left, branch_y),
                    color: theme.outline.clone(),
                    weight: theme.line_weight,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn generate_for(rows: u32, columns: u32) -> Vec<DrawCommand> {
        let mut out = Vec::new();
        generate(
            &GridDimensions::for_tests(rows, columns),
            &Theme::default(),
            &mut out,
        );
        out
    }

    #[test]
    fn test_stub_spans_decoder_to_mar_face() {
        let out = generate_for(1, 1);
        match &out[0] {
            DrawCommand::Line { from, to, .. } => {
                assert_approx_eq!(f32, from.x, -5.3);
                assert_approx_eq!(f32, to.x, -0.35);
                assert_approx_eq!(f32, from.y, 0.75);
            }
            other => panic!("expected stub line, got {other:?}"),
        }
    }

    #[test]
    fn test_trunk_reaches_last_row_midline() {
        let out = generate_for(4, 1);
        match &out[1] {
            DrawCommand::Line { from, to, .. } => {
                assert_approx_eq!(f32, from.x, -2.5);
                assert_approx_eq!(f32, from.y, 0.75);
                assert_approx_eq!(f32, to.y, 3.0 * 3.0 + 0.75);
            }
            other => panic!("expected trunk line, got {other:?}"),
        }
    }

    #[test]
    fn test_single_row_trunk_degenerates() {
        let out = generate_for(1, 2);
        match &out[1] {
            DrawCommand::Line { from, to, .. } => assert_eq!(from, to),
            other => panic!("expected trunk line, got {other:?}"),
        }
    }

    #[test]
    fn test_single_column_has_no_fan_out() {
        // stub + trunk + one branch per row, nothing else
        let out = generate_for(3, 1);
        assert_eq!(out.len(), 2 + 3);
    }

    #[test]
    fn test_multi_column_command_count() {
        // stub + trunk + rows * (branch + rail + 2 per column)
        let out = generate_for(2, 3);
        assert_eq!(out.len(), 2 + 2 * (1 + 1 + 2 * 3));
    }

    #[test]
    fn test_fan_rail_sits_below_the_row() {
        let out = generate_for(1, 2);

        // Branch at y = 0.75, rail a fixed drop below the chip bottom
        let rail = out.iter().find(|cmd| {
            matches!(cmd, DrawCommand::Line { from, to, .. }
                if from.y == to.y && from.y < 0.0)
        });
        match rail {
            Some(DrawCommand::Line { from, to, .. }) => {
                assert_approx_eq!(f32, from.y, -0.5);
                assert_approx_eq!(f32, to.x - from.x, 3.0);
            }
            other => panic!("expected fan rail, got {other:?}"),
        }
    }
}

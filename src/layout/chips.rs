//! The chip grid: one rectangle and one "CS" (chip select) label per chip.

use crate::{
    draw::{DrawCommand, LabelStyle},
    geometry::Point,
    memory::GridDimensions,
    theme::Theme,
};

/// Nudges the "CS" label toward the chip's top-right corner, in surface
/// points.
const CS_LABEL_OFFSET: Point = Point::new(9.0, -5.0);

pub fn generate(dims: &GridDimensions, theme: &Theme, out: &mut Vec<DrawCommand>) {
    let spacing = theme.chip_spacing();

    // Column-major traversal; the command order is part of the engine's
    // observable output.
    for col in 0..dims.columns() {
        for row in 0..dims.rows() {
            let origin = Point::new(col as f32 * spacing, row as f32 * spacing);

            out.push(DrawCommand::Rect {
                origin,
                width: theme.chip_width,
                height: theme.chip_height,
                stroke: theme.outline.clone(),
                fill: theme.chip_fill.clone(),
                weight: theme.outline_weight,
            });
            out.push(DrawCommand::Label {
                position: Point::new(origin.x + theme.chip_width, origin.y + theme.chip_height),
                text: "CS".to_string(),
                offset: CS_LABEL_OFFSET,
                style: LabelStyle::default(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
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
    fn test_one_rect_and_label_per_chip() {
        let commands = generate_for(4, 2);

        let rects = commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Rect { .. }))
            .count();
        let labels = commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Label { text, .. } if text == "CS"))
            .count();

        assert_eq!(rects, 8);
        assert_eq!(labels, 8);
    }

    #[test]
    fn test_column_major_order() {
        let commands = generate_for(2, 2);

        let origins: Vec<Point> = commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Rect { origin, .. } => Some(*origin),
                _ => None,
            })
            .collect();

        // All of column 0 before any of column 1
        assert_eq!(
            origins,
            vec![
                Point::new(0.0, 0.0),
                Point::new(0.0, 3.0),
                Point::new(3.0, 0.0),
                Point::new(3.0, 3.0),
            ]
        );
    }

    #[test]
    fn test_chip_shape_follows_theme() {
        let theme = Theme {
            chip_width: 2.0,
            chip_height: 4.0,
            ..Theme::default()
        };
        let mut out = Vec::new();
        generate(&GridDimensions::for_tests(1, 2), &theme, &mut out);

        match &out[0] {
            DrawCommand::Rect { width, height, .. } => {
                assert_eq!(*width, 2.0);
                assert_eq!(*height, 4.0);
            }
            other => panic!("expected rect, got {other:?}"),
        }
        // Second column starts a full spacing (2*2+1) to the right
        match &out[2] {
            DrawCommand::Rect { origin, .. } => assert_eq!(origin.x, 5.0),
            other => panic!("expected rect, got {other:?}"),
        }
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn emits_exactly_one_rect_and_label_per_chip(rows in 1u32..24, columns in 1u32..12) {
            let mut out = Vec::new();
            generate(
                &GridDimensions::for_tests(rows, columns),
                &Theme::default(),
                &mut out,
            );

            let chips = (rows * columns) as usize;
            prop_assert_eq!(out.len(), chips * 2);

            let rects = out.iter().filter(|c| matches!(c, DrawCommand::Rect { .. })).count();
            prop_assert_eq!(rects, chips);
        }
    }
}

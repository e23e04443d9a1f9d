//! SVG rendering of schematic command sequences.
//!
//! The schematic coordinate space has y growing upward and abstract drawing
//! units; SVG has y growing downward and pixels. A [`Viewport`] computed
//! from the command bounds handles both the flip and the scaling, plus a
//! fixed margin around the content.

use crate::{
    color::Color,
    draw::DrawCommand,
    export,
    geometry::{Bounds, Point, Size},
};
use log::{debug, error, info};
use std::{fs::File, io::Write};
use svg::{
    Document,
    node::element::{Circle, Definitions, Marker, Path, Rectangle, Text},
};

/// Pixels per drawing unit.
const UNIT_SCALE: f32 = 40.0;

/// Margin around the content, in pixels.
const MARGIN: f32 = 50.0;

/// SVG exporter writing to a single output file.
pub struct Svg {
    pub file_name: String,
}

/// Maps schematic coordinates onto the SVG pixel grid.
struct Viewport {
    bounds: Bounds,
}

impl Viewport {
    /// Returns `None` for an empty command sequence, which has no bounds.
    fn new(commands: &[DrawCommand]) -> Option<Self> {
        let mut bounds = commands.iter().map(DrawCommand::bounds);
        let first = bounds.next()?;
        Some(Self {
            bounds: bounds.fold(first, |acc, b| acc.merge(&b)),
        })
    }

    /// Converts a schematic point to pixel coordinates, flipping the y axis.
    fn map(&self, p: Point) -> (f32, f32) {
        (
            (p.x - self.bounds.min_x) * UNIT_SCALE + MARGIN,
            (self.bounds.max_y - p.y) * UNIT_SCALE + MARGIN,
        )
    }

    /// Final document dimensions including margins.
    fn document_size(&self) -> Size {
        let width = MARGIN.mul_add(2.0, self.bounds.width() * UNIT_SCALE);
        let height = MARGIN.mul_add(2.0, self.bounds.height() * UNIT_SCALE);

        debug!("Final SVG dimensions: {width}x{height}");

        Size { width, height }
    }
}

/// Creates one arrowhead marker definition per distinct arrow color.
fn create_marker_definitions(commands: &[DrawCommand]) -> Definitions {
    let mut defs = Definitions::new();
    let mut seen: Vec<String> = Vec::new();

    for command in commands {
        let DrawCommand::Arrow {
            head_size, color, ..
        } = command
        else {
            continue;
        };

        let id = format!("arrow-{}", color.to_id_safe_string());
        if seen.contains(&id) {
            continue;
        }

        let marker_size = head_size * UNIT_SCALE;
        let marker = Marker::new()
            .set("id", id.clone())
            .set("viewBox", "0 0 10 10")
            .set("refX", 9)
            .set("refY", 5)
            .set("markerWidth", marker_size)
            .set("markerHeight", marker_size)
            .set("orient", "auto")
            .add(
                Path::new()
                    .set("d", "M 0 0 L 10 5 L 0 10 z")
                    .set("fill", color.to_string()),
            );

        defs = defs.add(marker);
        seen.push(id);
    }

    defs
}

fn marker_reference(color: &Color) -> String {
    format!("url(#arrow-{})", color.to_id_safe_string())
}

/// Create a path data string from two pixel coordinates
fn create_path_data(start: (f32, f32), end: (f32, f32)) -> String {
    format!("M {} {} L {} {}", start.0, start.1, end.0, end.1)
}

impl Svg {
    pub fn new(file_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
        }
    }

    fn render_command(&self, viewport: &Viewport, command: &DrawCommand) -> Box<dyn svg::Node> {
        match command {
            DrawCommand::Rect {
                origin,
                width,
                height,
                stroke,
                fill,
                weight,
            } => {
                // SVG rects anchor at the top-left corner
                let (x, y) = viewport.map(Point::new(origin.x, origin.y + height));
                Box::new(
                    Rectangle::new()
                        .set("x", x)
                        .set("y", y)
                        .set("width", width * UNIT_SCALE)
                        .set("height", height * UNIT_SCALE)
                        .set("stroke", stroke)
                        .set("fill", fill)
                        .set("stroke-width", *weight),
                )
            }
            DrawCommand::Line {
                from,
                to,
                color,
                weight,
            } => Box::new(
                Path::new()
                    .set("d", create_path_data(viewport.map(*from), viewport.map(*to)))
                    .set("stroke", color)
                    .set("stroke-width", *weight)
                    .set("fill", "none"),
            ),
            DrawCommand::Arrow {
                from,
                to,
                color,
                weight,
                ..
            } => Box::new(
                Path::new()
                    .set("d", create_path_data(viewport.map(*from), viewport.map(*to)))
                    .set("stroke", color)
                    .set("stroke-width", *weight)
                    .set("fill", "none")
                    .set("marker-end", marker_reference(color)),
            ),
            DrawCommand::Label {
                position,
                text,
                offset,
                style,
            } => {
                let (x, y) = viewport.map(*position);
                let mut node = Text::new(text.as_str())
                    .set("x", x)
                    .set("y", y)
                    // Offsets are in surface points with y up; SVG dy is y
                    // down.
                    .set("dx", offset.x)
                    .set("dy", -offset.y)
                    .set("font-family", "Arial")
                    .set("font-size", style.size);
                if style.bold {
                    node = node.set("font-weight", "bold");
                }
                Box::new(node)
            }
            DrawCommand::Tap { center, size, color } => {
                let (cx, cy) = viewport.map(*center);
                Box::new(
                    Circle::new()
                        .set("cx", cx)
                        .set("cy", cy)
                        .set("r", size / 2.0)
                        .set("fill", color),
                )
            }
        }
    }

    pub fn render_schematic(&self, commands: &[DrawCommand]) -> Result<Document, export::Error> {
        let viewport = Viewport::new(commands).ok_or_else(|| {
            export::Error::Render("Schematic contains no drawing commands".to_string())
        })?;
        let size = viewport.document_size();

        let mut doc = Document::new()
            .set("viewBox", format!("0 0 {} {}", size.width, size.height))
            .set("width", size.width)
            .set("height", size.height)
            .add(create_marker_definitions(commands));

        // Command order is z-order; append in sequence
        for command in commands {
            doc = doc.add(self.render_command(&viewport, command));
        }

        Ok(doc)
    }

    /// Writes an SVG document to the configured file
    pub fn write_document(&self, doc: Document) -> Result<(), export::Error> {
        info!(file_name = self.file_name; "Creating SVG file");
        let f = match File::create(&self.file_name) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name = self.file_name, err:err; "Failed to create SVG file");
                return Err(export::Error::Io(err));
            }
        };

        if let Err(err) = write!(&f, "{doc}") {
            error!(file_name = self.file_name, err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }

        Ok(())
    }
}

impl export::Exporter for Svg {
    fn export_schematic(&self, commands: &[DrawCommand]) -> Result<(), export::Error> {
        let doc = self.render_schematic(commands)?;
        debug!("SVG document rendered");

        self.write_document(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::LabelStyle;
    use float_cmp::assert_approx_eq;

    fn sample_commands() -> Vec<DrawCommand> {
        vec![
            DrawCommand::Rect {
                origin: Point::new(0.0, 0.0),
                width: 1.0,
                height: 1.5,
                stroke: Color::default(),
                fill: Color::new("#47c295").unwrap(),
                weight: 2.0,
            },
            DrawCommand::Arrow {
                from: Point::new(2.0, -1.0),
                to: Point::new(2.0, 2.0),
                head_size: 0.1,
                color: Color::default(),
                weight: 1.5,
            },
            DrawCommand::Label {
                position: Point::new(1.0, 1.5),
                text: "CS".to_string(),
                offset: Point::new(9.0, -5.0),
                style: LabelStyle::default(),
            },
        ]
    }

    #[test]
    fn test_viewport_flips_y() {
        let commands = sample_commands();
        let viewport = Viewport::new(&commands).unwrap();

        // Content spans y in [-1, 2]; the topmost point lands at the margin
        let (_, top) = viewport.map(Point::new(0.0, 2.0));
        assert_approx_eq!(f32, top, MARGIN);

        let (_, bottom) = viewport.map(Point::new(0.0, -1.0));
        assert_approx_eq!(f32, bottom, 3.0 * UNIT_SCALE + MARGIN);
    }

    #[test]
    fn test_viewport_of_empty_sequence_is_none() {
        assert!(Viewport::new(&[]).is_none());
    }

    #[test]
    fn test_render_produces_document_with_all_elements() {
        let svg = Svg::new("unused.svg");
        let doc = svg.render_schematic(&sample_commands()).unwrap();
        let rendered = doc.to_string();

        assert!(rendered.contains("<svg"));
        assert!(rendered.contains("<rect"));
        assert!(rendered.contains("<path"));
        assert!(rendered.contains("marker-end"));
        assert!(rendered.contains("CS"));
    }

    #[test]
    fn test_render_empty_sequence_fails() {
        let svg = Svg::new("unused.svg");
        assert!(matches!(
            svg.render_schematic(&[]),
            Err(export::Error::Render(_))
        ));
    }

    #[test]
    fn test_one_marker_per_arrow_color() {
        let mut commands = sample_commands();
        commands.push(DrawCommand::Arrow {
            from: Point::new(0.0, 0.0),
            to: Point::new(1.0, 0.0),
            head_size: 0.1,
            color: Color::default(),
            weight: 1.5,
        });

        let rendered = create_marker_definitions(&commands).to_string();
        assert_eq!(rendered.matches("<marker").count(), 1);
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.svg");
        let svg = Svg::new(path.to_str().unwrap());

        export::Exporter::export_schematic(&svg, &sample_commands()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("<svg"));
    }
}

//! Vector paths used for thumb outlines and focus borders.

use crate::types::{CornerRadii, Point, Rect, RoundedRect};

/// Commands that make up a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Move to a point without drawing.
    MoveTo(Point),
    /// Draw a line to a point.
    LineTo(Point),
    /// Draw a quadratic bezier curve.
    QuadTo { control: Point, end: Point },
    /// Draw a cubic bezier curve.
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// Close the current subpath.
    Close,
}

impl PathCommand {
    /// Every point referenced by this command, control points included.
    fn points(&self) -> impl Iterator<Item = Point> {
        let (buf, len): ([Point; 3], usize) = match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => ([p, p, p], 1),
            PathCommand::QuadTo { control, end } => ([control, end, end], 2),
            PathCommand::CubicTo {
                control1,
                control2,
                end,
            } => ([control1, control2, end], 3),
            PathCommand::Close => ([Point::ZERO; 3], 0),
        };
        buf.into_iter().take(len)
    }

    fn translated(self, dx: f32, dy: f32) -> Self {
        match self {
            PathCommand::MoveTo(p) => PathCommand::MoveTo(p.offset(dx, dy)),
            PathCommand::LineTo(p) => PathCommand::LineTo(p.offset(dx, dy)),
            PathCommand::QuadTo { control, end } => PathCommand::QuadTo {
                control: control.offset(dx, dy),
                end: end.offset(dx, dy),
            },
            PathCommand::CubicTo {
                control1,
                control2,
                end,
            } => PathCommand::CubicTo {
                control1: control1.offset(dx, dy),
                control2: control2.offset(dx, dy),
                end: end.offset(dx, dy),
            },
            PathCommand::Close => PathCommand::Close,
        }
    }
}

/// A 2D path for complex shapes.
///
/// Paths are built with the chaining methods and consumed by
/// [`Renderer::fill_path`](crate::Renderer::fill_path) and
/// [`Renderer::stroke_path`](crate::Renderer::stroke_path).
///
/// # Example
///
/// ```
/// use colorslider_render::{Path, Point};
///
/// let mut triangle = Path::new();
/// triangle
///     .move_to(Point::new(0.0, 0.0))
///     .line_to(Point::new(10.0, 0.0))
///     .line_to(Point::new(5.0, 12.0))
///     .close();
///
/// let bounds = triangle.bounds().unwrap();
/// assert_eq!(bounds.width(), 10.0);
/// assert_eq!(bounds.height(), 12.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create a new empty path.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Move to a point without drawing.
    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    /// Draw a line to a point.
    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::LineTo(p));
        self
    }

    /// Draw a quadratic bezier curve.
    pub fn quad_to(&mut self, control: Point, end: Point) -> &mut Self {
        self.commands.push(PathCommand::QuadTo { control, end });
        self
    }

    /// Draw a cubic bezier curve.
    pub fn cubic_to(&mut self, control1: Point, control2: Point, end: Point) -> &mut Self {
        self.commands.push(PathCommand::CubicTo {
            control1,
            control2,
            end,
        });
        self
    }

    /// Close the current subpath.
    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Get the path commands.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Check that every coordinate in the path is finite.
    pub fn is_finite(&self) -> bool {
        self.commands
            .iter()
            .flat_map(PathCommand::points)
            .all(|p| p.is_finite())
    }

    /// Bounding box over every point in the path, control points included.
    ///
    /// Returns `None` for a path without points.
    pub fn bounds(&self) -> Option<Rect> {
        let mut points = self.commands.iter().flat_map(PathCommand::points);
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        Some(Rect::from_corners(min, max))
    }

    /// Return a copy of the path moved by `(dx, dy)`.
    pub fn translated(&self, dx: f32, dy: f32) -> Path {
        Path {
            commands: self
                .commands
                .iter()
                .map(|cmd| cmd.translated(dx, dy))
                .collect(),
        }
    }

    /// Return a copy of the path moved so its bounding box starts at `origin`.
    ///
    /// Paths without points are returned unchanged.
    pub fn aligned_to(&self, origin: Point) -> Path {
        match self.bounds() {
            Some(bounds) => self.translated(origin.x - bounds.left(), origin.y - bounds.top()),
            None => self.clone(),
        }
    }

    /// Create a rounded rectangle path.
    ///
    /// Corners are approximated with quadratic curves. Radii larger than half
    /// the rectangle are clamped so opposite corners never overlap.
    pub fn rounded_rect(rect: Rect, radii: CornerRadii) -> Self {
        let mut path = Self::new();

        let rx = radii.x.clamp(0.0, rect.width() / 2.0);
        let ry = radii.y.clamp(0.0, rect.height() / 2.0);
        let rounded = rx > 0.0 && ry > 0.0;

        // Start at top-left corner, after the rounded part
        path.move_to(Point::new(rect.left() + rx, rect.top()));

        // Top edge
        path.line_to(Point::new(rect.right() - rx, rect.top()));

        // Top-right corner
        if rounded {
            path.quad_to(
                Point::new(rect.right(), rect.top()),
                Point::new(rect.right(), rect.top() + ry),
            );
        }

        // Right edge
        path.line_to(Point::new(rect.right(), rect.bottom() - ry));

        // Bottom-right corner
        if rounded {
            path.quad_to(
                Point::new(rect.right(), rect.bottom()),
                Point::new(rect.right() - rx, rect.bottom()),
            );
        }

        // Bottom edge
        path.line_to(Point::new(rect.left() + rx, rect.bottom()));

        // Bottom-left corner
        if rounded {
            path.quad_to(
                Point::new(rect.left(), rect.bottom()),
                Point::new(rect.left(), rect.bottom() - ry),
            );
        }

        // Left edge
        path.line_to(Point::new(rect.left(), rect.top() + ry));

        // Top-left corner
        if rounded {
            path.quad_to(
                Point::new(rect.left(), rect.top()),
                Point::new(rect.left() + rx, rect.top()),
            );
        }

        path.close();
        path
    }
}

impl From<RoundedRect> for Path {
    fn from(rr: RoundedRect) -> Self {
        Path::rounded_rect(rr.rect, rr.radii)
    }
}

//! A recording renderer.
//!
//! [`DisplayList`] implements [`Renderer`] by appending each primitive to an
//! ordered list of [`DrawCommand`]s. Hosts replay the list onto their own
//! surface; tests inspect it directly.
//!
//! Text metrics are deterministic: each character advances by
//! [`CHAR_ADVANCE`] times the font size and a line is [`LINE_HEIGHT`] times
//! the font size tall.

use crate::error::{RenderError, RenderResult};
use crate::image::ThumbImage;
use crate::paint::{FillRule, Paint, Stroke};
use crate::path::Path;
use crate::renderer::Renderer;
use crate::types::{Color, Point, Rect, Size};

/// Horizontal advance per character, as a multiple of the font size.
pub const CHAR_ADVANCE: f32 = 0.6;

/// Line height, as a multiple of the font size.
pub const LINE_HEIGHT: f32 = 1.5;

/// One recorded drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A filled rectangle.
    FillRect { rect: Rect, paint: Paint },
    /// A straight line.
    Line { from: Point, to: Point, stroke: Stroke },
    /// A filled path.
    FillPath {
        path: Path,
        paint: Paint,
        fill_rule: FillRule,
    },
    /// A stroked path outline.
    StrokePath { path: Path, stroke: Stroke },
    /// An image drawn into a destination rectangle.
    Image { image: ThumbImage, dest: Rect },
    /// A line of text.
    Text {
        text: String,
        origin: Point,
        font_size: f32,
        color: Color,
    },
}

impl DrawCommand {
    /// Short name of the primitive kind, useful in assertions and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCommand::FillRect { .. } => "fill_rect",
            DrawCommand::Line { .. } => "line",
            DrawCommand::FillPath { .. } => "fill_path",
            DrawCommand::StrokePath { .. } => "stroke_path",
            DrawCommand::Image { .. } => "image",
            DrawCommand::Text { .. } => "text",
        }
    }
}

/// A renderer that records primitives instead of rasterizing them.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
    command_limit: Option<usize>,
}

impl DisplayList {
    /// Create an empty, unbounded display list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse any primitive beyond the first `limit` with
    /// [`RenderError::CommandLimitExceeded`].
    pub fn with_command_limit(mut self, limit: usize) -> Self {
        self.command_limit = Some(limit);
        self
    }

    /// The recorded primitives, in emission order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Consume the list and return the recorded primitives.
    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    /// Number of recorded primitives.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop every recorded primitive, keeping the command limit.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    fn push(&mut self, command: DrawCommand) -> RenderResult<()> {
        if let Some(limit) = self.command_limit
            && self.commands.len() >= limit
        {
            tracing::debug!(
                target: "colorslider_render",
                limit,
                kind = command.kind(),
                "display list full, rejecting primitive"
            );
            return Err(RenderError::CommandLimitExceeded { limit });
        }
        self.commands.push(command);
        Ok(())
    }
}

fn check_points(points: &[Point]) -> RenderResult<()> {
    if points.iter().all(Point::is_finite) {
        Ok(())
    } else {
        Err(RenderError::NonFiniteCoordinate)
    }
}

fn check_rect(rect: &Rect) -> RenderResult<()> {
    check_points(&[
        rect.origin,
        Point::new(rect.size.width, rect.size.height),
    ])
}

fn check_path(path: &Path) -> RenderResult<()> {
    if path.is_empty() {
        return Err(RenderError::EmptyPath);
    }
    if !path.is_finite() {
        return Err(RenderError::NonFiniteCoordinate);
    }
    Ok(())
}

impl Renderer for DisplayList {
    fn fill_rect(&mut self, rect: Rect, paint: &Paint) -> RenderResult<()> {
        check_rect(&rect)?;
        self.push(DrawCommand::FillRect {
            rect,
            paint: paint.clone(),
        })
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) -> RenderResult<()> {
        check_points(&[from, to])?;
        self.push(DrawCommand::Line {
            from,
            to,
            stroke: stroke.clone(),
        })
    }

    fn fill_path(&mut self, path: &Path, paint: &Paint, fill_rule: FillRule) -> RenderResult<()> {
        check_path(path)?;
        self.push(DrawCommand::FillPath {
            path: path.clone(),
            paint: paint.clone(),
            fill_rule,
        })
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke) -> RenderResult<()> {
        check_path(path)?;
        self.push(DrawCommand::StrokePath {
            path: path.clone(),
            stroke: stroke.clone(),
        })
    }

    fn draw_image(&mut self, image: &ThumbImage, dest: Rect) -> RenderResult<()> {
        check_rect(&dest)?;
        self.push(DrawCommand::Image {
            image: image.clone(),
            dest,
        })
    }

    fn draw_text(
        &mut self,
        text: &str,
        origin: Point,
        font_size: f32,
        color: Color,
    ) -> RenderResult<()> {
        check_points(&[origin, Point::new(font_size, 0.0)])?;
        self.push(DrawCommand::Text {
            text: text.to_string(),
            origin,
            font_size,
            color,
        })
    }

    fn measure_text(&self, text: &str, font_size: f32) -> Size {
        Size::new(
            text.chars().count() as f32 * font_size * CHAR_ADVANCE,
            font_size * LINE_HEIGHT,
        )
    }
}

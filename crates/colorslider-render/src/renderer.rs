//! Renderer trait defining the drawing surface a widget paints onto.
//!
//! The [`Renderer`] trait is the capability handed to a widget for the
//! duration of one paint call. Widgets never retain it. The trait is object
//! safe so hosts can pass any backend as `&mut dyn Renderer`.
//!
//! Every drawing method returns a [`RenderResult`]; a backend reports a
//! failed primitive through the error and the caller decides whether the rest
//! of the frame is worth emitting.
//!
//! # Example
//!
//! ```
//! use colorslider_render::{Color, DisplayList, Point, Renderer, Stroke};
//!
//! let mut list = DisplayList::new();
//! list.draw_line(Point::new(0.0, 5.0), Point::new(100.0, 5.0), &Stroke::pen(Color::BLACK))
//!     .unwrap();
//! assert_eq!(list.len(), 1);
//! ```

use crate::error::RenderResult;
use crate::image::ThumbImage;
use crate::paint::{FillRule, Paint, Stroke};
use crate::path::Path;
use crate::types::{Color, Point, Rect, Size};

/// A 2D drawing surface.
pub trait Renderer {
    // =========================================================================
    // Drawing - Rectangles
    // =========================================================================

    /// Fill a rectangle with the specified paint.
    fn fill_rect(&mut self, rect: Rect, paint: &Paint) -> RenderResult<()>;

    // =========================================================================
    // Drawing - Lines
    // =========================================================================

    /// Draw a line between two points.
    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) -> RenderResult<()>;

    // =========================================================================
    // Drawing - Paths
    // =========================================================================

    /// Fill a path with the specified paint.
    fn fill_path(&mut self, path: &Path, paint: &Paint, fill_rule: FillRule) -> RenderResult<()>;

    /// Stroke a path outline.
    fn stroke_path(&mut self, path: &Path, stroke: &Stroke) -> RenderResult<()>;

    // =========================================================================
    // Drawing - Images
    // =========================================================================

    /// Draw a whole image scaled into `dest`.
    fn draw_image(&mut self, image: &ThumbImage, dest: Rect) -> RenderResult<()>;

    // =========================================================================
    // Drawing - Text
    // =========================================================================

    /// Draw a single line of text with its top-left corner at `origin`.
    fn draw_text(
        &mut self,
        text: &str,
        origin: Point,
        font_size: f32,
        color: Color,
    ) -> RenderResult<()>;

    /// Measure the extent of a single line of text.
    fn measure_text(&self, text: &str, font_size: f32) -> Size;
}

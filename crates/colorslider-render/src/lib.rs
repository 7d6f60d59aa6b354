//! Drawing primitives for ColorSlider.
//!
//! This crate provides the types a widget needs to describe one frame, plus
//! the seam between the widget and whatever surface the host draws onto.
//!
//! # The Renderer seam
//!
//! Widgets paint through the object-safe [`Renderer`] trait. A host backend
//! implements it to rasterize directly; the bundled [`DisplayList`] implements
//! it by recording every primitive so the frame can be replayed or inspected:
//!
//! ```
//! use colorslider_render::{
//!     Color, CornerRadii, DisplayList, DrawCommand, FillRule, Paint, Path, Rect, Renderer,
//! };
//!
//! let mut list = DisplayList::new();
//! let thumb = Rect::new(40.0, 1.0, 15.0, 45.0);
//! let outline = Path::rounded_rect(thumb, CornerRadii::uniform(8.0));
//!
//! list.fill_path(
//!     &outline,
//!     &Paint::vertical_gradient(thumb, Color::WHITE, Color::BLUE),
//!     FillRule::NonZero,
//! )?;
//!
//! assert!(matches!(list.commands()[0], DrawCommand::FillPath { .. }));
//! # Ok::<(), colorslider_render::RenderError>(())
//! ```
//!
//! # Failures
//!
//! Every drawing method returns a [`RenderResult`]. A failed primitive is
//! reported through [`RenderError`] and never panics.

mod display_list;
mod error;
mod image;
mod paint;
mod path;
mod renderer;
mod types;

pub use display_list::{CHAR_ADVANCE, DisplayList, DrawCommand, LINE_HEIGHT};
pub use error::{RenderError, RenderResult};
pub use image::ThumbImage;
pub use paint::{DashPattern, FillRule, GradientStop, LinearGradient, Paint, Stroke};
pub use path::{Path, PathCommand};
pub use renderer::Renderer;
pub use types::{Color, CornerRadii, Point, Rect, RoundedRect, Size};

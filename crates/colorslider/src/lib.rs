//! A custom-drawn, color-themable range slider.
//!
//! [`ColorSlider`] lets a user pick an integer from a bounded range with the
//! mouse, the wheel or the keyboard. It owns its value, range and styling,
//! reports changes through [`Signal`]s and draws itself through the
//! [`Renderer`](render::Renderer) trait. A host embeds it by forwarding
//! input as [`WidgetEvent`](widget::WidgetEvent)s and calling
//! [`Widget::paint`](widget::Widget::paint) whenever
//! [`Widget::needs_repaint`](widget::Widget::needs_repaint) is set.
//!
//! # Example
//!
//! ```
//! use colorslider::render::{DisplayList, Point};
//! use colorslider::widget::{
//!     KeyboardModifiers, MouseButton, MousePressEvent, PaintContext, Widget, WidgetEvent,
//! };
//! use colorslider::{ColorSlider, ScrollEventKind};
//!
//! let mut slider = ColorSlider::new();
//! slider.scroll.connect(|event| {
//!     if event.kind == ScrollEventKind::Last {
//!         println!("pinned to {}", event.new_value);
//!     }
//! });
//!
//! // Press past the right edge: the value clamps to the maximum.
//! let mut press = WidgetEvent::MousePress(MousePressEvent::new(
//!     MouseButton::Left,
//!     Point::new(200.0, 24.0),
//!     KeyboardModifiers::NONE,
//! ));
//! assert!(slider.event(&mut press));
//! assert_eq!(slider.value(), 100);
//!
//! // Record the next frame.
//! let mut frame = DisplayList::new();
//! let rect = slider.rect();
//! slider.paint(&mut PaintContext::new(&mut frame, rect));
//! assert!(!frame.is_empty());
//! ```
//!
//! # Logging
//!
//! The crate logs through `tracing` under the targets in
//! [`colorslider_core::logging::targets`]. Rejected configuration is logged
//! at debug level, input handling at trace level and render failures at
//! warn level.

mod color_slider;
mod error;
pub mod widget;

pub use colorslider_core::{ConnectionGuard, ConnectionId, Signal};
pub use colorslider_render as render;

pub use color_slider::geometry::{self, Boundary, MappedValue, offset_to_value, value_to_offset};
pub use color_slider::palette::{self, desaturate, darken, lighten};
pub use color_slider::scale::{self, compute_ticks};
pub use color_slider::{
    ColorSchema, ColorSlider, InteractionState, Orientation, Palette, ScrollEvent,
    ScrollEventKind, SliderConfig, THUMB_IMAGE_COLOR_KEY, Tick, TickStyle, ValueRange,
    WHEEL_DELTA,
};
pub use error::{SliderError, SliderResult};

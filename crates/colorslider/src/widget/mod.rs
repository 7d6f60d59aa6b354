//! The widget layer a slider is built on.
//!
//! A host embeds widgets by forwarding input through [`Widget::event`],
//! polling [`Widget::needs_repaint`], and calling [`Widget::paint`] with a
//! [`PaintContext`] around its drawing surface.

mod base;
mod events;
mod traits;

pub use base::WidgetBase;
pub use events::{
    EnabledChangeEvent, EnterEvent, EventBase, FocusInEvent, FocusOutEvent, FocusReason,
    HideEvent, Key, KeyPressEvent, KeyReleaseEvent, KeyboardModifiers, LeaveEvent, MouseButton,
    MouseMoveEvent, MousePressEvent, MouseReleaseEvent, ResizeEvent, ShowEvent, WheelEvent,
    WidgetEvent,
};
pub use traits::{PaintContext, Widget};

//! The host seam: what a control needs from whatever window system embeds it.
//!
//! A host owns the event loop and the drawing surface. It forwards input to
//! [`Widget::event`], watches [`Widget::needs_repaint`], and hands a
//! [`PaintContext`] to [`Widget::paint`] when a frame is due.

use colorslider_render::{Rect, Renderer, Size};

use super::base::WidgetBase;
use super::events::WidgetEvent;

/// Drawing surface and bounds for a single paint call.
///
/// Coordinates are local: `(0, 0)` is the control's top-left corner.
pub struct PaintContext<'a> {
    renderer: &'a mut dyn Renderer,
    rect: Rect,
}

impl<'a> PaintContext<'a> {
    pub fn new(renderer: &'a mut dyn Renderer, rect: Rect) -> Self {
        Self { renderer, rect }
    }

    /// The surface to draw on.
    #[inline]
    pub fn renderer(&mut self) -> &mut dyn Renderer {
        &mut *self.renderer
    }

    /// The control's local bounds.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }
}

/// A control driven by a host.
///
/// Implementors supply their [`WidgetBase`], a paint routine and an event
/// handler. State queries delegate to the base.
pub trait Widget: Send + Sync {
    fn widget_base(&self) -> &WidgetBase;

    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// Emit one frame of primitives into `ctx`.
    ///
    /// Painting must not mutate control state; the host may call it any
    /// number of times between events.
    fn paint(&self, ctx: &mut PaintContext<'_>);

    /// Handle one input or lifecycle event.
    ///
    /// Returns `true` when the event was consumed. Consumed events are also
    /// accepted so they stay out of enclosing containers.
    fn event(&mut self, _event: &mut WidgetEvent) -> bool {
        false
    }

    fn size(&self) -> Size {
        self.widget_base().size()
    }

    /// Local bounds, origin at `(0, 0)`.
    fn rect(&self) -> Rect {
        self.widget_base().rect()
    }

    fn is_enabled(&self) -> bool {
        self.widget_base().is_enabled()
    }

    fn has_focus(&self) -> bool {
        self.widget_base().has_focus()
    }

    /// Whether state changed since the host last cleared the flag.
    fn needs_repaint(&self) -> bool {
        self.widget_base().needs_repaint()
    }
}

//! State every control shares with its host.

use std::fmt;

use colorslider_core::Signal;
use colorslider_render::{Point, Rect, Size};

/// Host-facing state embedded in each control.
///
/// Tracks the control's name (used in log output), its geometry in the
/// parent's coordinates, the visible/enabled/focused/hovered flags, and the
/// repaint request flag the host polls after dispatching events.
///
/// ```
/// use colorslider::widget::{PaintContext, Widget, WidgetBase};
///
/// struct Spacer {
///     base: WidgetBase,
/// }
///
/// impl Widget for Spacer {
///     fn widget_base(&self) -> &WidgetBase { &self.base }
///     fn widget_base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
///     fn paint(&self, _ctx: &mut PaintContext<'_>) {}
/// }
///
/// let mut spacer = Spacer { base: WidgetBase::new("spacer") };
/// spacer.base.clear_repaint_flag();
/// spacer.base.resize(10.0, 10.0);
/// assert!(spacer.needs_repaint());
/// ```
pub struct WidgetBase {
    name: String,
    geometry: Rect,
    visible: bool,
    enabled: bool,
    focusable: bool,
    focused: bool,
    hovered: bool,
    needs_repaint: bool,

    /// Emitted with the new geometry whenever it actually changes.
    pub geometry_changed: Signal<Rect>,
    /// Emitted with the new flag whenever the enabled state flips.
    pub enabled_changed: Signal<bool>,
}

impl fmt::Debug for WidgetBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetBase")
            .field("name", &self.name)
            .field("geometry", &self.geometry)
            .field("visible", &self.visible)
            .field("enabled", &self.enabled)
            .field("focused", &self.focused)
            .field("hovered", &self.hovered)
            .field("needs_repaint", &self.needs_repaint)
            .finish_non_exhaustive()
    }
}

/// Store `value` in `slot`, returning whether it differed.
fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

impl WidgetBase {
    /// A visible, enabled, unfocusable base with zero geometry. New bases
    /// start out needing a repaint.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            geometry: Rect::ZERO,
            visible: true,
            enabled: true,
            focusable: false,
            focused: false,
            hovered: false,
            needs_repaint: true,
            geometry_changed: Signal::new(),
            enabled_changed: Signal::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Position and size in the parent's coordinates.
    #[inline]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    pub fn set_geometry(&mut self, rect: Rect) {
        if replace_if_changed(&mut self.geometry, rect) {
            self.needs_repaint = true;
            self.geometry_changed.emit(rect);
        }
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.geometry.size
    }

    /// Change the size, keeping the position.
    pub fn set_size(&mut self, size: Size) {
        let origin = self.geometry.origin;
        self.set_geometry(Rect { origin, size });
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.set_size(Size::new(width, height));
    }

    /// Local bounds: `(0, 0)` with the current size.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect {
            origin: Point::ZERO,
            size: self.geometry.size,
        }
    }

    /// Whether a local point falls inside the bounds.
    #[inline]
    pub fn contains_point(&self, point: Point) -> bool {
        self.rect().contains(point)
    }

    // =========================================================================
    // State flags
    // =========================================================================

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        if replace_if_changed(&mut self.visible, visible) {
            self.needs_repaint = true;
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if replace_if_changed(&mut self.enabled, enabled) {
            self.needs_repaint = true;
            self.enabled_changed.emit(enabled);
        }
    }

    /// Focus is only offered to visible, enabled, focusable controls.
    #[inline]
    pub fn is_focusable(&self) -> bool {
        self.focusable && self.enabled && self.visible
    }

    pub fn set_focusable(&mut self, focusable: bool) {
        self.focusable = focusable;
    }

    #[inline]
    pub fn has_focus(&self) -> bool {
        self.focused
    }

    pub(crate) fn set_focused(&mut self, focused: bool) {
        if replace_if_changed(&mut self.focused, focused) {
            self.needs_repaint = true;
        }
    }

    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub(crate) fn set_hovered(&mut self, hovered: bool) {
        if replace_if_changed(&mut self.hovered, hovered) {
            self.needs_repaint = true;
        }
    }

    // =========================================================================
    // Repaint
    // =========================================================================

    #[inline]
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Ask the host for a new frame.
    pub fn update(&mut self) {
        self.needs_repaint = true;
    }

    /// Hosts call this once the requested frame has been painted.
    pub fn clear_repaint_flag(&mut self) {
        self.needs_repaint = false;
    }
}

static_assertions::assert_impl_all!(WidgetBase: Send, Sync);

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;

    #[test]
    fn test_set_geometry_emits_only_on_change() {
        let mut base = WidgetBase::new("hue");
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        base.geometry_changed.connect(move |rect| sink.lock().push(*rect));

        base.resize(200.0, 48.0);
        base.resize(200.0, 48.0);

        assert_eq!(*seen.lock(), vec![Rect::new(0.0, 0.0, 200.0, 48.0)]);
    }

    #[test]
    fn test_update_and_clear_repaint_flag() {
        let mut base = WidgetBase::new("hue");
        assert!(base.needs_repaint());
        base.clear_repaint_flag();
        assert!(!base.needs_repaint());
        base.update();
        assert!(base.needs_repaint());
    }

    #[test]
    fn test_enabled_changed_signal() {
        let mut base = WidgetBase::new("hue");
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        base.enabled_changed.connect(move |&enabled| sink.lock().push(enabled));

        base.set_enabled(false);
        base.set_enabled(false);
        base.set_enabled(true);

        assert_eq!(*seen.lock(), vec![false, true]);
    }

    #[test]
    fn test_focusable_requires_enabled_and_visible() {
        let mut base = WidgetBase::new("hue");
        base.set_focusable(true);
        assert!(base.is_focusable());
        base.set_visible(false);
        assert!(!base.is_focusable());
        base.set_visible(true);
        base.set_enabled(false);
        assert!(!base.is_focusable());
    }

    #[test]
    fn test_local_rect_ignores_position() {
        let mut base = WidgetBase::new("hue");
        base.set_geometry(Rect::new(30.0, 40.0, 200.0, 48.0));
        assert_eq!(base.rect(), Rect::new(0.0, 0.0, 200.0, 48.0));
        assert!(base.contains_point(Point::new(10.0, 10.0)));
        assert!(!base.contains_point(Point::new(210.0, 10.0)));
        assert_eq!(base.name(), "hue");
    }
}

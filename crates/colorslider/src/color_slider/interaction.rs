//! Pointer, wheel, keyboard and lifecycle handling.
//!
//! Every handler funnels value changes through the slider's clamping setter
//! and reports them on `scroll` and `value_changed`.

use colorslider_core::logging::targets;
use colorslider_render::Point;

use super::ColorSlider;
use super::geometry::{Boundary, offset_to_value};
use crate::widget::{
    Key, KeyPressEvent, MouseButton, MouseMoveEvent, MousePressEvent, MouseReleaseEvent,
    WheelEvent,
};

/// Wheel delta reported for one notch of a standard mouse wheel.
pub const WHEEL_DELTA: i32 = 120;

/// Why a `scroll` notification was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollEventKind {
    /// A drag started at the press position.
    ThumbTrack,
    /// The thumb was dragged to a value strictly inside the range.
    ThumbPosition,
    /// The value landed on the minimum.
    First,
    /// The value landed on the maximum.
    Last,
    SmallIncrement,
    SmallDecrement,
    LargeIncrement,
    LargeDecrement,
    /// The drag ended.
    EndScroll,
}

/// Payload of the `scroll` signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScrollEvent {
    pub kind: ScrollEventKind,
    /// The slider's value after the change.
    pub new_value: i32,
}

impl ScrollEvent {
    pub fn new(kind: ScrollEventKind, new_value: i32) -> Self {
        Self { kind, new_value }
    }
}

/// Transient pointer state, rebuilt from input events.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    /// The slider owns the pointer for an in-progress drag.
    pub captured: bool,
    pub pointer_over_control: bool,
    pub pointer_over_thumb: bool,
    /// Last pointer position seen, in local coordinates.
    pub last_pointer: Option<Point>,
}

impl InteractionState {
    /// Forget hover and capture, keeping the last pointer position.
    fn reset_pointer_flags(&mut self) {
        self.captured = false;
        self.pointer_over_control = false;
        self.pointer_over_thumb = false;
    }
}

impl ColorSlider {
    // =========================================================================
    // Event Handlers
    // =========================================================================

    pub(super) fn handle_mouse_press(&mut self, event: &MousePressEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }

        self.interaction.captured = true;
        tracing::trace!(
            target: targets::INPUT,
            name = self.base.name(),
            x = event.local_pos.x,
            y = event.local_pos.y,
            "pointer captured"
        );

        self.emit_scroll(ScrollEventKind::ThumbTrack);
        self.value_changed.emit(());

        // The drag starts at the press point without waiting for a move.
        self.track_pointer(event.local_pos, true);
        self.base.update();
        true
    }

    pub(super) fn handle_mouse_move(&mut self, event: &MouseMoveEvent) -> bool {
        self.track_pointer(event.local_pos, event.is_button_pressed(MouseButton::Left))
    }

    pub(super) fn handle_mouse_release(&mut self, event: &MouseReleaseEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }

        if self.interaction.captured {
            tracing::trace!(target: targets::INPUT, name = self.base.name(), "pointer released");
        }
        self.interaction.captured = false;
        self.interaction.last_pointer = Some(event.local_pos);
        self.interaction.pointer_over_thumb = self.thumb_rect().contains_strict(event.local_pos);

        self.emit_scroll(ScrollEventKind::EndScroll);
        self.value_changed.emit(());
        self.base.update();
        true
    }

    /// Wheel input is always consumed so enclosing scroll areas never see it.
    ///
    /// Every wheel event notifies `value_changed`, including a partial notch
    /// or a partition smaller than one value unit that moves nothing.
    pub(super) fn handle_wheel(&mut self, event: &WheelEvent) -> bool {
        let notches = event.primary_delta() as i64 / WHEEL_DELTA as i64;
        let step = notches * self.range.span() / self.mouse_wheel_bar_partitions as i64;
        self.set_value_clamped(self.value as i64 + step, None);
        true
    }

    pub(super) fn handle_key_press(&mut self, event: &KeyPressEvent) -> bool {
        if !self.base.has_focus() {
            return false;
        }

        let current = self.value as i64;
        let small = self.small_change as i64;
        let large = self.large_change as i64;

        match event.key {
            Key::ArrowDown | Key::ArrowLeft => {
                self.set_value_clamped(current - small, Some(ScrollEventKind::SmallDecrement));
            }
            Key::ArrowUp | Key::ArrowRight => {
                self.set_value_clamped(current + small, Some(ScrollEventKind::SmallIncrement));
            }
            Key::Home => self.set_value_clamped(self.range.minimum() as i64, None),
            Key::End => self.set_value_clamped(self.range.maximum() as i64, None),
            Key::PageDown => {
                self.set_value_clamped(current - large, Some(ScrollEventKind::LargeDecrement));
            }
            Key::PageUp => {
                self.set_value_clamped(current + large, Some(ScrollEventKind::LargeIncrement));
            }
            _ => return false,
        }

        if self.value == self.range.minimum() {
            self.emit_scroll(ScrollEventKind::First);
        }
        if self.value == self.range.maximum() {
            self.emit_scroll(ScrollEventKind::Last);
        }

        if let Some(pos) = self.interaction.last_pointer {
            self.track_pointer(pos, false);
        }
        true
    }

    pub(super) fn handle_enter(&mut self, pos: Point) {
        self.interaction.pointer_over_control = true;
        self.interaction.last_pointer = Some(pos);
        self.base.set_hovered(true);
        self.base.update();
    }

    pub(super) fn handle_leave(&mut self) {
        self.interaction.pointer_over_control = false;
        self.interaction.pointer_over_thumb = false;
        self.base.set_hovered(false);
        self.base.update();
    }

    /// End any drag and clear hover state. Used when focus, visibility or
    /// enablement is lost.
    pub(super) fn cancel_interaction(&mut self) {
        let was_captured = self.interaction.captured;
        self.interaction.reset_pointer_flags();
        self.base.set_hovered(false);

        if was_captured {
            tracing::trace!(
                target: targets::INPUT,
                name = self.base.name(),
                "drag cancelled"
            );
            self.emit_scroll(ScrollEventKind::EndScroll);
            self.value_changed.emit(());
        }
        self.base.update();
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    /// Refresh the thumb-hover flag and, while dragging, move the value
    /// under the pointer. Returns `true` if a drag step happened.
    fn track_pointer(&mut self, pos: Point, left_held: bool) -> bool {
        self.interaction.last_pointer = Some(pos);

        let over_thumb = self.thumb_rect().contains_strict(pos);
        if over_thumb != self.interaction.pointer_over_thumb {
            self.interaction.pointer_over_thumb = over_thumb;
            self.base.update();
        }

        if !(self.interaction.captured && left_held) {
            return false;
        }

        let axis_length = self.axis_length();
        let mapped = offset_to_value(
            self.orientation.primary(pos.x, pos.y),
            self.range,
            self.orientation,
            axis_length,
            self.thumb_size,
        );
        let kind = match mapped.boundary {
            Some(Boundary::First) => ScrollEventKind::First,
            Some(Boundary::Last) => ScrollEventKind::Last,
            None => ScrollEventKind::ThumbPosition,
        };

        let old = self.value;
        self.value = mapped.value;
        tracing::trace!(
            target: targets::INPUT,
            name = self.base.name(),
            old,
            new = self.value,
            ?kind,
            "drag"
        );

        // Notify on every drag step, even when the value is unchanged.
        self.emit_scroll(kind);
        self.value_changed.emit(());
        self.base.update();
        true
    }

    /// Clamp `value` into range, store it, emit `value_changed`, then the
    /// optional scroll notification.
    fn set_value_clamped(&mut self, value: i64, kind: Option<ScrollEventKind>) {
        let old = self.value;
        self.value = self.range.clamp(value);
        tracing::trace!(
            target: targets::INPUT,
            name = self.base.name(),
            old,
            new = self.value,
            ?kind,
            "value adjusted"
        );
        self.value_changed.emit(());
        if let Some(kind) = kind {
            self.emit_scroll(kind);
        }
        self.base.update();
    }

    fn emit_scroll(&self, kind: ScrollEventKind) {
        self.scroll.emit(ScrollEvent::new(kind, self.value));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use colorslider_render::Point;
    use parking_lot::Mutex;

    use super::*;
    use crate::widget::{
        EnterEvent, FocusInEvent, FocusOutEvent, FocusReason, KeyboardModifiers, LeaveEvent,
        Widget, WidgetEvent,
    };

    fn record(slider: &ColorSlider) -> Arc<Mutex<Vec<ScrollEvent>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        slider.scroll.connect(move |e| seen_clone.lock().push(*e));
        seen
    }

    fn press(slider: &mut ColorSlider, x: f32, y: f32) -> bool {
        let mut event = WidgetEvent::MousePress(MousePressEvent::new(
            MouseButton::Left,
            Point::new(x, y),
            KeyboardModifiers::NONE,
        ));
        slider.event(&mut event)
    }

    fn key(slider: &mut ColorSlider, key: Key) -> bool {
        let mut event =
            WidgetEvent::KeyPress(KeyPressEvent::new(key, KeyboardModifiers::NONE, false));
        slider.event(&mut event)
    }

    fn focus(slider: &mut ColorSlider) {
        slider.event(&mut WidgetEvent::FocusIn(FocusInEvent::new(FocusReason::Tab)));
    }

    #[test]
    fn test_press_emits_track_then_position() {
        let mut slider = ColorSlider::new();
        let seen = record(&slider);

        assert!(press(&mut slider, 100.0, 24.0));
        assert!(slider.interaction_state().captured);
        assert_eq!(slider.value(), 50);
        assert_eq!(
            *seen.lock(),
            vec![
                ScrollEvent::new(ScrollEventKind::ThumbTrack, 30),
                ScrollEvent::new(ScrollEventKind::ThumbPosition, 50),
            ]
        );
    }

    #[test]
    fn test_right_button_is_ignored() {
        let mut slider = ColorSlider::new();
        let mut event = WidgetEvent::MousePress(MousePressEvent::new(
            MouseButton::Right,
            Point::new(10.0, 10.0),
            KeyboardModifiers::NONE,
        ));
        assert!(!slider.event(&mut event));
        assert!(!event.is_accepted());
        assert_eq!(slider.value(), 30);
    }

    #[test]
    fn test_move_without_button_only_tracks_hover() {
        let mut slider = ColorSlider::new();
        press(&mut slider, 100.0, 24.0);
        let seen = record(&slider);

        let thumb = slider.thumb_rect().center();
        let mut event =
            WidgetEvent::MouseMove(MouseMoveEvent::new(thumb, 0, KeyboardModifiers::NONE));
        assert!(!slider.event(&mut event));
        assert!(seen.lock().is_empty());
        assert!(slider.interaction_state().pointer_over_thumb);
    }

    #[test]
    fn test_keys_require_focus() {
        let mut slider = ColorSlider::new();
        assert!(!key(&mut slider, Key::ArrowRight));
        assert_eq!(slider.value(), 30);

        focus(&mut slider);
        assert!(key(&mut slider, Key::ArrowRight));
        assert_eq!(slider.value(), 31);
    }

    #[test]
    fn test_home_reports_first_boundary() {
        let mut slider = ColorSlider::new();
        focus(&mut slider);
        let seen = record(&slider);

        key(&mut slider, Key::Home);
        assert_eq!(slider.value(), 0);
        assert_eq!(*seen.lock(), vec![ScrollEvent::new(ScrollEventKind::First, 0)]);
    }

    #[test]
    fn test_unhandled_key_is_not_consumed() {
        let mut slider = ColorSlider::new();
        focus(&mut slider);
        assert!(!key(&mut slider, Key::Space));
    }

    #[test]
    fn test_focus_out_cancels_drag() {
        let mut slider = ColorSlider::new();
        focus(&mut slider);
        press(&mut slider, 100.0, 24.0);
        let seen = record(&slider);

        slider.event(&mut WidgetEvent::FocusOut(FocusOutEvent::new(FocusReason::Mouse)));
        let state = slider.interaction_state();
        assert!(!state.captured);
        assert!(!state.pointer_over_thumb);
        assert!(!slider.has_focus());
        assert_eq!(*seen.lock(), vec![ScrollEvent::new(ScrollEventKind::EndScroll, 50)]);
    }

    #[test]
    fn test_enter_and_leave_track_hover() {
        let mut slider = ColorSlider::new();
        slider.event(&mut WidgetEvent::Enter(EnterEvent::new(Point::new(5.0, 5.0))));
        assert!(slider.interaction_state().pointer_over_control);
        assert!(slider.widget_base().is_hovered());

        slider.event(&mut WidgetEvent::Leave(LeaveEvent::new()));
        let state = slider.interaction_state();
        assert!(!state.pointer_over_control);
        assert!(!state.pointer_over_thumb);
    }
}

//! Input and lifecycle events a host delivers to a control.
//!
//! The host translates its native notifications into these types and hands
//! them to [`Widget::event`](super::Widget::event). Positions are always
//! local to the receiving control.

use colorslider_render::{Point, Size};

/// Modifier keys held while an input event was generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    pub shift: bool,
    /// Cmd on macOS.
    pub control: bool,
    /// Option on macOS.
    pub alt: bool,
}

impl KeyboardModifiers {
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
    };

    pub const SHIFT: Self = Self {
        shift: true,
        ..Self::NONE
    };

    pub const CTRL: Self = Self {
        control: true,
        ..Self::NONE
    };

    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt
    }

    pub fn none(&self) -> bool {
        !self.any()
    }
}

/// Pointer buttons. Only [`MouseButton::Left`] drags the thumb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MouseButton {
    Left = 0,
    Right = 1,
    Middle = 2,
}

impl MouseButton {
    /// Bit for this button in [`MouseMoveEvent::buttons`].
    #[inline]
    pub const fn mask(self) -> u8 {
        1 << self as u8
    }
}

/// Acceptance flag shared by every event.
///
/// A control accepts an event it consumed; the host stops routing accepted
/// input to enclosing containers.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    accepted: bool,
}

impl EventBase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    pub fn accept(&mut self) {
        self.accepted = true;
    }

    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

// =========================================================================
// Lifecycle
// =========================================================================

/// The host changed the control's size.
#[derive(Debug, Clone, Copy)]
pub struct ResizeEvent {
    pub base: EventBase,
    pub old_size: Size,
    pub new_size: Size,
}

impl ResizeEvent {
    pub fn new(old_size: Size, new_size: Size) -> Self {
        Self {
            base: EventBase::new(),
            old_size,
            new_size,
        }
    }
}

/// The control became visible.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShowEvent {
    pub base: EventBase,
}

impl ShowEvent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// The control was hidden. Any drag in progress ends.
#[derive(Debug, Clone, Copy, Default)]
pub struct HideEvent {
    pub base: EventBase,
}

impl HideEvent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// The host toggled the control's enabled flag.
#[derive(Debug, Clone, Copy)]
pub struct EnabledChangeEvent {
    pub base: EventBase,
    pub enabled: bool,
}

impl EnabledChangeEvent {
    pub fn new(enabled: bool) -> Self {
        Self {
            base: EventBase::new(),
            enabled,
        }
    }
}

// =========================================================================
// Pointer
// =========================================================================

/// A pointer button went down over the control.
#[derive(Debug, Clone, Copy)]
pub struct MousePressEvent {
    pub base: EventBase,
    pub button: MouseButton,
    pub local_pos: Point,
    pub modifiers: KeyboardModifiers,
}

impl MousePressEvent {
    pub fn new(button: MouseButton, local_pos: Point, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
            modifiers,
        }
    }
}

/// A pointer button came up. While the control holds capture this arrives
/// even when the pointer is outside its bounds.
#[derive(Debug, Clone, Copy)]
pub struct MouseReleaseEvent {
    pub base: EventBase,
    pub button: MouseButton,
    pub local_pos: Point,
    pub modifiers: KeyboardModifiers,
}

impl MouseReleaseEvent {
    pub fn new(button: MouseButton, local_pos: Point, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
            modifiers,
        }
    }
}

/// The pointer moved.
#[derive(Debug, Clone, Copy)]
pub struct MouseMoveEvent {
    pub base: EventBase,
    pub local_pos: Point,
    /// Held buttons, one [`MouseButton::mask`] bit each.
    pub buttons: u8,
    pub modifiers: KeyboardModifiers,
}

impl MouseMoveEvent {
    pub fn new(local_pos: Point, buttons: u8, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            local_pos,
            buttons,
            modifiers,
        }
    }

    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons & button.mask() != 0
    }
}

/// Wheel rotation. A standard detent is 120 units.
#[derive(Debug, Clone, Copy)]
pub struct WheelEvent {
    pub base: EventBase,
    pub local_pos: Point,
    /// Positive to the right.
    pub delta_x: f32,
    /// Positive away from the user.
    pub delta_y: f32,
    pub modifiers: KeyboardModifiers,
}

impl WheelEvent {
    pub fn new(local_pos: Point, delta_x: f32, delta_y: f32, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            local_pos,
            delta_x,
            delta_y,
            modifiers,
        }
    }

    /// Vertical delta, or the horizontal one for tilt-only wheels.
    pub fn primary_delta(&self) -> f32 {
        if self.delta_y != 0.0 {
            self.delta_y
        } else {
            self.delta_x
        }
    }
}

/// The pointer entered the control's bounds at `local_pos`.
#[derive(Debug, Clone, Copy)]
pub struct EnterEvent {
    pub base: EventBase,
    pub local_pos: Point,
}

impl EnterEvent {
    pub fn new(local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            local_pos,
        }
    }
}

/// The pointer left the control's bounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeaveEvent {
    pub base: EventBase,
}

impl LeaveEvent {
    pub fn new() -> Self {
        Self::default()
    }
}

// =========================================================================
// Focus and keyboard
// =========================================================================

/// What moved keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusReason {
    Mouse,
    Tab,
    #[default]
    Other,
}

#[derive(Debug, Clone, Copy)]
pub struct FocusInEvent {
    pub base: EventBase,
    pub reason: FocusReason,
}

impl FocusInEvent {
    pub fn new(reason: FocusReason) -> Self {
        Self {
            base: EventBase::new(),
            reason,
        }
    }
}

/// Keyboard focus moved elsewhere. Any drag in progress ends.
#[derive(Debug, Clone, Copy)]
pub struct FocusOutEvent {
    pub base: EventBase,
    pub reason: FocusReason,
}

impl FocusOutEvent {
    pub fn new(reason: FocusReason) -> Self {
        Self {
            base: EventBase::new(),
            reason,
        }
    }
}

/// Key codes.
///
/// Only the keys a range control reacts to, plus a few the host commonly
/// routes, are named. Everything else arrives as [`Key::Unknown`] carrying
/// the host's scan code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,
    Enter,
    Tab,
    Space,
    Escape,
    Unknown(u16),
}

#[derive(Debug, Clone, Copy)]
pub struct KeyPressEvent {
    pub base: EventBase,
    pub key: Key,
    pub modifiers: KeyboardModifiers,
    /// Auto-repeat from a held key.
    pub is_repeat: bool,
}

impl KeyPressEvent {
    pub fn new(key: Key, modifiers: KeyboardModifiers, is_repeat: bool) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers,
            is_repeat,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct KeyReleaseEvent {
    pub base: EventBase,
    pub key: Key,
    pub modifiers: KeyboardModifiers,
}

impl KeyReleaseEvent {
    pub fn new(key: Key, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers,
        }
    }
}

// =========================================================================
// Dispatch
// =========================================================================

/// Every event a control can receive.
#[derive(Debug, Clone, Copy)]
pub enum WidgetEvent {
    Resize(ResizeEvent),
    Show(ShowEvent),
    Hide(HideEvent),
    EnabledChange(EnabledChangeEvent),
    MousePress(MousePressEvent),
    MouseRelease(MouseReleaseEvent),
    MouseMove(MouseMoveEvent),
    Wheel(WheelEvent),
    Enter(EnterEvent),
    Leave(LeaveEvent),
    FocusIn(FocusInEvent),
    FocusOut(FocusOutEvent),
    KeyPress(KeyPressEvent),
    KeyRelease(KeyReleaseEvent),
}

macro_rules! event_base {
    ($event:expr, $($borrow:tt)+) => {
        match $event {
            WidgetEvent::Resize(e) => $($borrow)+ e.base,
            WidgetEvent::Show(e) => $($borrow)+ e.base,
            WidgetEvent::Hide(e) => $($borrow)+ e.base,
            WidgetEvent::EnabledChange(e) => $($borrow)+ e.base,
            WidgetEvent::MousePress(e) => $($borrow)+ e.base,
            WidgetEvent::MouseRelease(e) => $($borrow)+ e.base,
            WidgetEvent::MouseMove(e) => $($borrow)+ e.base,
            WidgetEvent::Wheel(e) => $($borrow)+ e.base,
            WidgetEvent::Enter(e) => $($borrow)+ e.base,
            WidgetEvent::Leave(e) => $($borrow)+ e.base,
            WidgetEvent::FocusIn(e) => $($borrow)+ e.base,
            WidgetEvent::FocusOut(e) => $($borrow)+ e.base,
            WidgetEvent::KeyPress(e) => $($borrow)+ e.base,
            WidgetEvent::KeyRelease(e) => $($borrow)+ e.base,
        }
    };
}

impl WidgetEvent {
    fn base(&self) -> &EventBase {
        event_base!(self, &)
    }

    fn base_mut(&mut self) -> &mut EventBase {
        event_base!(self, &mut)
    }

    pub fn is_accepted(&self) -> bool {
        self.base().is_accepted()
    }

    pub fn accept(&mut self) {
        self.base_mut().accept();
    }

    pub fn ignore(&mut self) {
        self.base_mut().ignore();
    }

    /// Whether the host should offer this event to the enclosing container.
    ///
    /// Pointer, wheel and key input bubble up until accepted. Lifecycle,
    /// hover and focus events belong to one control and never bubble.
    pub fn should_propagate(&self) -> bool {
        match self {
            Self::MousePress(_)
            | Self::MouseRelease(_)
            | Self::MouseMove(_)
            | Self::Wheel(_)
            | Self::KeyPress(_)
            | Self::KeyRelease(_) => !self.is_accepted(),
            Self::Resize(_)
            | Self::Show(_)
            | Self::Hide(_)
            | Self::EnabledChange(_)
            | Self::Enter(_)
            | Self::Leave(_)
            | Self::FocusIn(_)
            | Self::FocusOut(_) => false,
        }
    }
}

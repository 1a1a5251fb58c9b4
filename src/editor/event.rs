//! Normalized input events delivered by the host shell
//!
//! The host (window system, browser shim, test harness) translates its
//! raw input into these events; the editor core never sees platform
//! types.

/// Keys the editor reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Digit as printed on the key cap (0-9); selects a palette color
    Digit(u8),
    /// Modifier toggling remove mode
    Shift,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
}

/// One normalized input event, in viewport pixel coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerMove { x: f32, y: f32 },
    PointerDown { x: f32, y: f32 },
    PointerUp { x: f32, y: f32 },
    /// Scroll wheel; positive delta zooms in
    Wheel { delta_y: f32 },
    KeyDown(Key),
    KeyUp(Key),
}

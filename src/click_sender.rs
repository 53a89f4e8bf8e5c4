//! Pointer event emission.
//!
//! The click worker talks to the platform through the [`PointerSink`] trait
//! so the loop logic stays testable: production sessions use [`EnigoSink`],
//! tests substitute a recording sink, and [`NoopSink`] is available for
//! headless runs.
//!
//! Everything here is best-effort. Input injection is fire-and-forget: a
//! rejected move or click is not observable by the worker and never aborts
//! a session.

use enigo::{Enigo, MouseButton, MouseControllable};

use crate::options::ClickButton;

/// Sink for synthesized pointer events.
///
/// Implementations are created on the worker thread (the driver takes a
/// factory, not a sink), so they do not need to be `Send`.
pub trait PointerSink {
    /// Move the pointer to an absolute screen coordinate.
    fn move_to(&mut self, x: i32, y: i32);

    /// Press the given button.
    fn button_down(&mut self, button: ClickButton);

    /// Release the given button.
    fn button_up(&mut self, button: ClickButton);
}

/// Production sink backed by `enigo`.
pub struct EnigoSink {
    enigo: Enigo,
}

impl EnigoSink {
    pub fn new() -> Self {
        Self {
            enigo: Enigo::new(),
        }
    }
}

impl Default for EnigoSink {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerSink for EnigoSink {
    fn move_to(&mut self, x: i32, y: i32) {
        self.enigo.mouse_move_to(x, y);
    }

    fn button_down(&mut self, button: ClickButton) {
        self.enigo.mouse_down(map_button(button));
    }

    fn button_up(&mut self, button: ClickButton) {
        self.enigo.mouse_up(map_button(button));
    }
}

fn map_button(button: ClickButton) -> MouseButton {
    match button {
        ClickButton::Left => MouseButton::Left,
        ClickButton::Right => MouseButton::Right,
        ClickButton::Middle => MouseButton::Middle,
    }
}

/// Sink that swallows every event. Useful on headless systems and in
/// examples that should not move the real pointer.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl PointerSink for NoopSink {
    fn move_to(&mut self, _x: i32, _y: i32) {}

    fn button_down(&mut self, _button: ClickButton) {}

    fn button_up(&mut self, _button: ClickButton) {}
}

//! Session options handed from the controller to the click worker.
//!
//! A `ClickOptions` value is built once per start call and moved into the
//! worker thread; nothing here is shared or mutated afterwards. External
//! controllers that speak the raw integer surface (button/loop/location/
//! double-click codes) go through [`ClickOptions::from_codes`], which never
//! rejects a value: unrecognized codes degrade to "feature disabled" instead
//! of erroring.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Mouse button to synthesize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClickButton {
    Left,
    Right,
    Middle,
}

impl ClickButton {
    /// Map a raw controller code (0 = left, 1 = right, 2 = middle).
    ///
    /// Out-of-range codes map to `None`: the session still runs its loop
    /// (pointer moves, counting, sleeping) but emits no button events.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Left),
            1 => Some(Self::Right),
            2 => Some(Self::Middle),
            _ => None,
        }
    }
}

/// How many emission iterations a session runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    /// Click until stopped.
    #[default]
    Infinite,
    /// Click this many times, then self-terminate. The count is held in a
    /// u64 so large values cannot wrap the iteration counter.
    Fixed(u64),
}

/// Where each click lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClickPosition {
    /// Click wherever the pointer currently is.
    #[default]
    Cursor,
    /// Move the pointer to this screen coordinate before every click.
    Fixed { x: i32, y: i32 },
}

/// Single or double click per iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClickKind {
    #[default]
    Single,
    /// Two down/up pairs back to back, with no extra delay between the
    /// pairs. A double click still counts as one iteration.
    Double,
}

/// Immutable configuration snapshot for one click session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClickOptions {
    /// Delay between emission iterations.
    #[serde(default = "default_interval", with = "humantime_serde")]
    pub interval: Duration,

    /// Button to click; `None` disables emission for the whole session.
    #[serde(default = "default_button")]
    pub button: Option<ClickButton>,

    #[serde(default)]
    pub repeat: RepeatMode,

    #[serde(default)]
    pub position: ClickPosition,

    #[serde(default)]
    pub kind: ClickKind,
}

fn default_interval() -> Duration {
    Duration::from_millis(100)
}

fn default_button() -> Option<ClickButton> {
    Some(ClickButton::Left)
}

impl ClickOptions {
    /// Options with the stock defaults: left button, 100ms cadence, at the
    /// cursor, single clicks, until stopped.
    pub fn new() -> Self {
        Self {
            interval: default_interval(),
            button: default_button(),
            repeat: RepeatMode::default(),
            position: ClickPosition::default(),
            kind: ClickKind::default(),
        }
    }

    /// Build options from the raw integer surface used by external
    /// controllers. No code is ever rejected:
    ///
    /// - `button_code` outside 0..=2 disables emission for the session
    /// - `loop_mode != 1` means infinite; non-positive `loop_count` values
    ///   collapse to a single iteration before self-stop
    /// - `location_mode != 1` means click at the cursor
    /// - `double_click != 1` means single clicks
    #[allow(clippy::too_many_arguments)]
    pub fn from_codes(
        interval_ms: u64,
        button_code: i32,
        loop_mode: i32,
        loop_count: i64,
        location_mode: i32,
        fixed_x: i32,
        fixed_y: i32,
        double_click: i32,
    ) -> Self {
        Self {
            interval: Duration::from_millis(interval_ms),
            button: ClickButton::from_code(button_code),
            repeat: if loop_mode == 1 {
                RepeatMode::Fixed(u64::try_from(loop_count).unwrap_or(0))
            } else {
                RepeatMode::Infinite
            },
            position: if location_mode == 1 {
                ClickPosition::Fixed {
                    x: fixed_x,
                    y: fixed_y,
                }
            } else {
                ClickPosition::Cursor
            },
            kind: if double_click == 1 {
                ClickKind::Double
            } else {
                ClickKind::Single
            },
        }
    }
}

impl Default for ClickOptions {
    fn default() -> Self {
        Self::new()
    }
}

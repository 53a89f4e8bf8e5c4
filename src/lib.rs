//! # Mouse Click Sender
//!
//! A cross-platform auto-clicker core: synthesizes pointer-button events at
//! a configurable cadence on a background worker thread, at the cursor or a
//! fixed screen coordinate, until stopped or a repeat count is reached.
//!
//! ## Features
//!
//! - Left/right/middle button, single or double clicks
//! - Infinite or fixed-count sessions (fixed sessions self-terminate)
//! - Click at the cursor or at a fixed coordinate
//! - Non-blocking start, blocking stop (no worker survives `stop`)
//! - Global toggle hotkey for hands-free start/stop
//!
//! ## Example
//!
//! ```no_run
//! use mouse_click_sender::{ClickDriver, ClickOptions};
//!
//! let mut driver = ClickDriver::new();
//! driver.start(ClickOptions::new()).unwrap();
//! assert!(driver.is_running());
//!
//! // ... later, from the same controller:
//! driver.stop();
//! assert!(!driver.is_running());
//! ```
//!
//! ## Options transport
//!
//! Host applications can ship session options as JSON; unset fields take
//! the stock defaults:
//!
//! ```json
//! {
//!   "interval": "250ms",
//!   "button": "right",
//!   "repeat": { "fixed": 10 },
//!   "position": { "fixed": { "x": 640, "y": 480 } },
//!   "kind": "double"
//! }
//! ```
//!
//! Controllers speaking the raw integer surface (button/loop/location codes)
//! go through [`ClickOptions::from_codes`], which accepts every value and
//! degrades unknown codes to disabled features instead of erroring.

pub mod click_driver;
pub mod click_sender;
pub mod error;
pub mod global_hotkey;
pub mod options;

pub use click_driver::ClickDriver;
pub use click_sender::{EnigoSink, NoopSink, PointerSink};
pub use error::{ClickError, Result};
pub use global_hotkey::HotkeyManager;
pub use options::{ClickButton, ClickKind, ClickOptions, ClickPosition, RepeatMode};

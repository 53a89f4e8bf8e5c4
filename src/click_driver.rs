//! Session lifecycle and the click-emission loop.
//!
//! [`ClickDriver`] is the controller-facing surface: `start`, `stop` and
//! `is_running`. It owns the one piece of shared mutable state, an atomic
//! run flag, plus the handle of the worker thread currently driving a
//! session. The options snapshot is moved into the worker at spawn time and
//! never touched by the controller again.
//!
//! Stopping is cooperative: `stop` clears the flag and joins the worker,
//! which observes the flag at the top of its next iteration. Worst-case
//! stop latency is one in-flight interval sleep plus emission cost.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

use crate::click_sender::{EnigoSink, PointerSink};
use crate::error::{ClickError, Result};
use crate::options::{ClickKind, ClickOptions, ClickPosition, RepeatMode};

/// Drives at most one click session at a time.
///
/// # Example
///
/// ```
/// use mouse_click_sender::{ClickDriver, ClickOptions, NoopSink, RepeatMode};
///
/// let mut driver = ClickDriver::new();
/// let mut options = ClickOptions::new();
/// options.repeat = RepeatMode::Fixed(3);
/// options.interval = std::time::Duration::from_millis(1);
///
/// driver.start_with_sink(options, || NoopSink).unwrap();
/// while driver.is_running() {
///     std::thread::sleep(std::time::Duration::from_millis(5));
/// }
/// ```
pub struct ClickDriver {
    running: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl ClickDriver {
    pub fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(false)),
            worker: None,
        }
    }

    /// Start a session clicking through the real platform sink.
    ///
    /// Non-blocking: returns as soon as the worker thread is spawned. If a
    /// session is already running this is a silent no-op. The only error
    /// surfaced is thread-spawn failure, in which case the run flag has
    /// been rolled back and no worker exists.
    pub fn start(&mut self, options: ClickOptions) -> Result<()> {
        self.start_with_sink(options, EnigoSink::new)
    }

    /// Start a session with a caller-supplied sink factory.
    ///
    /// The factory runs on the worker thread, so the sink itself does not
    /// need to be `Send`.
    pub fn start_with_sink<S, F>(&mut self, options: ClickOptions, make_sink: F) -> Result<()>
    where
        S: PointerSink + 'static,
        F: FnOnce() -> S + Send + 'static,
    {
        if self.running.load(Ordering::Acquire) {
            debug!("start ignored: a click session is already running");
            return Ok(());
        }

        // A fixed-count session that ran out leaves a finished handle
        // behind; collect it before spawning the next worker.
        self.reap_finished();

        self.running.store(true, Ordering::Release);
        let running = Arc::clone(&self.running);

        let spawned = thread::Builder::new()
            .name("click-worker".into())
            .spawn(move || {
                let mut sink = make_sink();
                click_loop(options, &running, &mut sink);
            });

        match spawned {
            Ok(handle) => {
                self.worker = Some(handle);
                debug!("click session started");
                Ok(())
            }
            Err(source) => {
                // Without a worker the flag must not stay true.
                self.running.store(false, Ordering::Release);
                Err(ClickError::worker_spawn(source))
            }
        }
    }

    /// Stop the current session, blocking until the worker has exited.
    ///
    /// After this returns no worker from this driver is executing and no
    /// further clicks will be emitted. Stopping an idle driver is a no-op.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Release);
        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                warn!("click worker panicked before exiting");
            }
            debug!("click session stopped");
        }
    }

    /// Advisory snapshot of the run flag.
    ///
    /// May be stale by the time the caller acts on it; a fixed-count
    /// session can clear the flag on its own at any moment.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    fn reap_finished(&mut self) {
        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }
}

impl Default for ClickDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ClickDriver {
    /// Joins the worker on every exit path, so a dropped driver never
    /// leaves a clicking thread behind.
    fn drop(&mut self) {
        self.stop();
    }
}

/// The emission loop run by the worker thread.
///
/// Per iteration, while the flag is observed true: move the pointer if the
/// session targets a fixed coordinate, emit one down/up pair (two for
/// double clicks), advance the iteration count in fixed-repeat mode, then
/// sleep the configured interval. Reaching the repeat limit clears the
/// shared flag so the session ends without an external stop.
fn click_loop<S: PointerSink>(options: ClickOptions, running: &AtomicBool, sink: &mut S) {
    debug!(?options, "click worker entering loop");
    let mut iterations: u64 = 0;

    while running.load(Ordering::Acquire) {
        if let ClickPosition::Fixed { x, y } = options.position {
            sink.move_to(x, y);
        }

        if let Some(button) = options.button {
            sink.button_down(button);
            sink.button_up(button);
            if options.kind == ClickKind::Double {
                sink.button_down(button);
                sink.button_up(button);
            }
        }

        if let RepeatMode::Fixed(limit) = options.repeat {
            iterations += 1;
            if iterations >= limit {
                running.store(false, Ordering::Release);
                break;
            }
        }

        thread::sleep(options.interval);
    }

    debug!(iterations, "click worker exiting");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ClickButton;
    use std::time::Duration;

    #[derive(Debug, PartialEq, Eq)]
    enum Event {
        Move(i32, i32),
        Down(ClickButton),
        Up(ClickButton),
    }

    #[derive(Default)]
    struct RecordingSink {
        events: Vec<Event>,
    }

    impl PointerSink for RecordingSink {
        fn move_to(&mut self, x: i32, y: i32) {
            self.events.push(Event::Move(x, y));
        }

        fn button_down(&mut self, button: ClickButton) {
            self.events.push(Event::Down(button));
        }

        fn button_up(&mut self, button: ClickButton) {
            self.events.push(Event::Up(button));
        }
    }

    fn fixed_options(count: u64) -> ClickOptions {
        let mut options = ClickOptions::new();
        options.interval = Duration::ZERO;
        options.repeat = RepeatMode::Fixed(count);
        options
    }

    // The loop can be driven synchronously: with a fixed count it clears
    // the flag itself and returns.

    #[test]
    fn test_loop_emits_one_pair_per_iteration() {
        let running = AtomicBool::new(true);
        let mut sink = RecordingSink::default();

        click_loop(fixed_options(2), &running, &mut sink);

        assert_eq!(
            sink.events,
            vec![
                Event::Down(ClickButton::Left),
                Event::Up(ClickButton::Left),
                Event::Down(ClickButton::Left),
                Event::Up(ClickButton::Left),
            ]
        );
        assert!(!running.load(Ordering::Acquire));
    }

    #[test]
    fn test_loop_double_click_counts_once() {
        let running = AtomicBool::new(true);
        let mut sink = RecordingSink::default();

        let mut options = fixed_options(2);
        options.kind = ClickKind::Double;
        click_loop(options, &running, &mut sink);

        // Two iterations, two pairs each.
        assert_eq!(sink.events.len(), 8);
        assert!(!running.load(Ordering::Acquire));
    }

    #[test]
    fn test_loop_moves_before_every_click() {
        let running = AtomicBool::new(true);
        let mut sink = RecordingSink::default();

        let mut options = fixed_options(2);
        options.position = ClickPosition::Fixed { x: 7, y: 11 };
        click_loop(options, &running, &mut sink);

        assert_eq!(
            sink.events,
            vec![
                Event::Move(7, 11),
                Event::Down(ClickButton::Left),
                Event::Up(ClickButton::Left),
                Event::Move(7, 11),
                Event::Down(ClickButton::Left),
                Event::Up(ClickButton::Left),
            ]
        );
    }

    #[test]
    fn test_loop_disabled_button_still_counts() {
        let running = AtomicBool::new(true);
        let mut sink = RecordingSink::default();

        let mut options = fixed_options(3);
        options.button = None;
        click_loop(options, &running, &mut sink);

        assert!(sink.events.is_empty());
        assert!(!running.load(Ordering::Acquire));
    }

    #[test]
    fn test_loop_exits_immediately_when_flag_clear() {
        let running = AtomicBool::new(false);
        let mut sink = RecordingSink::default();

        click_loop(fixed_options(100), &running, &mut sink);

        assert!(sink.events.is_empty());
    }

    #[test]
    fn test_loop_zero_count_runs_single_iteration() {
        // A non-positive raw loop count collapses to Fixed(0), meaning
        // one iteration and then self-stop.
        let running = AtomicBool::new(true);
        let mut sink = RecordingSink::default();

        click_loop(fixed_options(0), &running, &mut sink);

        assert_eq!(sink.events.len(), 2);
        assert!(!running.load(Ordering::Acquire));
    }
}

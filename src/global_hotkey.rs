//! Global toggle hotkey for hands-free start/stop.
//!
//! The clicker is usually driven while another window has focus, so the
//! toggle key is registered system-wide. Presses flip an internal active
//! flag and are published over a watch channel; the controller reacts by
//! starting or stopping the session.

use global_hotkey::{GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

use crate::error::{ClickError, Result};

pub struct HotkeyManager {
    manager: GlobalHotKeyManager,
    is_active: Arc<AtomicBool>,
    toggle_sender: watch::Sender<bool>,
    toggle_receiver: watch::Receiver<bool>,
}

impl HotkeyManager {
    pub fn new() -> Result<Self> {
        let manager = GlobalHotKeyManager::new()
            .map_err(|e| ClickError::hotkey(format!("failed to create GlobalHotKeyManager: {e}")))?;

        let is_active = Arc::new(AtomicBool::new(false));
        let (toggle_sender, toggle_receiver) = watch::channel(false);

        Ok(Self {
            manager,
            is_active,
            toggle_sender,
            toggle_receiver,
        })
    }

    pub fn register_toggle_hotkey(&mut self, hotkey_str: &str) -> Result<()> {
        let hotkey = parse_hotkey(hotkey_str)?;

        self.manager
            .register(hotkey)
            .map_err(|e| ClickError::hotkey(format!("failed to register '{hotkey_str}': {e}")))?;

        println!("🔥 Global toggle hotkey '{hotkey_str}' registered successfully");
        Ok(())
    }

    pub fn get_toggle_receiver(&self) -> watch::Receiver<bool> {
        self.toggle_receiver.clone()
    }

    pub fn is_active(&self) -> bool {
        self.is_active.load(Ordering::Relaxed)
    }

    /// Spawn the blocking listener that polls hotkey events and flips the
    /// active flag on each press. Runs for the life of the process.
    pub async fn start_hotkey_listener(self: Arc<Self>) -> Result<()> {
        let receiver = GlobalHotKeyEvent::receiver();
        let manager = self.clone();

        tokio::task::spawn_blocking(move || loop {
            if let Ok(event) = receiver.try_recv() {
                if event.state == HotKeyState::Pressed {
                    let new_state = !manager.is_active.load(Ordering::Relaxed);
                    manager.is_active.store(new_state, Ordering::Relaxed);

                    if let Err(e) = manager.toggle_sender.send(new_state) {
                        eprintln!("Failed to send toggle state: {e}");
                    }

                    if new_state {
                        println!("▶️  Clicking STARTED (press hotkey again to stop)");
                    } else {
                        println!("⏹️  Clicking STOPPED");
                    }
                }
            }

            // Small sleep to prevent busy waiting
            std::thread::sleep(std::time::Duration::from_millis(10));
        });

        Ok(())
    }
}

fn parse_hotkey(hotkey_str: &str) -> Result<global_hotkey::hotkey::HotKey> {
    use global_hotkey::hotkey::{HotKey, Modifiers};

    let binding = hotkey_str.to_lowercase();
    let parts: Vec<&str> = binding.split('+').map(|s| s.trim()).collect();

    if parts.is_empty() {
        return Err(ClickError::hotkey("empty hotkey string"));
    }

    let mut modifiers = Modifiers::empty();
    let mut key_code = None;

    for part in &parts {
        match *part {
            "ctrl" | "control" => modifiers |= Modifiers::CONTROL,
            "alt" => modifiers |= Modifiers::ALT,
            "shift" => modifiers |= Modifiers::SHIFT,
            "meta" | "cmd" | "super" => modifiers |= Modifiers::SUPER,
            key => {
                if key_code.is_some() {
                    return Err(ClickError::hotkey(format!(
                        "multiple keys specified in hotkey: {hotkey_str}"
                    )));
                }
                key_code = Some(parse_key_code(key)?);
            }
        }
    }

    let code = key_code
        .ok_or_else(|| ClickError::hotkey(format!("no key specified in hotkey: {hotkey_str}")))?;

    Ok(HotKey::new(Some(modifiers), code))
}

fn parse_key_code(key: &str) -> Result<global_hotkey::hotkey::Code> {
    use global_hotkey::hotkey::Code;

    // Toggle keys are function keys in practice (F6 is the stock binding),
    // with space/escape as reachable alternatives.
    let code = match key {
        "f1" => Code::F1,
        "f2" => Code::F2,
        "f3" => Code::F3,
        "f4" => Code::F4,
        "f5" => Code::F5,
        "f6" => Code::F6,
        "f7" => Code::F7,
        "f8" => Code::F8,
        "f9" => Code::F9,
        "f10" => Code::F10,
        "f11" => Code::F11,
        "f12" => Code::F12,
        "space" => Code::Space,
        "escape" | "esc" => Code::Escape,
        _ => return Err(ClickError::hotkey(format!("unsupported key: {key}"))),
    };

    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hotkey_plain_and_modified() {
        assert!(parse_hotkey("f6").is_ok());
        assert!(parse_hotkey("F6").is_ok());
        assert!(parse_hotkey("ctrl+f6").is_ok());
        assert!(parse_hotkey("ctrl+alt+space").is_ok());
    }

    #[test]
    fn test_parse_hotkey_rejects_bad_input() {
        assert!(parse_hotkey("").is_err());
        assert!(parse_hotkey("ctrl+alt").is_err());
        assert!(parse_hotkey("f6+f7").is_err());
        assert!(parse_hotkey("banana").is_err());
    }
}

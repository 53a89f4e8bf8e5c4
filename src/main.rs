//! `mcs`: command-line controller for the click core.
//!
//! Validates its own arguments (the library does not), then drives the
//! driver through its three operations: start, stop, is_running.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use colored::Colorize;

use mouse_click_sender::{
    ClickButton, ClickDriver, ClickKind, ClickOptions, ClickPosition, HotkeyManager, RepeatMode,
};

#[derive(Parser, Debug)]
#[command(
    name = "mcs",
    version,
    about = "Cross-platform mouse auto-clicker with configurable cadence"
)]
struct Cli {
    /// Delay between clicks in milliseconds
    #[arg(long, default_value_t = 100)]
    interval_ms: u64,

    /// Mouse button to click
    #[arg(long, value_enum, default_value_t = ButtonArg::Left)]
    button: ButtonArg,

    /// Stop after this many clicks (default: click until stopped)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    count: Option<u64>,

    /// Click at a fixed screen coordinate instead of the cursor position
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    at: Option<Vec<i32>>,

    /// Emit a double click on every iteration
    #[arg(long)]
    double: bool,

    /// Wait for a global hotkey and toggle clicking on each press
    #[arg(long, value_name = "KEY", num_args = 0..=1, default_missing_value = "f6")]
    hotkey: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ButtonArg {
    Left,
    Right,
    Middle,
}

impl From<ButtonArg> for ClickButton {
    fn from(value: ButtonArg) -> Self {
        match value {
            ButtonArg::Left => ClickButton::Left,
            ButtonArg::Right => ClickButton::Right,
            ButtonArg::Middle => ClickButton::Middle,
        }
    }
}

impl Cli {
    fn click_options(&self) -> ClickOptions {
        ClickOptions {
            interval: Duration::from_millis(self.interval_ms),
            button: Some(self.button.into()),
            repeat: match self.count {
                Some(count) => RepeatMode::Fixed(count),
                None => RepeatMode::Infinite,
            },
            position: match self.at.as_deref() {
                Some([x, y]) => ClickPosition::Fixed { x: *x, y: *y },
                _ => ClickPosition::Cursor,
            },
            kind: if self.double {
                ClickKind::Double
            } else {
                ClickKind::Single
            },
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = cli.click_options();
    let mut driver = ClickDriver::new();

    if let Some(hotkey) = cli.hotkey.as_deref() {
        run_hotkey_mode(&mut driver, options, hotkey).await
    } else {
        run_session(&mut driver, options).await
    }
}

/// Start immediately; wait for the session to finish or for Ctrl-C.
async fn run_session(driver: &mut ClickDriver, options: ClickOptions) -> Result<()> {
    let finite = matches!(options.repeat, RepeatMode::Fixed(_));
    driver.start(options)?;

    if finite {
        println!(
            "{} clicking started, stops after the configured count (Ctrl-C to stop early)",
            "▶".green().bold()
        );
    } else {
        println!("{} clicking started (Ctrl-C to stop)", "▶".green().bold());
    }

    loop {
        if !driver.is_running() {
            println!("{} repeat count reached", "✔".green());
            break;
        }
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                println!("\n{} stopping...", "⏹".red());
                break;
            }
            _ = tokio::time::sleep(Duration::from_millis(50)) => {}
        }
    }

    driver.stop();
    Ok(())
}

/// Idle until the toggle hotkey fires, then start/stop on each press.
async fn run_hotkey_mode(
    driver: &mut ClickDriver,
    options: ClickOptions,
    hotkey: &str,
) -> Result<()> {
    let mut manager = HotkeyManager::new()?;
    manager.register_toggle_hotkey(hotkey)?;
    let mut toggles = manager.get_toggle_receiver();

    let manager = Arc::new(manager);
    manager.clone().start_hotkey_listener().await?;

    println!(
        "{} waiting for '{}' (Ctrl-C to quit)",
        "⌨".cyan(),
        hotkey.bold()
    );

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                println!("\n{} exiting...", "⏹".red());
                break;
            }
            changed = toggles.changed() => {
                if changed.is_err() {
                    break;
                }
                let active = *toggles.borrow_and_update();
                if active {
                    driver.start(options.clone())?;
                } else {
                    driver.stop();
                }
            }
        }
    }

    driver.stop();
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "mouse_click_sender=debug,mcs=debug"
    } else {
        "mouse_click_sender=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

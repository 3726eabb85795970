//! Shared test utilities and fakes.

#![allow(dead_code, unused_imports)]

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tempfile::TempDir;
use vanika::clipboard::{ClipboardAccess, ClipboardError};
use vanika::config::Config;
use vanika::launcher::{LaunchError, Launcher};
use vanika::ui::app::App;

pub const SCREEN_COLS: u16 = 120;
pub const SCREEN_ROWS: u16 = 40;

// -- Fakes --------------------------------------------------------------------

/// Clipboard that records every write. Can be switched to fail.
#[derive(Clone, Default)]
pub struct FakeClipboard {
    pub writes: Arc<Mutex<Vec<String>>>,
    pub fail: bool,
}

impl FakeClipboard {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl ClipboardAccess for FakeClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Unavailable("no display".to_string()));
        }
        self.writes.lock().push(text.to_string());
        Ok(())
    }
}

/// Launcher that records opened targets instead of spawning anything.
#[derive(Clone, Default)]
pub struct FakeLauncher {
    pub opened: Arc<Mutex<Vec<String>>>,
    pub fail: bool,
}

impl Launcher for FakeLauncher {
    fn open(&mut self, target: &str) -> Result<(), LaunchError> {
        if self.fail {
            return Err(LaunchError {
                target: target.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no opener"),
            });
        }
        self.opened.lock().push(target.to_string());
        Ok(())
    }
}

// -- App helpers --------------------------------------------------------------

pub struct Harness {
    pub app: App,
    pub clipboard: FakeClipboard,
    pub launcher: FakeLauncher,
}

pub fn make_harness(config: Config) -> Harness {
    make_harness_with(config, FakeClipboard::default(), FakeLauncher::default())
}

pub fn make_harness_with(config: Config, clipboard: FakeClipboard, launcher: FakeLauncher) -> Harness {
    let mut app = App::new(&config, Box::new(clipboard.clone()), Box::new(launcher.clone()));
    app.on_resize(SCREEN_COLS, SCREEN_ROWS);
    Harness {
        app,
        clipboard,
        launcher,
    }
}

pub fn make_app() -> App {
    make_harness(Config::default()).app
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(ch),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

pub fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::empty(),
    }
}

pub fn wheel_down() -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: 10,
        row: 10,
        modifiers: KeyModifiers::empty(),
    }
}

/// Run ticks until smooth scrolling settles.
pub fn settle(app: &mut App, now: Instant) {
    for _ in 0..200 {
        app.on_tick(now);
    }
}

/// Write `content` to a fresh `config.toml` inside a temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

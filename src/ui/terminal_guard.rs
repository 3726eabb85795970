use crate::site::METADATA;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear as TermClear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen, SetTitle,
};
use crossterm::{execute, ExecutableCommand};
use parking_lot::Mutex;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::Arc;

/// Terminal modes switched on for the storefront; restoring undoes exactly these.
#[derive(Debug, Clone, Copy)]
struct StorefrontModes {
    mouse: bool,
}

impl StorefrontModes {
    fn enter(self, out: &mut Stdout) -> io::Result<()> {
        enable_raw_mode()?;
        out.execute(EnterAlternateScreen)?;
        if self.mouse {
            out.execute(EnableMouseCapture)?;
        }
        execute!(out, SetTitle(METADATA.title), TermClear(ClearType::All), Hide)
    }

    fn leave(self) {
        let _ = disable_raw_mode();
        let mut out = io::stdout();
        if self.mouse {
            let _ = out.execute(DisableMouseCapture);
        }
        let _ = execute!(out, LeaveAlternateScreen, Show);
    }
}

/// Restores the terminal on drop and from the panic hook, whichever runs
/// first.
pub struct TerminalGuard {
    pending: Arc<Mutex<Option<StorefrontModes>>>,
}

impl TerminalGuard {
    fn arm(modes: StorefrontModes) -> Self {
        let pending = Arc::new(Mutex::new(Some(modes)));
        let hook_pending = Arc::clone(&pending);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if let Some(modes) = hook_pending.lock().take() {
                modes.leave();
            }
            default_hook(info);
        }));
        Self { pending }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Some(modes) = self.pending.lock().take() {
            modes.leave();
        }
    }
}

pub fn setup_terminal(
    mouse: bool,
) -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    let modes = StorefrontModes { mouse };
    let mut stdout = io::stdout();
    if let Err(err) = modes.enter(&mut stdout) {
        modes.leave();
        return Err(err);
    }

    let guard = TerminalGuard::arm(modes);
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}

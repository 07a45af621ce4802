use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

/// Puts the terminal back into cooked mode on the main screen, once.
///
/// Shared between the guard and the panic hook; whichever runs first
/// restores, the other does nothing.
#[derive(Debug, Clone, Default)]
struct Restorer {
    done: Arc<AtomicBool>,
}

impl Restorer {
    fn restore(&self) {
        if self.done.swap(true, Ordering::SeqCst) {
            return;
        }
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = stdout.execute(DisableMouseCapture);
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = stdout.execute(Show);
    }
}

/// Restores the terminal on drop or panic, whichever comes first.
pub struct TerminalGuard {
    restorer: Restorer,
}

impl TerminalGuard {
    fn install(restorer: Restorer) -> Self {
        let hook_restorer = restorer.clone();
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            hook_restorer.restore();
            default_hook(info);
        }));
        Self { restorer }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restorer.restore();
    }
}

/// Raw mode, alternate screen and mouse capture for the preview.
pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    // From here on a failure must still undo raw mode.
    let guard = TerminalGuard::install(Restorer::default());

    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    stdout.execute(Hide)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}

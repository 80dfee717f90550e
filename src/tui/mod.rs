// Full-screen preview: parsed structure on the left, generated script on
// the right, dialect switching and clipboard copy without leaving the
// terminal.
mod app_logic;
mod app_state;
mod event_handler;
mod ui_renderer;

pub use self::run_tui::run_preview;

// This module contains the main TUI loop and terminal setup/teardown
mod run_tui {
    use super::app_logic::PreviewApp;
    use super::event_handler::handle_events;
    use super::ui_renderer::ui_frame;
    use crate::outline::Entry;
    use crate::script::Shell;
    use anyhow::Result;
    use crossterm::{
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    };
    use ratatui::prelude::{CrosstermBackend, Terminal};
    use std::io::{self, Stdout};

    pub fn run_preview(entries: Vec<Entry>, shell: Shell, outline_is_blank: bool) -> Result<()> {
        let mut app = PreviewApp::new(entries, shell, outline_is_blank);

        let mut terminal = init_terminal()?;

        while !app.quit {
            terminal.draw(|frame| ui_frame(frame, &mut app))?;
            handle_events(&mut app)?;
        }

        restore_terminal(terminal)
    }

    fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor().map_err(Into::into)
    }
}

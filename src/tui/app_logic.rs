use super::app_state::CopyStatus;
use crate::clipboard;
use crate::outline::{self, Entry, TreeStats};
use crate::script::{self, Shell};
use crossterm::event::{KeyCode, KeyEvent};

// --- PreviewApp struct and impl ---
pub(super) struct PreviewApp {
    pub(super) entries: Vec<Entry>,
    pub(super) stats: TreeStats,
    pub(super) shell: Shell,
    pub(super) script: String,
    pub(super) copy_status: CopyStatus,
    pub(super) scroll: u16,
    pub(super) viewport_height: u16,
    pub(super) quit: bool,
    outline_is_blank: bool,
}

impl PreviewApp {
    pub fn new(entries: Vec<Entry>, shell: Shell, outline_is_blank: bool) -> Self {
        let stats = outline::tally(&entries);
        let mut app = PreviewApp {
            entries,
            stats,
            shell,
            script: String::new(),
            copy_status: CopyStatus::Idle,
            scroll: 0,
            viewport_height: 0, // Will be updated by ui_renderer
            quit: false,
            outline_is_blank,
        };
        app.regenerate_script();
        app
    }

    // Dialect switches re-run emission only; the parse is untouched.
    fn regenerate_script(&mut self) {
        self.script = if self.outline_is_blank {
            String::new()
        } else {
            script::generate_script(self.shell, &self.entries)
        };
        self.scroll = 0;
    }

    pub(super) fn cycle_shell(&mut self) {
        self.shell = self.shell.next();
        self.regenerate_script();
    }

    // Both panes scroll together, so the limit tracks the taller of the two.
    fn content_height(&self) -> u16 {
        self.script.lines().count().max(self.entries.len()) as u16
    }

    fn max_scroll(&self) -> u16 {
        self.content_height()
            .saturating_sub(self.viewport_height.max(1))
    }

    pub(super) fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines).min(self.max_scroll());
    }

    pub(super) fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub(super) fn copy_script(&mut self) {
        if self.script.is_empty() {
            return;
        }
        self.copy_status = match clipboard::copy_text_to_clipboard(self.script.clone()) {
            Ok(()) => CopyStatus::Copied,
            Err(_) => CopyStatus::Failed,
        };
    }

    pub(super) fn handle_key(&mut self, key_event: KeyEvent) {
        let is_copy_key = matches!(key_event.code, KeyCode::Char('c') | KeyCode::Char('y'));
        if !is_copy_key {
            self.copy_status = CopyStatus::Idle;
        }
        let page = self.viewport_height.max(1);
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Char('s') => self.cycle_shell(),
            KeyCode::Char('c') | KeyCode::Char('y') => self.copy_script(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(1),
            KeyCode::PageDown => self.scroll_down(page),
            KeyCode::PageUp => self.scroll_up(page),
            KeyCode::Char('g') => self.scroll = 0,
            KeyCode::Char('G') => self.scroll = self.max_scroll(),
            _ => {}
        }
    }
}

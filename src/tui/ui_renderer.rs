use super::app_logic::PreviewApp;
use super::app_state::CopyStatus;
use crate::outline::EntryKind;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

fn draw_structure_pane(f: &mut Frame, app: &PreviewApp, area: Rect) {
    let lines: Vec<Line> = if app.entries.is_empty() {
        vec![Line::from(Span::styled(
            "(no entries parsed)",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        app.entries
            .iter()
            .map(|entry| {
                // Re-indent from the resolved path so the pane shows the
                // nesting the parser actually settled on.
                let depth = entry.path.matches('/').count();
                let indent = "  ".repeat(depth);
                match entry.kind {
                    EntryKind::Folder => Line::from(Span::styled(
                        format!("{}{}/", indent, entry.name),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    EntryKind::File => Line::from(format!("{}{}", indent, entry.name)),
                }
            })
            .collect()
    };

    let structure_paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Project Structure"),
        )
        .scroll((app.scroll, 0));
    f.render_widget(structure_paragraph, area);
}

fn draw_script_pane(f: &mut Frame, app: &mut PreviewApp, area: Rect) {
    app.viewport_height = area.height.saturating_sub(2);

    let script_paragraph = if app.script.is_empty() {
        Paragraph::new(Span::styled(
            "(outline is empty)",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Paragraph::new(app.script.as_str()).scroll((app.scroll, 0))
    };
    let title = format!("Generated Script [{}]", app.shell.label());
    f.render_widget(
        script_paragraph.block(Block::default().borders(Borders::ALL).title(title)),
        area,
    );
}

fn draw_footer(f: &mut Frame, app: &PreviewApp, area: Rect) {
    let mut status_spans = vec![Span::raw(format!(
        "Detected: {} folders, {} files   Shell: {}",
        app.stats.folders, app.stats.files, app.shell
    ))];
    match app.copy_status {
        CopyStatus::Idle => {}
        CopyStatus::Copied => status_spans.push(Span::styled(
            "   ✅ Copied!",
            Style::default().fg(Color::Green),
        )),
        CopyStatus::Failed => status_spans.push(Span::styled(
            "   ⚠️ Copy failed",
            Style::default().fg(Color::Red),
        )),
    }

    let footer_lines = vec![
        Line::from(status_spans),
        Line::from("Tab/s: Shell | c/y: Copy | j/k/PgUp/PgDn: Scroll | g/G: Top/End | q/Esc: Quit"),
    ];
    let footer_paragraph = Paragraph::new(footer_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(app.shell.tip()),
    );
    f.render_widget(footer_paragraph, area);
}

pub(super) fn ui_frame(frame: &mut Frame, app: &mut PreviewApp) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(4)])
        .split(frame.area());

    let pane_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[0]);

    draw_structure_pane(frame, app, pane_chunks[0]);
    draw_script_pane(frame, app, pane_chunks[1]);
    draw_footer(frame, app, main_chunks[1]);
}

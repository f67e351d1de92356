//! Help overlay: key bindings and data sources.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::AppState;
use crate::input::key_bindings_help;
use crate::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, theme, "Navigation");
    for (keys, action) in key_bindings_help() {
        key(&mut lines, theme, keys, action);
    }
    lines.push(Line::from(""));

    section(&mut lines, theme, "Sources des données");
    for source in &app.dataset.sources {
        lines.push(Line::from(Span::styled(
            format!("  {source}"),
            Style::default().fg(theme.text_secondary),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  Données au {}", app.dataset.last_updated),
        Style::default().fg(theme.muted),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .title(" Aide (Esc pour fermer) ")
        .title_style(theme.panel_title());

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn section<'a>(lines: &mut Vec<Line<'a>>, theme: &Theme, title: &str) {
    lines.push(Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
    )));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, theme: &Theme, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(
            format!("  {:<18}", keys),
            Style::default().fg(theme.text_primary).add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc.to_string(), Style::default().fg(theme.text_secondary)),
    ]));
}

//! Bottom status bar: key hints and the last status message.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, StatusLevel};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let mut spans: Vec<Span> = Vec::new();

    let hints = if app.nav.sub_tabs_visible() {
        " 1-4:Onglet  Tab:Suivant  [/]:Sous-onglet  ?:Aide  q:Quitter"
    } else {
        " 1-4:Onglet  Tab:Suivant  ?:Aide  q:Quitter"
    };
    spans.push(Span::styled(hints, Style::default().fg(theme.muted)));

    if let Some((msg, level)) = &app.status_message {
        spans.push(Span::raw(" | "));
        let color = match level {
            StatusLevel::Info => theme.accent,
            StatusLevel::Warning => theme.warning,
        };
        spans.push(Span::styled(msg.as_str(), Style::default().fg(color)));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

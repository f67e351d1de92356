//! Header: title, data date, key-indicator strip and the tab bars.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Tabs};
use ratatui::Frame;

use conjoncture_core::{PrimaryTab, SecondaryTab};

use crate::app::AppState;

pub const HEIGHT: u16 = 2;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let title = Line::from(vec![
        Span::styled(
            " Conjoncture NAO ",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ Données au ", Style::default().fg(theme.muted)),
        // Shown as stored, never reformatted.
        Span::styled(
            app.dataset.last_updated.as_str(),
            Style::default().fg(theme.text_primary),
        ),
    ]);

    let mut strip: Vec<Span> = vec![Span::raw(" ")];
    for (i, (label, value)) in app.indicators.rows().into_iter().enumerate() {
        if i > 0 {
            strip.push(Span::styled("  ·  ", Style::default().fg(theme.muted)));
        }
        strip.push(Span::styled(
            format!("{label} "),
            Style::default().fg(theme.text_secondary),
        ));
        strip.push(Span::styled(
            value,
            Style::default().fg(theme.text_primary).add_modifier(Modifier::BOLD),
        ));
    }

    f.render_widget(Paragraph::new(vec![title, Line::from(strip)]), area);
}

/// Primary tab bar, plus the sub-tab bar while *Emploi* is selected.
pub fn render_tabs(f: &mut Frame, area: Rect, app: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let primary = Tabs::new(
        PrimaryTab::ALL
            .iter()
            .map(|t| format!("{} {}", t.index() + 1, t.label())),
    )
    .select(app.nav.primary().index())
    .style(app.theme.tab_inactive())
    .highlight_style(app.theme.tab_active())
    .divider("│");
    f.render_widget(primary, rows[0]);

    if app.nav.sub_tabs_visible() && rows[1].height > 0 {
        let secondary = Tabs::new(SecondaryTab::ALL.iter().map(|t| t.label()))
            .select(app.nav.secondary().index())
            .style(app.theme.tab_inactive())
            .highlight_style(app.theme.tab_active())
            .divider("·")
            .padding("  ", " ");
        f.render_widget(secondary, rows[1]);
    }
}

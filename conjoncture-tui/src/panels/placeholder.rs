//! Muted stand-in for a panel whose series is unavailable.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use conjoncture_core::DashboardError;

use crate::theme::Theme;

pub struct Placeholder<'a> {
    error: &'a DashboardError,
    theme: &'a Theme,
}

impl<'a> Placeholder<'a> {
    pub fn new(error: &'a DashboardError, theme: &'a Theme) -> Self {
        Self { error, theme }
    }
}

impl<'a> Widget for Placeholder<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![Line::from(""); usize::from(area.height.saturating_sub(2) / 2)];
        lines.push(Line::from(Span::styled(
            "Données indisponibles",
            Style::default()
                .fg(self.theme.muted)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            self.error.to_string(),
            Style::default()
                .fg(self.theme.muted)
                .add_modifier(Modifier::ITALIC),
        )));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::buffer_text;
    use conjoncture_core::SeriesId;

    #[test]
    fn test_placeholder_names_the_series() {
        let theme = Theme::default();
        let err = DashboardError::MissingSeries(SeriesId::OccupationTension);
        let area = Rect::new(0, 0, 60, 8);
        let mut buf = Buffer::empty(area);
        Placeholder::new(&err, &theme).render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("Données indisponibles"));
        assert!(text.contains("occupation_tension"));
    }

    #[test]
    fn test_placeholder_in_one_line() {
        let theme = Theme::default();
        let err = DashboardError::MissingSeries(SeriesId::JobFlows);
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        Placeholder::new(&err, &theme).render(area, &mut buf);
    }
}

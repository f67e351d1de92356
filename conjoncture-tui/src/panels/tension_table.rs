//! Occupation table: label, colour-coded difficulty badge, right-aligned count.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Row, Table, Widget},
};

use conjoncture_core::derived::{difficulty_band, RowMark};
use conjoncture_core::format::ValueFormat;
use conjoncture_core::panels::PanelDescriptor;
use conjoncture_core::FrameRow;

use crate::theme::Theme;

pub struct TensionTable<'a> {
    descriptor: &'static PanelDescriptor,
    rows: &'a [FrameRow],
    theme: &'a Theme,
}

impl<'a> TensionTable<'a> {
    pub fn new(
        descriptor: &'static PanelDescriptor,
        rows: &'a [FrameRow],
        theme: &'a Theme,
    ) -> Self {
        Self {
            descriptor,
            rows,
            theme,
        }
    }

    fn badge(&self, row: &FrameRow) -> Span<'static> {
        let value = row.values.first().copied().unwrap_or_default();
        let band = match row.mark {
            Some(RowMark::Difficulty(band)) => band,
            _ => difficulty_band(value),
        };
        let format = self
            .descriptor
            .encoding
            .channels
            .first()
            .map_or(ValueFormat::Percent, |c| c.format);
        Span::styled(
            format!(" {} ", format.format(value)),
            Style::default()
                .fg(self.theme.text_primary)
                .bg(self.theme.band_color(band))
                .add_modifier(Modifier::BOLD),
        )
    }

    fn count(&self, row: &FrameRow) -> String {
        let format = self
            .descriptor
            .encoding
            .channels
            .get(1)
            .map_or(ValueFormat::Count, |c| c.format);
        row.values
            .get(1)
            .map(|&v| format.format(v))
            .unwrap_or_default()
    }
}

impl<'a> Widget for TensionTable<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let channels = self.descriptor.encoding.channels;
        let header_style = Style::default()
            .fg(self.theme.accent)
            .add_modifier(Modifier::BOLD);
        let header = Row::new(vec![
            Cell::from("Métier"),
            Cell::from(channels.first().map_or("", |c| c.label)),
            Cell::from(
                Line::from(channels.get(1).map_or("", |c| c.label)).alignment(Alignment::Right),
            ),
        ])
        .style(header_style)
        .height(1);

        let rows = self.rows.iter().map(|row| {
            Row::new(vec![
                Cell::from(row.label.clone()),
                Cell::from(Line::from(self.badge(row))),
                Cell::from(Line::from(self.count(row)).alignment(Alignment::Right)),
            ])
            .style(Style::default().fg(self.theme.text_primary))
        });

        let widths = [
            Constraint::Min(16),
            Constraint::Length(12),
            Constraint::Length(10),
        ];

        Table::new(rows, widths)
            .header(header)
            .column_spacing(1)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::buffer_text;
    use conjoncture_core::derived::DifficultyBand;
    use conjoncture_core::{compose, ComposedPanel, Dataset, PrimaryTab, SecondaryTab};

    fn tension() -> ComposedPanel {
        let ds = Dataset::bundled();
        compose(PrimaryTab::Employment, SecondaryTab::Recruitment, &ds).remove(1)
    }

    #[test]
    fn test_table_shows_three_columns() {
        let theme = Theme::default();
        let panel = tension();
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        TensionTable::new(panel.descriptor, panel.rows.as_ref().unwrap(), &theme)
            .render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("Aides-soignants"));
        assert!(text.contains("86.5%"));
        assert!(text.contains("109 340"));
    }

    #[test]
    fn test_badges_follow_bands() {
        let theme = Theme::default();
        let panel = tension();
        let rows = panel.rows.as_ref().unwrap();
        let table = TensionTable::new(panel.descriptor, rows, &theme);
        let by_label = |label: &str| rows.iter().find(|r| r.label == label).unwrap();

        let bg = |label: &str| table.badge(by_label(label)).style.bg;

        assert_eq!(bg("Aides-soignants"), Some(theme.band_color(DifficultyBand::Red)));
        assert_eq!(bg("Chaudronniers, soudeurs"), Some(theme.badge_red));
        assert_eq!(bg("Mécaniciens automobile"), Some(theme.badge_orange));
        assert_eq!(bg("Aides à domicile"), Some(theme.badge_yellow));
    }

    #[test]
    fn test_count_is_right_aligned() {
        let theme = Theme::default();
        let panel = tension();
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        TensionTable::new(panel.descriptor, panel.rows.as_ref().unwrap(), &theme)
            .render(area, &mut buf);
        let text = buffer_text(&buf);
        let line = text.lines().find(|l| l.contains("Aides-soignants")).unwrap();
        assert!(line.trim_end().ends_with("109 340"));
    }
}

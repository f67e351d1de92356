//! Chart widgets, one per chart kind, plus the framed [`PanelView`] that
//! picks between them.

pub mod bar_chart;
pub mod composed;
pub mod line_chart;
pub mod placeholder;
pub mod tension_table;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use conjoncture_core::panels::{Channel, Mark, PanelDescriptor};
use conjoncture_core::{ChartKind, ComposedPanel};

use crate::theme::Theme;

pub use bar_chart::BarPanel;
pub use composed::ComposedChart;
pub use line_chart::LinePanel;
pub use placeholder::Placeholder;
pub use tension_table::TensionTable;

/// Channel indices and definitions, optionally restricted to one mark.
pub(crate) fn channels_of(
    descriptor: &'static PanelDescriptor,
    mark: Option<Mark>,
) -> Vec<(usize, &'static Channel)> {
    descriptor
        .encoding
        .channels
        .iter()
        .enumerate()
        .filter(|(_, c)| mark.map_or(true, |m| c.mark == m))
        .collect()
}

/// First `max` characters of a label.
pub(crate) fn truncate(label: &str, max: usize) -> String {
    label.chars().take(max).collect()
}

/// One-line colour legend for multi-channel charts.
pub(crate) fn legend_line(
    channels: &[(usize, &'static Channel)],
    theme: &Theme,
    suffix: &str,
) -> Line<'static> {
    let mut spans = Vec::with_capacity(channels.len() * 2 + 1);
    for (_, channel) in channels {
        spans.push(Span::styled(
            "■ ",
            Style::default().fg(theme.series_color(channel.color)),
        ));
        spans.push(Span::styled(
            format!("{}  ", channel.label),
            Style::default().fg(theme.text_secondary),
        ));
    }
    if !suffix.is_empty() {
        spans.push(Span::styled(suffix.to_string(), Style::default().fg(theme.muted)));
    }
    Line::from(spans)
}

/// A composed panel inside a titled border, with its reading note underneath.
pub struct PanelView<'a> {
    panel: &'a ComposedPanel,
    theme: &'a Theme,
}

impl<'a> PanelView<'a> {
    pub fn new(panel: &'a ComposedPanel, theme: &'a Theme) -> Self {
        Self { panel, theme }
    }
}

impl<'a> Widget for PanelView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let descriptor = self.panel.descriptor;
        let block = Block::default()
            .title(format!(" {} ", descriptor.title))
            .borders(Borders::ALL)
            .border_style(self.theme.panel_border())
            .title_style(self.theme.panel_title());
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = match &self.panel.rows {
            Ok(rows) => rows,
            Err(err) => {
                Placeholder::new(err, self.theme).render(inner, buf);
                return;
            }
        };

        let (chart_area, note_area) = match descriptor.note {
            Some(_) if inner.height > 6 => {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(3), Constraint::Length(1)])
                    .split(inner);
                (chunks[0], Some(chunks[1]))
            }
            _ => (inner, None),
        };

        if chart_area.width < 4 || chart_area.height < 2 {
            return;
        }

        match descriptor.kind {
            ChartKind::Line => LinePanel::new(descriptor, rows, self.theme).render(chart_area, buf),
            ChartKind::Bar | ChartKind::StackedBar => {
                BarPanel::new(descriptor, rows, self.theme).render(chart_area, buf)
            }
            ChartKind::Composed => {
                ComposedChart::new(descriptor, rows, self.theme).render(chart_area, buf)
            }
            ChartKind::Table => {
                TensionTable::new(descriptor, rows, self.theme).render(chart_area, buf)
            }
        }

        if let (Some(note), Some(note_area)) = (descriptor.note, note_area) {
            Paragraph::new(Span::styled(
                note,
                Style::default()
                    .fg(self.theme.muted)
                    .add_modifier(Modifier::ITALIC),
            ))
            .render(note_area, buf);
        }
    }
}

#[cfg(test)]
pub(crate) fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut content = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            content.push_str(buf.cell((x, y)).map_or(" ", |c| c.symbol()));
        }
        content.push('\n');
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use conjoncture_core::{compose, Dataset, PrimaryTab, SecondaryTab, SeriesId};

    #[test]
    fn test_panel_view_shows_title_and_note() {
        let theme = Theme::default();
        let ds = Dataset::bundled();
        let panels = compose(PrimaryTab::Employment, SecondaryTab::Contracts, &ds);
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        PanelView::new(&panels[1], &theme).render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("Dernière période"));
        assert!(text.contains("Autres : non-salariés"));
    }

    #[test]
    fn test_panel_view_degrades_to_placeholder() {
        let theme = Theme::default();
        let ds = Dataset::bundled().without_series(SeriesId::JobFlows);
        let panels = compose(PrimaryTab::Employment, SecondaryTab::Dynamics, &ds);
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        PanelView::new(&panels[0], &theme).render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("Créations et destructions"));
        assert!(text.contains("job_flows"));
    }

    #[test]
    fn test_channels_of_filters_by_mark() {
        let ds = Dataset::bundled();
        let panels = compose(PrimaryTab::PurchasingPower, SecondaryTab::Unemployment, &ds);
        let descriptor = panels[0].descriptor;
        assert_eq!(channels_of(descriptor, None).len(), 3);
        let lines = channels_of(descriptor, Some(Mark::Line));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].0, 2);
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("Hébergement-restauration", 5), "Héber");
        assert_eq!(truncate("CDI", 8), "CDI");
    }
}

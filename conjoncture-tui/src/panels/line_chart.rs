//! Line chart: one braille line per channel over the row categories.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    symbols,
    text::Span,
    widgets::{Axis, Chart, Dataset, GraphType, LegendPosition, Widget},
};

use conjoncture_core::panels::{Channel, Mark, PanelDescriptor};
use conjoncture_core::FrameRow;

use super::channels_of;
use crate::theme::Theme;

pub struct LinePanel<'a> {
    descriptor: &'static PanelDescriptor,
    rows: &'a [FrameRow],
    channels: Vec<(usize, &'static Channel)>,
    theme: &'a Theme,
}

impl<'a> LinePanel<'a> {
    pub fn new(
        descriptor: &'static PanelDescriptor,
        rows: &'a [FrameRow],
        theme: &'a Theme,
    ) -> Self {
        Self {
            descriptor,
            rows,
            channels: channels_of(descriptor, None),
            theme,
        }
    }

    /// Only the line-marked channels, for the lower half of a composed chart.
    pub fn lines_only(mut self) -> Self {
        self.channels = channels_of(self.descriptor, Some(Mark::Line));
        self
    }

    fn series(&self) -> Vec<Vec<(f64, f64)>> {
        self.channels
            .iter()
            .map(|(idx, _)| {
                self.rows
                    .iter()
                    .enumerate()
                    .filter_map(|(i, row)| row.values.get(*idx).map(|&v| (i as f64, v)))
                    .collect()
            })
            .collect()
    }

    /// Fixed domain if the descriptor has one, else data range plus 5%.
    fn y_bounds(&self, series: &[Vec<(f64, f64)>]) -> [f64; 2] {
        if let Some((lo, hi)) = self.descriptor.encoding.y_domain {
            return [lo, hi];
        }
        let values = series.iter().flatten().map(|&(_, v)| v);
        let lo = values.clone().fold(f64::INFINITY, f64::min);
        let hi = values.fold(f64::NEG_INFINITY, f64::max);
        if !lo.is_finite() || !hi.is_finite() {
            return [0.0, 1.0];
        }
        let range = hi - lo;
        let pad = if range > 0.0 { range * 0.05 } else { 1.0 };
        [lo - pad, hi + pad]
    }

    fn x_labels(&self) -> Vec<Span<'static>> {
        let n = self.rows.len();
        let label = |i: usize| Span::raw(self.rows[i].label.clone());
        match n {
            0 => vec![],
            1 => vec![label(0)],
            2 => vec![label(0), label(1)],
            _ => vec![label(0), label(n / 2), label(n - 1)],
        }
    }
}

impl<'a> Widget for LinePanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let series = self.series();
        let [y_lower, y_upper] = self.y_bounds(&series);
        let x_max = (self.rows.len().saturating_sub(1)).max(1) as f64;

        let format = self
            .channels
            .first()
            .map(|(_, c)| c.format)
            .unwrap_or(conjoncture_core::format::ValueFormat::Index);
        let y_labels = vec![
            Span::raw(format.format(y_lower)),
            Span::raw(format.format((y_lower + y_upper) / 2.0)),
            Span::raw(format.format(y_upper)),
        ];

        let datasets = self
            .channels
            .iter()
            .zip(&series)
            .map(|((_, channel), points)| {
                Dataset::default()
                    .name(channel.label)
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(self.theme.series_color(channel.color)))
                    .data(points)
            })
            .collect::<Vec<_>>();

        let legend = if self.channels.len() > 1 {
            Some(LegendPosition::TopLeft)
        } else {
            None
        };

        Chart::new(datasets)
            .legend_position(legend)
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(self.theme.muted))
                    .bounds([0.0, x_max])
                    .labels(self.x_labels()),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(self.theme.muted))
                    .bounds([y_lower, y_upper])
                    .labels(y_labels),
            )
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::buffer_text;
    use conjoncture_core::{compose, Dataset as Indicators, PrimaryTab, SecondaryTab};

    fn unemployment() -> conjoncture_core::ComposedPanel {
        let ds = Indicators::bundled();
        compose(PrimaryTab::Employment, SecondaryTab::Unemployment, &ds).remove(0)
    }

    #[test]
    fn test_line_panel_renders_without_panic() {
        let theme = Theme::default();
        let panel = unemployment();
        let rows = panel.rows.as_ref().unwrap();
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        LinePanel::new(panel.descriptor, rows, &theme).render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("T1 2023"));
        assert!(text.contains("T3 2025"));
        assert!(text.contains("Ensemble"));
    }

    #[test]
    fn test_fitted_bounds_pad_the_range() {
        let theme = Theme::default();
        let panel = unemployment();
        let rows = panel.rows.as_ref().unwrap();
        let line = LinePanel::new(panel.descriptor, rows, &theme);
        let [lo, hi] = line.y_bounds(&line.series());
        assert!(lo < 7.1 && lo > 6.0);
        assert!(hi > 19.2 && hi < 20.0);
    }

    #[test]
    fn test_fixed_domain_is_respected() {
        let theme = Theme::default();
        let ds = Indicators::bundled();
        let panel = compose(PrimaryTab::Inflation, SecondaryTab::Unemployment, &ds).remove(0);
        let rows = panel.rows.as_ref().unwrap();
        let line = LinePanel::new(panel.descriptor, rows, &theme);
        assert_eq!(line.y_bounds(&line.series()), [0.0, 6.0]);
    }

    #[test]
    fn test_empty_rows_render() {
        let theme = Theme::default();
        let panel = unemployment();
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        LinePanel::new(panel.descriptor, &[], &theme).render(area, &mut buf);
    }
}

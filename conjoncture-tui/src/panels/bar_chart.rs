//! Bar charts: single, grouped, stacked and horizontal variants.
//!
//! Bar heights are `|value| × 10` so one-decimal data keeps its resolution;
//! the printed value keeps the sign. Stacked channels are drawn side by side
//! inside their group; the legend names the group and says so.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Paragraph, Widget},
};

use conjoncture_core::panels::{Channel, Mark, Orientation, PanelDescriptor};
use conjoncture_core::FrameRow;

use super::{channels_of, legend_line, truncate};
use crate::theme::Theme;

const GROUP_GAP: u16 = 1;

pub struct BarPanel<'a> {
    descriptor: &'static PanelDescriptor,
    rows: &'a [FrameRow],
    channels: Vec<(usize, &'static Channel)>,
    theme: &'a Theme,
}

pub(crate) fn bar_height(value: f64) -> u64 {
    (value.abs() * 10.0).round() as u64
}

impl<'a> BarPanel<'a> {
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

    /// Only the bar-marked channels, for the upper half of a composed chart.
    pub fn bars_only(mut self) -> Self {
        self.channels = channels_of(self.descriptor, Some(Mark::Bar));
        self
    }

    fn horizontal(&self) -> bool {
        self.descriptor.encoding.orientation == Orientation::Horizontal
    }

    fn stack_name(&self) -> Option<&'static str> {
        self.channels.iter().find_map(|(_, c)| c.stack)
    }

    fn bar_color(&self, row: &FrameRow, channel: &Channel) -> Color {
        self.theme
            .mark_color(row.mark, self.theme.series_color(channel.color))
    }

    fn bar(&self, row: &FrameRow, idx: usize, channel: &Channel) -> Option<Bar<'static>> {
        let value = *row.values.get(idx)?;
        Some(
            Bar::default()
                .value(bar_height(value))
                .text_value(channel.format.format(value))
                .style(Style::default().fg(self.bar_color(row, channel))),
        )
    }

    /// One group per row when several channels share the axis, else one group.
    fn groups(&self, label_width: usize) -> Vec<BarGroup<'static>> {
        if let [(idx, channel)] = self.channels.as_slice() {
            let bars: Vec<Bar> = self
                .rows
                .iter()
                .filter_map(|row| {
                    self.bar(row, *idx, channel)
                        .map(|b| b.label(Line::from(truncate(&row.label, label_width))))
                })
                .collect();
            return vec![BarGroup::default().bars(&bars)];
        }

        self.rows
            .iter()
            .map(|row| {
                let bars: Vec<Bar> = self
                    .channels
                    .iter()
                    .filter_map(|(idx, channel)| self.bar(row, *idx, channel))
                    .collect();
                BarGroup::default()
                    .label(Line::from(truncate(&row.label, label_width)))
                    .bars(&bars)
            })
            .collect()
    }

    fn bar_width(&self, area: Rect) -> u16 {
        if self.horizontal() {
            return 1;
        }
        let per_group = self.channels.len().max(1) as u16;
        let groups = if per_group > 1 { self.rows.len().max(1) as u16 } else { 1 };
        let bars = if per_group > 1 { per_group * groups } else { self.rows.len().max(1) as u16 };
        let available = area
            .width
            .saturating_sub(GROUP_GAP * groups.saturating_sub(1));
        (available / bars).saturating_sub(1).clamp(1, 9)
    }
}

impl<'a> Widget for BarPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (chart_area, legend_area) = if self.channels.len() > 1 && area.height > 4 {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(3), Constraint::Length(1)])
                .split(area);
            (chunks[0], Some(chunks[1]))
        } else {
            (area, None)
        };

        let horizontal = self.horizontal();
        let width = self.bar_width(chart_area);
        let label_width = if horizontal {
            14
        } else if self.channels.len() > 1 {
            usize::from(width) * self.channels.len()
        } else {
            usize::from(width)
        };

        let chart = BarChart::default()
            .direction(if horizontal {
                Direction::Horizontal
            } else {
                Direction::Vertical
            })
            .bar_width(width)
            .bar_gap(if horizontal { 0 } else { 1 })
            .group_gap(GROUP_GAP)
            .value_style(
                Style::default()
                    .fg(self.theme.text_primary)
                    .add_modifier(Modifier::BOLD),
            )
            .label_style(Style::default().fg(self.theme.text_secondary));
        let chart = self
            .groups(label_width)
            .into_iter()
            .fold(chart, |chart, group| chart.data(group));
        chart.render(chart_area, buf);

        if let Some(legend_area) = legend_area {
            let suffix = match self.stack_name() {
                Some(stack) => format!("({stack}, côte à côte)"),
                None => String::new(),
            };
            Paragraph::new(legend_line(&self.channels, self.theme, &suffix))
                .render(legend_area, buf);
        }
    }
}

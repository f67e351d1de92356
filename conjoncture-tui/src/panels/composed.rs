//! Composed chart: bar channels on top, line channels below, same categories.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Widget,
};

use conjoncture_core::panels::PanelDescriptor;
use conjoncture_core::FrameRow;

use super::{BarPanel, LinePanel};
use crate::theme::Theme;

pub struct ComposedChart<'a> {
    descriptor: &'static PanelDescriptor,
    rows: &'a [FrameRow],
    theme: &'a Theme,
}

impl<'a> ComposedChart<'a> {
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
}

impl<'a> Widget for ComposedChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        BarPanel::new(self.descriptor, self.rows, self.theme)
            .bars_only()
            .render(chunks[0], buf);
        LinePanel::new(self.descriptor, self.rows, self.theme)
            .lines_only()
            .render(chunks[1], buf);
    }
}

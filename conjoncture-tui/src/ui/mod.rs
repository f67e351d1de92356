//! Top-level layout: header, tab bars, panel grid and status bar.

pub mod header;
pub mod help;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::app::{AppState, Overlay};
use crate::panels::PanelView;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background)),
        f.area(),
    );

    let tabs_height = if app.nav.sub_tabs_visible() { 2 } else { 1 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header::HEIGHT),
            Constraint::Length(tabs_height),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    header::render(f, chunks[0], app);
    header::render_tabs(f, chunks[1], app);

    let panels = app.panels();
    let areas = panel_areas(chunks[2], panels.len());
    for (panel, area) in panels.iter().zip(areas) {
        f.render_widget(PanelView::new(panel, &app.theme), area);
    }

    status_bar::render(f, chunks[3], app);

    if app.overlay == Overlay::Help {
        help::render(f, centered_rect(70, 80, chunks[2]), app);
    }
}

/// Grid for `n` panels: one full-width, two side by side, three as a wide
/// panel over two, four as a 2x2 grid.
pub fn panel_areas(area: Rect, n: usize) -> Vec<Rect> {
    let halves = |r: Rect, dir: Direction| {
        Layout::default()
            .direction(dir)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(r)
    };
    match n {
        0 => Vec::new(),
        1 => vec![area],
        2 => halves(area, Direction::Horizontal).to_vec(),
        3 => {
            let rows = halves(area, Direction::Vertical);
            let bottom = halves(rows[1], Direction::Horizontal);
            vec![rows[0], bottom[0], bottom[1]]
        }
        _ => {
            let rows = halves(area, Direction::Vertical);
            let mut areas = halves(rows[0], Direction::Horizontal).to_vec();
            areas.extend(halves(rows[1], Direction::Horizontal).iter());
            areas.truncate(n);
            areas
        }
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

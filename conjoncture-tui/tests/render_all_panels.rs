//! Every panel of every tab renders through the framed panel widget.

use conjoncture_core::{compose, Dataset, PrimaryTab, SecondaryTab, SeriesId};
use conjoncture_tui::panels::PanelView;
use conjoncture_tui::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

fn text(buf: &Buffer) -> String {
    let mut out = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            out.push_str(buf.cell((x, y)).map_or(" ", |c| c.symbol()));
        }
        out.push('\n');
    }
    out
}

fn render(primary: PrimaryTab, secondary: SecondaryTab, ds: &Dataset) -> Vec<String> {
    let theme = Theme::default();
    compose(primary, secondary, ds)
        .iter()
        .map(|panel| {
            let area = Rect::new(0, 0, 80, 24);
            let mut buf = Buffer::empty(area);
            PanelView::new(panel, &theme).render(area, &mut buf);
            text(&buf)
        })
        .collect()
}

fn all_selections() -> Vec<(PrimaryTab, SecondaryTab)> {
    let mut out: Vec<_> = PrimaryTab::ALL
        .iter()
        .filter(|p| **p != PrimaryTab::Employment)
        .map(|p| (*p, SecondaryTab::default()))
        .collect();
    out.extend(SecondaryTab::ALL.iter().map(|s| (PrimaryTab::Employment, *s)));
    out
}

#[test]
fn every_panel_shows_its_title() {
    let ds = Dataset::bundled();
    for (primary, secondary) in all_selections() {
        let panels = compose(primary, secondary, &ds);
        let rendered = render(primary, secondary, &ds);
        for (panel, screen) in panels.iter().zip(&rendered) {
            assert!(
                screen.contains(panel.title()),
                "{primary}/{secondary}: title '{}' not drawn",
                panel.title()
            );
            assert!(!screen.contains("Données indisponibles"));
        }
    }
}

#[test]
fn tiny_areas_do_not_panic() {
    let ds = Dataset::bundled();
    let theme = Theme::default();
    for (primary, secondary) in all_selections() {
        for panel in compose(primary, secondary, &ds) {
            for (w, h) in [(1, 1), (4, 3), (12, 5), (30, 8)] {
                let area = Rect::new(0, 0, w, h);
                let mut buf = Buffer::empty(area);
                PanelView::new(&panel, &theme).render(area, &mut buf);
            }
        }
    }
}

#[test]
fn recruitment_table_shows_badges() {
    let ds = Dataset::bundled();
    let screens = render(PrimaryTab::Employment, SecondaryTab::Recruitment, &ds);
    let table = screens.iter().find(|s| s.contains("Aides-soignants")).unwrap();
    assert!(table.contains("86.5%"));
    assert!(table.contains("109 340"));
}

#[test]
fn missing_series_render_placeholders() {
    for id in SeriesId::ALL {
        let ds = Dataset::bundled().without_series(id);
        for (primary, secondary) in all_selections() {
            let panels = compose(primary, secondary, &ds);
            let screens = render(primary, secondary, &ds);
            for (panel, screen) in panels.iter().zip(&screens) {
                assert_eq!(
                    screen.contains("Données indisponibles"),
                    !panel.is_available(),
                    "{id} on {primary}/{secondary}"
                );
            }
        }
    }
}

//! End-to-end composition over the bundled dataset.

use conjoncture_core::derived::{DifficultyBand, RowMark, TrendCategory};
use conjoncture_core::panels::all_descriptors;
use conjoncture_core::{
    compose, ChartKind, DashboardError, Dataset, NavigationState, PanelId, PrimaryTab, SeriesId,
    SecondaryTab,
};

fn every_selection() -> impl Iterator<Item = (PrimaryTab, SecondaryTab)> {
    PrimaryTab::ALL
        .into_iter()
        .flat_map(|p| SecondaryTab::ALL.into_iter().map(move |s| (p, s)))
}

#[test]
fn every_selection_composes_available_panels() {
    let ds = Dataset::bundled();
    for (p, s) in every_selection() {
        let panels = compose(p, s, &ds);
        assert!(!panels.is_empty(), "{p}/{s}");
        for panel in &panels {
            let rows = panel.rows.as_ref().unwrap();
            assert!(!rows.is_empty(), "{:?}", panel.descriptor.id);
            for row in rows {
                assert_eq!(row.values.len(), panel.descriptor.encoding.channels.len());
            }
        }
    }
}

#[test]
fn row_counts_match_series_lengths() {
    let ds = Dataset::bundled();
    for (p, s) in every_selection() {
        for panel in compose(p, s, &ds) {
            let rows = panel.rows.unwrap();
            if panel.descriptor.id == PanelId::LatestContracts {
                assert_eq!(rows.len(), 4);
            } else {
                assert_eq!(rows.len(), ds.series_len(panel.descriptor.series));
            }
        }
    }
}

#[test]
fn employment_round_trip_restores_recruitment() {
    let ds = Dataset::bundled();
    let mut nav = NavigationState::default();
    nav.set_primary(PrimaryTab::Employment);
    nav.set_secondary(SecondaryTab::Recruitment);
    let before = nav.compose(&ds);
    nav.set_primary(PrimaryTab::Wages);
    assert_eq!(nav.compose(&ds).len(), 4);
    nav.set_primary(PrimaryTab::Employment);
    assert_eq!(nav.compose(&ds), before);
    assert_eq!(before[1].descriptor.kind, ChartKind::Table);
}

#[test]
fn sector_marks_follow_quarterly_sign() {
    let ds = Dataset::bundled();
    let panels = compose(PrimaryTab::Employment, SecondaryTab::Sectors, &ds);
    for panel in &panels {
        let rows = panel.rows.as_ref().unwrap();
        for (row, sector) in rows.iter().zip(&ds.emploi_secteurs) {
            let expected = if sector.evolution_trim < 0.0 {
                TrendCategory::Decline
            } else {
                TrendCategory::Growth
            };
            assert_eq!(row.mark, Some(RowMark::Trend(expected)), "{}", row.label);
        }
    }
    let declines = panels[0]
        .rows
        .as_ref()
        .unwrap()
        .iter()
        .filter(|r| r.mark == Some(RowMark::Trend(TrendCategory::Decline)))
        .count();
    assert_eq!(declines, 4);
}

#[test]
fn hiring_difficulty_bands() {
    let ds = Dataset::bundled();
    let panels = compose(PrimaryTab::Employment, SecondaryTab::Recruitment, &ds);
    let bands: Vec<Option<RowMark>> = panels[0]
        .rows
        .as_ref()
        .unwrap()
        .iter()
        .map(|r| r.mark)
        .collect();
    assert_eq!(bands[0], Some(RowMark::Difficulty(DifficultyBand::Red)));
    assert_eq!(bands[1], Some(RowMark::Difficulty(DifficultyBand::Orange)));
    assert_eq!(bands[2], Some(RowMark::Difficulty(DifficultyBand::Orange)));
    assert_eq!(bands[3], Some(RowMark::Difficulty(DifficultyBand::Yellow)));
}

/// Removing one series degrades exactly the panels that read it.
#[test]
fn missing_series_is_isolated() {
    for missing in SeriesId::ALL {
        let ds = Dataset::bundled().without_series(missing);
        for (p, s) in every_selection() {
            for panel in compose(p, s, &ds) {
                if panel.descriptor.series == missing {
                    assert_eq!(panel.rows, Err(DashboardError::MissingSeries(missing)));
                } else {
                    let id = panel.descriptor.id;
                    assert!(panel.rows.is_ok(), "{id:?} broke without {missing}");
                }
            }
        }
    }
}

#[test]
fn every_series_backs_some_panel() {
    for id in SeriesId::ALL {
        assert!(all_descriptors().any(|d| d.series == id), "{id} unused");
    }
}

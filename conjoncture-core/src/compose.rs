//! View composer: a tab selection plus the dataset becomes a list of panels.
//!
//! Composition is a pure function of its inputs. A panel whose series is
//! absent carries the error in place of its rows; the other panels of the
//! same tab are unaffected.

use serde::{Serialize, Serializer};

use crate::dataset::{Dataset, SeriesId, SeriesRecord};
use crate::derived::{difficulty_band, other_contracts_share, trend_category, RowMark};
use crate::error::DashboardError;
use crate::navigation::{PrimaryTab, SecondaryTab};
use crate::panels::{panel_descriptors, ColorRule, PanelDescriptor, Projection};

/// One row handed to a renderer: a category label and one value per channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameRow {
    pub label: String,
    pub values: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark: Option<RowMark>,
}

/// A descriptor together with its projected rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComposedPanel {
    pub descriptor: &'static PanelDescriptor,
    #[serde(serialize_with = "serialize_rows")]
    pub rows: Result<Vec<FrameRow>, DashboardError>,
}

impl ComposedPanel {
    pub fn title(&self) -> &'static str {
        self.descriptor.title
    }

    pub fn is_available(&self) -> bool {
        self.rows.is_ok()
    }
}

fn serialize_rows<S: Serializer>(
    rows: &Result<Vec<FrameRow>, DashboardError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match rows {
        Ok(rows) => rows.serialize(serializer),
        Err(err) => serializer.collect_map([("error", err.to_string())]),
    }
}

/// Panels for the current selection, in display order.
pub fn compose(
    primary: PrimaryTab,
    secondary: SecondaryTab,
    dataset: &Dataset,
) -> Vec<ComposedPanel> {
    panel_descriptors(primary, secondary)
        .iter()
        .map(|descriptor| ComposedPanel {
            descriptor,
            rows: project(descriptor, dataset),
        })
        .collect()
}

/// Project one descriptor's series into rows.
pub fn project(desc: &PanelDescriptor, dataset: &Dataset) -> Result<Vec<FrameRow>, DashboardError> {
    let records = dataset.series(desc.series);
    if records.is_empty() {
        tracing::debug!(series = %desc.series, panel = ?desc.id, "series missing, panel degraded");
        return Err(DashboardError::MissingSeries(desc.series));
    }

    match desc.projection {
        Projection::Fields => records
            .iter()
            .map(|record| field_row(desc, *record))
            .collect(),
        Projection::LatestContractBreakdown => latest_contract_breakdown(desc.series, &records),
    }
}

fn read(
    series: SeriesId,
    record: &dyn SeriesRecord,
    field: &'static str,
) -> Result<f64, DashboardError> {
    record
        .value(field)
        .ok_or(DashboardError::MissingField { series, field })
}

fn field_row(
    desc: &PanelDescriptor,
    record: &dyn SeriesRecord,
) -> Result<FrameRow, DashboardError> {
    let values = desc
        .encoding
        .channels
        .iter()
        .map(|channel| read(desc.series, record, channel.field))
        .collect::<Result<Vec<_>, _>>()?;

    let mark = match desc.encoding.color_rule {
        None => None,
        Some(ColorRule::TrendSign(field)) => {
            Some(RowMark::Trend(trend_category(read(desc.series, record, field)?)))
        }
        Some(ColorRule::DifficultyBands(field)) => {
            Some(RowMark::Difficulty(difficulty_band(read(desc.series, record, field)?)))
        }
    };

    Ok(FrameRow {
        label: record.label().to_string(),
        values,
        mark,
    })
}

fn latest_contract_breakdown(
    series: SeriesId,
    records: &[&dyn SeriesRecord],
) -> Result<Vec<FrameRow>, DashboardError> {
    let latest = *records.last().ok_or(DashboardError::MissingSeries(series))?;
    let cdi = read(series, latest, "cdi")?;
    let cdd = read(series, latest, "cdd")?;
    let interim = read(series, latest, "interim")?;

    let shares = [
        ("CDI", cdi),
        ("CDD", cdd),
        ("Intérim", interim),
        ("Autres", other_contracts_share(cdi, cdd, interim)),
    ];
    Ok(shares
        .into_iter()
        .map(|(label, share)| FrameRow {
            label: label.to_string(),
            values: vec![share],
            mark: None,
        })
        .collect())
}

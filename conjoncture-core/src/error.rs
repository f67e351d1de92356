//! Error taxonomy for navigation and panel composition.

use thiserror::Error;

use crate::dataset::SeriesId;

/// Recoverable conditions raised by the core.
///
/// None of these are fatal: navigation errors leave the state untouched and
/// composition errors are carried inside the affected panel only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    /// A navigation setter received a value outside its enumerated set.
    #[error("invalid {kind} selection '{value}'")]
    InvalidSelection { kind: &'static str, value: String },

    /// The dataset has no records for a series a panel needs.
    #[error("series '{0}' is missing from the dataset")]
    MissingSeries(SeriesId),

    /// A panel channel names a field the series' records do not carry.
    #[error("series '{series}' has no field '{field}'")]
    MissingField { series: SeriesId, field: &'static str },
}

impl DashboardError {
    pub fn invalid_selection(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidSelection {
            kind,
            value: value.into(),
        }
    }
}

//! Derived values and row classification.

use serde::{Deserialize, Serialize};

/// Hiring-difficulty badge colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyBand {
    Red,
    Orange,
    Yellow,
}

impl DifficultyBand {
    pub fn label(self) -> &'static str {
        match self {
            DifficultyBand::Red => "Très forte",
            DifficultyBand::Orange => "Forte",
            DifficultyBand::Yellow => "Modérée",
        }
    }
}

/// Sign of a change: category A (growth) or B (decline).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendCategory {
    Growth,
    Decline,
}

/// Per-row highlight attached by a panel's colour rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RowMark {
    Trend(TrendCategory),
    Difficulty(DifficultyBand),
}

/// ≥ 80 red, ≥ 70 orange, anything lower yellow.
pub fn difficulty_band(pct: f64) -> DifficultyBand {
    if pct >= 80.0 {
        DifficultyBand::Red
    } else if pct >= 70.0 {
        DifficultyBand::Orange
    } else {
        DifficultyBand::Yellow
    }
}

/// Zero counts as growth.
pub fn trend_category(evolution: f64) -> TrendCategory {
    if evolution < 0.0 {
        TrendCategory::Decline
    } else {
        TrendCategory::Growth
    }
}

/// Share of employment outside CDI, CDD and temporary work, to one decimal.
pub fn other_contracts_share(cdi: f64, cdd: f64, interim: f64) -> f64 {
    round1(100.0 - cdi - cdd - interim)
}

/// Compound price growth over a run of yearly rates (%), to one decimal.
pub fn cumulative_inflation(yearly_rates: impl IntoIterator<Item = f64>) -> f64 {
    let factor = yearly_rates
        .into_iter()
        .fold(1.0, |acc, rate| acc * (1.0 + rate / 100.0));
    round1((factor - 1.0) * 100.0)
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_contracts_for_latest_mix() {
        assert_eq!(other_contracts_share(75.3, 8.0, 1.6), 15.1);
    }

    #[test]
    fn other_contracts_can_be_zero() {
        assert_eq!(other_contracts_share(90.0, 8.0, 2.0), 0.0);
    }

    #[test]
    fn difficulty_band_thresholds() {
        assert_eq!(difficulty_band(80.0), DifficultyBand::Red);
        assert_eq!(difficulty_band(95.5), DifficultyBand::Red);
        assert_eq!(difficulty_band(79.0), DifficultyBand::Orange);
        assert_eq!(difficulty_band(79.99), DifficultyBand::Orange);
        assert_eq!(difficulty_band(70.0), DifficultyBand::Orange);
        assert_eq!(difficulty_band(69.0), DifficultyBand::Yellow);
        assert_eq!(difficulty_band(0.0), DifficultyBand::Yellow);
    }

    #[test]
    fn trend_category_sign() {
        assert_eq!(trend_category(-0.1), TrendCategory::Decline);
        assert_eq!(trend_category(0.0), TrendCategory::Growth);
        assert_eq!(trend_category(0.4), TrendCategory::Growth);
    }

    #[test]
    fn cumulative_inflation_compounds() {
        assert_eq!(cumulative_inflation([10.0, 10.0]), 21.0);
        assert_eq!(cumulative_inflation(std::iter::empty()), 0.0);
        let since_2020 = cumulative_inflation([0.5, 1.6, 5.2, 4.9, 2.0, 0.9]);
        assert!((since_2020 - 16.0).abs() < 0.05, "got {since_2020}");
    }

    #[test]
    fn row_mark_serializes_tagged() {
        let json = serde_json::to_string(&RowMark::Difficulty(DifficultyBand::Red)).unwrap();
        assert_eq!(json, r#"{"kind":"difficulty","value":"red"}"#);
    }
}

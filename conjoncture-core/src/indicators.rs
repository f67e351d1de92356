//! Headline figures pulled from the latest point of each series.

use serde::Serialize;

use crate::dataset::Dataset;
use crate::derived::{cumulative_inflation, round1};
use crate::format::ValueFormat;

/// A value together with the period it was observed in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    pub period: String,
    pub value: f64,
}

/// Headline indicators shown in the header strip, the CLI and the brief.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyIndicators {
    pub last_updated: String,
    pub unemployment: Option<Observation>,
    pub youth_unemployment: Option<Observation>,
    pub inflation: Option<Observation>,
    /// Compound inflation over the whole yearly series (%).
    pub cumulative_inflation: Option<f64>,
    /// Base-wage growth over the same years (%).
    pub cumulative_base_wages: Option<f64>,
    pub smic_net: f64,
    pub smic_gross: f64,
    pub smic_hourly: f64,
    pub smic_since_2020: f64,
    pub smic_effective: String,
    pub gender_pay_gap: Option<Observation>,
}

impl KeyIndicators {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let last_unemployment = dataset.chomage.last();
        let years = &dataset.inflation_salaires;
        let (cumulative_inflation, cumulative_base_wages) = if years.is_empty() {
            (None, None)
        } else {
            (
                Some(cumulative_inflation(years.iter().map(|y| y.inflation))),
                Some(cumulative_inflation(years.iter().map(|y| y.salaires_base))),
            )
        };

        Self {
            last_updated: dataset.last_updated.clone(),
            unemployment: last_unemployment.map(|p| Observation {
                period: p.trimestre.clone(),
                value: p.taux,
            }),
            youth_unemployment: last_unemployment.map(|p| Observation {
                period: p.trimestre.clone(),
                value: p.jeunes,
            }),
            inflation: years.last().map(|y| Observation {
                period: y.annee.clone(),
                value: y.inflation,
            }),
            cumulative_inflation,
            cumulative_base_wages,
            smic_net: dataset.smic.montant_net,
            smic_gross: dataset.smic.montant_brut,
            smic_hourly: dataset.smic.taux_horaire,
            smic_since_2020: dataset.smic.evolution_depuis_2020,
            smic_effective: dataset.smic.date_vigueur.clone(),
            gender_pay_gap: dataset.ecart_hf.last().map(|g| Observation {
                period: g.annee.clone(),
                value: g.ecart,
            }),
        }
    }

    /// Minimum-wage growth since 2020 net of cumulative inflation, in points.
    pub fn smic_real_gain(&self) -> Option<f64> {
        self.cumulative_inflation
            .map(|inflation| round1(self.smic_since_2020 - inflation))
    }

    /// `(label, formatted value)` pairs in display order. Absent series are skipped.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = Vec::with_capacity(8);
        if let Some(obs) = &self.unemployment {
            let value = ValueFormat::Percent.format(obs.value);
            rows.push(("Chômage", format!("{} ({})", value, obs.period)));
        }
        if let Some(obs) = &self.youth_unemployment {
            rows.push(("Chômage 15-24 ans", ValueFormat::Percent.format(obs.value)));
        }
        if let Some(obs) = &self.inflation {
            let value = ValueFormat::Percent.format(obs.value);
            rows.push(("Inflation", format!("{} ({})", value, obs.period)));
        }
        rows.push(("SMIC net", ValueFormat::Euro.format(self.smic_net)));
        rows.push(("SMIC brut", ValueFormat::Euro.format(self.smic_gross)));
        rows.push(("SMIC horaire", ValueFormat::Euro.format(self.smic_hourly)));
        rows.push(("SMIC depuis 2020", ValueFormat::SignedPercent.format(self.smic_since_2020)));
        if let Some(cumulative) = self.cumulative_inflation {
            rows.push(("Inflation cumulée", ValueFormat::Percent.format(cumulative)));
        }
        rows
    }
}

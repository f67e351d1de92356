//! Bundled indicator dataset.
//!
//! Every series is a `Vec` of small records whose field names are the data
//! keys used by the panel table (`annee`, `taux`, `evolution_trim`, ...).
//! The [`SeriesRecord`] trait erases the record type so the composer can
//! read any series through one interface.

mod bundled;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Read access to one record of a series, by data key.
pub trait SeriesRecord {
    /// Category or period shown on the x axis (or first table column).
    fn label(&self) -> &str;

    /// Numeric value of `field`, or `None` if the record has no such field.
    fn value(&self, field: &str) -> Option<f64>;
}

macro_rules! series_record {
    ($ty:ty, label: $label:ident, fields: [$($field:ident),* $(,)?]) => {
        impl SeriesRecord for $ty {
            fn label(&self) -> &str {
                &self.$label
            }

            fn value(&self, field: &str) -> Option<f64> {
                match field {
                    $(stringify!($field) => Some(f64::from(self.$field)),)*
                    _ => None,
                }
            }
        }
    };
}

/// Yearly inflation against minimum-wage and base-wage growth (%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InflationWagePoint {
    pub annee: String,
    pub inflation: f64,
    pub smic: f64,
    pub salaires_base: f64,
}
series_record!(InflationWagePoint, label: annee, fields: [inflation, smic, salaires_base]);

/// Purchasing-power comparison, base 100 at the first period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchasingPowerPoint {
    pub periode: String,
    pub smic: f64,
    pub salaires: f64,
    pub prix: f64,
}
series_record!(PurchasingPowerPoint, label: periode, fields: [smic, salaires, prix]);

/// Share of employees paid the minimum wage (%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimumWageSharePoint {
    pub annee: String,
    pub part: f64,
}
series_record!(MinimumWageSharePoint, label: annee, fields: [part]);

/// Median net monthly wage (€) and its yearly change (%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedianWagePoint {
    pub annee: String,
    pub median: f64,
    pub evolution: f64,
}
series_record!(MedianWagePoint, label: annee, fields: [median, evolution]);

/// Women/men median pay gap (%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenderPayGapPoint {
    pub annee: String,
    pub ecart: f64,
}
series_record!(GenderPayGapPoint, label: annee, fields: [ecart]);

/// Median net monthly wage by sector (€) and yearly change (%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorWage {
    pub secteur: String,
    pub salaire: f64,
    pub evolution: f64,
}
series_record!(SectorWage, label: secteur, fields: [salaire, evolution]);

/// Value-sharing bonus: share of beneficiaries (%) and average amount (€).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueSharingBonusPoint {
    pub annee: String,
    pub beneficiaires: f64,
    pub montant_moyen: f64,
}
series_record!(ValueSharingBonusPoint, label: annee, fields: [beneficiaires, montant_moyen]);

/// Year-on-year price change by consumption category (%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceCategory {
    pub poste: String,
    pub val2022: f64,
    pub val2023: f64,
    pub val2024: f64,
}
series_record!(PriceCategory, label: poste, fields: [val2022, val2023, val2024]);

/// ILO unemployment rate, overall and for 15-24 year olds (%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnemploymentPoint {
    pub trimestre: String,
    pub taux: f64,
    pub jeunes: f64,
}
series_record!(UnemploymentPoint, label: trimestre, fields: [taux, jeunes]);

/// Employment rate of seniors (%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeniorEmploymentPoint {
    pub annee: String,
    pub taux_55_64: f64,
    pub taux_60_64: f64,
}
series_record!(SeniorEmploymentPoint, label: annee, fields: [taux_55_64, taux_60_64]);

/// Share of employment by contract type (%). The remainder is "other".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractMixPoint {
    pub annee: String,
    pub cdi: f64,
    pub cdd: f64,
    pub interim: f64,
}
series_record!(ContractMixPoint, label: annee, fields: [cdi, cdd, interim]);

/// Salaried employment by sector (thousands) and quarterly change (%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorEmployment {
    pub secteur: String,
    pub effectifs: f64,
    pub evolution_trim: f64,
}
series_record!(SectorEmployment, label: secteur, fields: [effectifs, evolution_trim]);

/// Share of employers reporting hiring difficulties, by sector (%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HiringDifficulty {
    pub secteur: String,
    pub difficulte: f64,
}
series_record!(HiringDifficulty, label: secteur, fields: [difficulte]);

/// Occupation ranked by hiring difficulty (%) with its number of hiring projects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupationTension {
    pub metier: String,
    pub tension: f64,
    pub projets: u32,
}
series_record!(OccupationTension, label: metier, fields: [tension, projets]);

/// Quarterly job creations and destructions (thousands).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobFlowPoint {
    pub trimestre: String,
    pub creations: f64,
    pub destructions: f64,
    pub solde: f64,
}
series_record!(JobFlowPoint, label: trimestre, fields: [creations, destructions, solde]);

/// Statutory minimum-wage facts shown in the key indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimumWage {
    pub montant_brut: f64,
    pub montant_net: f64,
    pub taux_horaire: f64,
    pub date_vigueur: String,
    pub evolution_depuis_2020: f64,
}

/// Name of a series inside [`Dataset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesId {
    InflationWages,
    PurchasingPowerIndex,
    MinimumWageShare,
    MedianWage,
    GenderPayGap,
    SectorWages,
    ValueSharingBonus,
    PriceBreakdown,
    Unemployment,
    SeniorEmployment,
    ContractMix,
    SectorEmployment,
    HiringDifficulty,
    OccupationTension,
    JobFlows,
}

impl SeriesId {
    pub const ALL: [SeriesId; 15] = [
        SeriesId::InflationWages,
        SeriesId::PurchasingPowerIndex,
        SeriesId::MinimumWageShare,
        SeriesId::MedianWage,
        SeriesId::GenderPayGap,
        SeriesId::SectorWages,
        SeriesId::ValueSharingBonus,
        SeriesId::PriceBreakdown,
        SeriesId::Unemployment,
        SeriesId::SeniorEmployment,
        SeriesId::ContractMix,
        SeriesId::SectorEmployment,
        SeriesId::HiringDifficulty,
        SeriesId::OccupationTension,
        SeriesId::JobFlows,
    ];

    pub fn id(self) -> &'static str {
        match self {
            SeriesId::InflationWages => "inflation_wages",
            SeriesId::PurchasingPowerIndex => "purchasing_power_index",
            SeriesId::MinimumWageShare => "minimum_wage_share",
            SeriesId::MedianWage => "median_wage",
            SeriesId::GenderPayGap => "gender_pay_gap",
            SeriesId::SectorWages => "sector_wages",
            SeriesId::ValueSharingBonus => "value_sharing_bonus",
            SeriesId::PriceBreakdown => "price_breakdown",
            SeriesId::Unemployment => "unemployment",
            SeriesId::SeniorEmployment => "senior_employment",
            SeriesId::ContractMix => "contract_mix",
            SeriesId::SectorEmployment => "sector_employment",
            SeriesId::HiringDifficulty => "hiring_difficulty",
            SeriesId::OccupationTension => "occupation_tension",
            SeriesId::JobFlows => "job_flows",
        }
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The complete indicator dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Publication date, displayed verbatim in the header.
    pub last_updated: String,
    pub sources: Vec<String>,
    pub smic: MinimumWage,
    pub inflation_salaires: Vec<InflationWagePoint>,
    pub pouvoir_achat: Vec<PurchasingPowerPoint>,
    pub part_smic: Vec<MinimumWageSharePoint>,
    pub salaire_median: Vec<MedianWagePoint>,
    pub ecart_hf: Vec<GenderPayGapPoint>,
    pub salaires_secteurs: Vec<SectorWage>,
    pub ppv: Vec<ValueSharingBonusPoint>,
    pub inflation_detail: Vec<PriceCategory>,
    pub chomage: Vec<UnemploymentPoint>,
    pub emploi_seniors: Vec<SeniorEmploymentPoint>,
    pub types_contrats: Vec<ContractMixPoint>,
    pub emploi_secteurs: Vec<SectorEmployment>,
    pub difficultes_recrutement: Vec<HiringDifficulty>,
    pub metiers_tension: Vec<OccupationTension>,
    pub creations_destructions: Vec<JobFlowPoint>,
}

fn erase<T: SeriesRecord>(records: &[T]) -> Vec<&dyn SeriesRecord> {
    records.iter().map(|r| r as &dyn SeriesRecord).collect()
}

impl Dataset {
    /// The dataset compiled into the binary.
    pub fn bundled() -> Self {
        bundled::dataset()
    }

    /// Records of a series, in display order. Empty if the series is absent.
    pub fn series(&self, id: SeriesId) -> Vec<&dyn SeriesRecord> {
        match id {
            SeriesId::InflationWages => erase(&self.inflation_salaires),
            SeriesId::PurchasingPowerIndex => erase(&self.pouvoir_achat),
            SeriesId::MinimumWageShare => erase(&self.part_smic),
            SeriesId::MedianWage => erase(&self.salaire_median),
            SeriesId::GenderPayGap => erase(&self.ecart_hf),
            SeriesId::SectorWages => erase(&self.salaires_secteurs),
            SeriesId::ValueSharingBonus => erase(&self.ppv),
            SeriesId::PriceBreakdown => erase(&self.inflation_detail),
            SeriesId::Unemployment => erase(&self.chomage),
            SeriesId::SeniorEmployment => erase(&self.emploi_seniors),
            SeriesId::ContractMix => erase(&self.types_contrats),
            SeriesId::SectorEmployment => erase(&self.emploi_secteurs),
            SeriesId::HiringDifficulty => erase(&self.difficultes_recrutement),
            SeriesId::OccupationTension => erase(&self.metiers_tension),
            SeriesId::JobFlows => erase(&self.creations_destructions),
        }
    }

    pub fn series_len(&self, id: SeriesId) -> usize {
        self.series(id).len()
    }

    /// A copy of this dataset with one series emptied.
    pub fn without_series(mut self, id: SeriesId) -> Self {
        match id {
            SeriesId::InflationWages => self.inflation_salaires.clear(),
            SeriesId::PurchasingPowerIndex => self.pouvoir_achat.clear(),
            SeriesId::MinimumWageShare => self.part_smic.clear(),
            SeriesId::MedianWage => self.salaire_median.clear(),
            SeriesId::GenderPayGap => self.ecart_hf.clear(),
            SeriesId::SectorWages => self.salaires_secteurs.clear(),
            SeriesId::ValueSharingBonus => self.ppv.clear(),
            SeriesId::PriceBreakdown => self.inflation_detail.clear(),
            SeriesId::Unemployment => self.chomage.clear(),
            SeriesId::SeniorEmployment => self.emploi_seniors.clear(),
            SeriesId::ContractMix => self.types_contrats.clear(),
            SeriesId::SectorEmployment => self.emploi_secteurs.clear(),
            SeriesId::HiringDifficulty => self.difficultes_recrutement.clear(),
            SeriesId::OccupationTension => self.metiers_tension.clear(),
            SeriesId::JobFlows => self.creations_destructions.clear(),
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dataset_has_every_series() {
        let ds = Dataset::bundled();
        for id in SeriesId::ALL {
            assert!(ds.series_len(id) > 0, "{id} is empty");
        }
    }

    #[test]
    fn last_updated_is_an_iso_date() {
        let ds = Dataset::bundled();
        assert!(chrono::NaiveDate::parse_from_str(&ds.last_updated, "%Y-%m-%d").is_ok());
    }

    #[test]
    fn record_values_are_read_by_key() {
        let ds = Dataset::bundled();
        let last = *ds.series(SeriesId::ContractMix).last().unwrap();
        assert_eq!(last.label(), "2024");
        assert_eq!(last.value("cdi"), Some(75.3));
        assert_eq!(last.value("cdd"), Some(8.0));
        assert_eq!(last.value("interim"), Some(1.6));
        assert_eq!(last.value("annee"), None);
    }

    #[test]
    fn integer_fields_widen_to_f64() {
        let ds = Dataset::bundled();
        let first = ds.series(SeriesId::OccupationTension)[0];
        assert_eq!(first.value("projets"), Some(f64::from(ds.metiers_tension[0].projets)));
    }

    #[test]
    fn constructed_points_keep_field_order() {
        let ds = Dataset::bundled();
        assert_eq!(ds.part_smic[4].annee, "2023");
        assert_eq!(ds.part_smic[4].part, 17.3);
        assert_eq!(ds.salaire_median[4].median, 2183.0);
        assert_eq!(ds.salaire_median[4].evolution, 4.4);
        assert_eq!(ds.ecart_hf.last().unwrap().ecart, 14.2);
        assert_eq!(ds.ppv[0].beneficiaires, 15.1);
        assert_eq!(ds.ppv[0].montant_moyen, 806.0);
        assert_eq!(ds.emploi_seniors[5].taux_55_64, 60.4);
        assert_eq!(ds.emploi_seniors[5].taux_60_64, 41.1);
    }

    #[test]
    fn without_series_empties_only_that_series() {
        let ds = Dataset::bundled().without_series(SeriesId::JobFlows);
        assert_eq!(ds.series_len(SeriesId::JobFlows), 0);
        assert!(ds.series_len(SeriesId::Unemployment) > 0);
    }

    #[test]
    fn series_ids_are_unique() {
        let mut ids: Vec<&str> = SeriesId::ALL.iter().map(|s| s.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SeriesId::ALL.len());
    }

    #[test]
    fn dataset_serializes_with_data_keys() {
        let json = serde_json::to_value(Dataset::bundled()).unwrap();
        assert!(json["emploi_secteurs"][0].get("evolution_trim").is_some());
        assert!(json["types_contrats"][0].get("interim").is_some());
    }
}

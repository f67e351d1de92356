//! Panel descriptors and the static tab → panel table.
//!
//! A descriptor says which series a panel projects, which chart kind draws
//! it, and how record fields map onto visual channels. Renderers only ever
//! see descriptors and projected rows, never the dataset itself.

use serde::Serialize;

use crate::dataset::SeriesId;
use crate::format::ValueFormat;
use crate::navigation::{PrimaryTab, SecondaryTab};

/// Chart family used to draw a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Bar,
    StackedBar,
    /// Bars and lines over the same x axis.
    Composed,
    Table,
}

/// How one channel is drawn inside a composed chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mark {
    Bar,
    Line,
}

/// Palette slot; renderers map these onto concrete colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesColor {
    Blue,
    Green,
    Red,
    Orange,
    Purple,
    Teal,
    Amber,
    Gray,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// Per-row colouring driven by one field of the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "rule", content = "field", rename_all = "snake_case")]
pub enum ColorRule {
    /// Negative values flagged as decline, others as growth.
    TrendSign(&'static str),
    /// Thresholded into red / orange / yellow badges.
    DifficultyBands(&'static str),
}

/// How records become rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Projection {
    /// One row per record, one value per channel field.
    Fields,
    /// Four rows for the latest contract period, the last one derived.
    LatestContractBreakdown,
}

/// One field mapped onto a visual channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Channel {
    pub field: &'static str,
    pub label: &'static str,
    pub mark: Mark,
    pub color: SeriesColor,
    pub format: ValueFormat,
    /// Stack group for stacked bars.
    pub stack: Option<&'static str>,
}

const fn bar(
    field: &'static str,
    label: &'static str,
    color: SeriesColor,
    format: ValueFormat,
) -> Channel {
    Channel {
        field,
        label,
        mark: Mark::Bar,
        color,
        format,
        stack: None,
    }
}

const fn line(
    field: &'static str,
    label: &'static str,
    color: SeriesColor,
    format: ValueFormat,
) -> Channel {
    Channel {
        field,
        label,
        mark: Mark::Line,
        color,
        format,
        stack: None,
    }
}

const fn stacked(field: &'static str, label: &'static str, color: SeriesColor) -> Channel {
    Channel {
        field,
        label,
        mark: Mark::Bar,
        color,
        format: ValueFormat::Percent,
        stack: Some("contrats"),
    }
}

/// Field-to-channel mapping plus axis hints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Encoding {
    /// Record key drawn on the category/x axis.
    pub x_key: &'static str,
    pub channels: &'static [Channel],
    /// Fixed value-axis bounds; `None` means fit to data.
    pub y_domain: Option<(f64, f64)>,
    pub orientation: Orientation,
    pub color_rule: Option<ColorRule>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelId {
    InflationVsWages,
    PurchasingPowerIndex,
    MinimumWageShare,
    MedianWage,
    GenderPayGap,
    SectorWages,
    ValueSharingBonus,
    AnnualInflation,
    PriceBreakdown,
    Unemployment,
    SeniorEmployment,
    ContractMix,
    LatestContracts,
    SectorHeadcount,
    SectorQuarterlyChange,
    HiringDifficulty,
    OccupationTension,
    JobFlows,
}

/// Static description of one panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanelDescriptor {
    pub id: PanelId,
    pub title: &'static str,
    pub kind: ChartKind,
    pub series: SeriesId,
    pub projection: Projection,
    pub encoding: Encoding,
    /// Reading note shown under the chart.
    pub note: Option<&'static str>,
}

use ChartKind::*;
use SeriesColor::*;
use ValueFormat::{Count, Euro, Index, Percent, SignedPercent, Thousands};

static PURCHASING_POWER: [PanelDescriptor; 3] = [
    PanelDescriptor {
        id: PanelId::InflationVsWages,
        title: "Inflation vs salaires",
        kind: Composed,
        series: SeriesId::InflationWages,
        projection: Projection::Fields,
        encoding: Encoding {
            x_key: "annee",
            channels: &[
                bar("smic", "SMIC", Blue, Percent),
                bar("salaires_base", "Salaires de base", Green, Percent),
                line("inflation", "Inflation", Red, Percent),
            ],
            y_domain: None,
            orientation: Orientation::Vertical,
            color_rule: None,
        },
        note: Some("Évolution annuelle moyenne en %"),
    },
    PanelDescriptor {
        id: PanelId::PurchasingPowerIndex,
        title: "Pouvoir d'achat cumulé (base 100 T4 2020)",
        kind: Line,
        series: SeriesId::PurchasingPowerIndex,
        projection: Projection::Fields,
        encoding: Encoding {
            x_key: "periode",
            channels: &[
                line("smic", "SMIC", Blue, Index),
                line("salaires", "Salaires", Green, Index),
                line("prix", "Prix", Red, Index),
            ],
            y_domain: Some((95.0, 120.0)),
            orientation: Orientation::Vertical,
            color_rule: None,
        },
        note: Some("Au-dessus de la courbe des prix, le pouvoir d'achat progresse"),
    },
    PanelDescriptor {
        id: PanelId::MinimumWageShare,
        title: "Part des salariés au SMIC",
        kind: Bar,
        series: SeriesId::MinimumWageShare,
        projection: Projection::Fields,
        encoding: Encoding {
            x_key: "annee",
            channels: &[bar("part", "Part", Purple, Percent)],
            y_domain: None,
            orientation: Orientation::Vertical,
            color_rule: None,
        },
        note: None,
    },
];

static WAGES: [PanelDescriptor; 4] = [
    PanelDescriptor {
        id: PanelId::MedianWage,
        title: "Salaire médian net mensuel",
        kind: Line,
        series: SeriesId::MedianWage,
        projection: Projection::Fields,
        encoding: Encoding {
            x_key: "annee",
            channels: &[line("median", "Médiane", Blue, Euro)],
            y_domain: None,
            orientation: Orientation::Vertical,
            color_rule: None,
        },
        note: None,
    },
    PanelDescriptor {
        id: PanelId::GenderPayGap,
        title: "Écart salarial femmes-hommes",
        kind: Bar,
        series: SeriesId::GenderPayGap,
        projection: Projection::Fields,
        encoding: Encoding {
            x_key: "annee",
            channels: &[bar("ecart", "Écart", Purple, Percent)],
            y_domain: None,
            orientation: Orientation::Vertical,
            color_rule: None,
        },
        note: Some("Écart de salaire médian, temps complet"),
    },
    PanelDescriptor {
        id: PanelId::SectorWages,
        title: "Salaire médian par secteur",
        kind: Bar,
        series: SeriesId::SectorWages,
        projection: Projection::Fields,
        encoding: Encoding {
            x_key: "secteur",
            channels: &[bar("salaire", "Salaire net", Teal, Euro)],
            y_domain: None,
            orientation: Orientation::Horizontal,
            color_rule: None,
        },
        note: None,
    },
    PanelDescriptor {
        id: PanelId::ValueSharingBonus,
        title: "Prime de partage de la valeur",
        kind: Composed,
        series: SeriesId::ValueSharingBonus,
        projection: Projection::Fields,
        encoding: Encoding {
            x_key: "annee",
            channels: &[
                bar("montant_moyen", "Montant moyen", Amber, Euro),
                line("beneficiaires", "Salariés bénéficiaires", Blue, Percent),
            ],
            y_domain: None,
            orientation: Orientation::Vertical,
            color_rule: None,
        },
        note: None,
    },
];

static INFLATION: [PanelDescriptor; 2] = [
    PanelDescriptor {
        id: PanelId::AnnualInflation,
        title: "Inflation annuelle",
        kind: Line,
        series: SeriesId::InflationWages,
        projection: Projection::Fields,
        encoding: Encoding {
            x_key: "annee",
            channels: &[line("inflation", "Inflation", Red, Percent)],
            y_domain: Some((0.0, 6.0)),
            orientation: Orientation::Vertical,
            color_rule: None,
        },
        note: Some("Glissement annuel moyen de l'indice des prix"),
    },
    PanelDescriptor {
        id: PanelId::PriceBreakdown,
        title: "Inflation par poste de consommation",
        kind: Bar,
        series: SeriesId::PriceBreakdown,
        projection: Projection::Fields,
        encoding: Encoding {
            x_key: "poste",
            channels: &[
                bar("val2022", "2022", Orange, Percent),
                bar("val2023", "2023", Red, Percent),
                bar("val2024", "2024", Blue, Percent),
            ],
            y_domain: None,
            orientation: Orientation::Vertical,
            color_rule: None,
        },
        note: None,
    },
];

static EMPLOYMENT_UNEMPLOYMENT: [PanelDescriptor; 1] = [PanelDescriptor {
    id: PanelId::Unemployment,
    title: "Taux de chômage (BIT)",
    kind: Line,
    series: SeriesId::Unemployment,
    projection: Projection::Fields,
    encoding: Encoding {
        x_key: "trimestre",
        channels: &[
            line("taux", "Ensemble", Blue, Percent),
            line("jeunes", "15-24 ans", Orange, Percent),
        ],
        y_domain: None,
        orientation: Orientation::Vertical,
        color_rule: None,
    },
    note: None,
}];

static EMPLOYMENT_SENIORS: [PanelDescriptor; 1] = [PanelDescriptor {
    id: PanelId::SeniorEmployment,
    title: "Taux d'emploi des seniors",
    kind: Line,
    series: SeriesId::SeniorEmployment,
    projection: Projection::Fields,
    encoding: Encoding {
        x_key: "annee",
        channels: &[
            line("taux_55_64", "55-64 ans", Teal, Percent),
            line("taux_60_64", "60-64 ans", Purple, Percent),
        ],
        y_domain: None,
        orientation: Orientation::Vertical,
        color_rule: None,
    },
    note: None,
}];

static EMPLOYMENT_CONTRACTS: [PanelDescriptor; 2] = [
    PanelDescriptor {
        id: PanelId::ContractMix,
        title: "Répartition de l'emploi par contrat",
        kind: StackedBar,
        series: SeriesId::ContractMix,
        projection: Projection::Fields,
        encoding: Encoding {
            x_key: "annee",
            channels: &[
                stacked("cdi", "CDI", Blue),
                stacked("cdd", "CDD", Orange),
                stacked("interim", "Intérim", Purple),
            ],
            y_domain: Some((0.0, 100.0)),
            orientation: Orientation::Vertical,
            color_rule: None,
        },
        note: None,
    },
    PanelDescriptor {
        id: PanelId::LatestContracts,
        title: "Dernière période",
        kind: Bar,
        series: SeriesId::ContractMix,
        projection: Projection::LatestContractBreakdown,
        encoding: Encoding {
            x_key: "type",
            channels: &[bar("part", "Part de l'emploi", Blue, Percent)],
            y_domain: Some((0.0, 100.0)),
            orientation: Orientation::Vertical,
            color_rule: None,
        },
        note: Some("Autres : non-salariés, apprentis et contrats aidés"),
    },
];

static EMPLOYMENT_SECTORS: [PanelDescriptor; 2] = [
    PanelDescriptor {
        id: PanelId::SectorHeadcount,
        title: "Emploi salarié par secteur",
        kind: Bar,
        series: SeriesId::SectorEmployment,
        projection: Projection::Fields,
        encoding: Encoding {
            x_key: "secteur",
            channels: &[bar("effectifs", "Effectifs", Teal, Thousands)],
            y_domain: None,
            orientation: Orientation::Horizontal,
            color_rule: Some(ColorRule::TrendSign("evolution_trim")),
        },
        note: Some("En rouge : secteurs en recul sur le trimestre"),
    },
    PanelDescriptor {
        id: PanelId::SectorQuarterlyChange,
        title: "Évolution trimestrielle",
        kind: Bar,
        series: SeriesId::SectorEmployment,
        projection: Projection::Fields,
        encoding: Encoding {
            x_key: "secteur",
            channels: &[bar("evolution_trim", "Évolution", Green, SignedPercent)],
            y_domain: None,
            orientation: Orientation::Horizontal,
            color_rule: Some(ColorRule::TrendSign("evolution_trim")),
        },
        note: None,
    },
];

static EMPLOYMENT_RECRUITMENT: [PanelDescriptor; 2] = [
    PanelDescriptor {
        id: PanelId::HiringDifficulty,
        title: "Difficultés de recrutement par secteur",
        kind: Bar,
        series: SeriesId::HiringDifficulty,
        projection: Projection::Fields,
        encoding: Encoding {
            x_key: "secteur",
            channels: &[bar("difficulte", "Projets jugés difficiles", Orange, Percent)],
            y_domain: Some((0.0, 100.0)),
            orientation: Orientation::Horizontal,
            color_rule: Some(ColorRule::DifficultyBands("difficulte")),
        },
        note: None,
    },
    PanelDescriptor {
        id: PanelId::OccupationTension,
        title: "Métiers en tension",
        kind: Table,
        series: SeriesId::OccupationTension,
        projection: Projection::Fields,
        encoding: Encoding {
            x_key: "metier",
            channels: &[
                bar("tension", "Difficulté", Red, Percent),
                bar("projets", "Projets", Gray, Count),
            ],
            y_domain: None,
            orientation: Orientation::Vertical,
            color_rule: Some(ColorRule::DifficultyBands("tension")),
        },
        note: Some("Part des projets de recrutement jugés difficiles"),
    },
];

static EMPLOYMENT_DYNAMICS: [PanelDescriptor; 1] = [PanelDescriptor {
    id: PanelId::JobFlows,
    title: "Créations et destructions d'emplois",
    kind: Composed,
    series: SeriesId::JobFlows,
    projection: Projection::Fields,
    encoding: Encoding {
        x_key: "trimestre",
        channels: &[
            bar("creations", "Créations", Green, Thousands),
            bar("destructions", "Destructions", Red, Thousands),
            line("solde", "Solde", Blue, Thousands),
        ],
        y_domain: None,
        orientation: Orientation::Vertical,
        color_rule: None,
    },
    note: None,
}];

/// The panels shown for a selection. `secondary` only matters under `Employment`.
pub fn panel_descriptors(
    primary: PrimaryTab,
    secondary: SecondaryTab,
) -> &'static [PanelDescriptor] {
    match primary {
        PrimaryTab::PurchasingPower => &PURCHASING_POWER,
        PrimaryTab::Wages => &WAGES,
        PrimaryTab::Inflation => &INFLATION,
        PrimaryTab::Employment => match secondary {
            SecondaryTab::Unemployment => &EMPLOYMENT_UNEMPLOYMENT,
            SecondaryTab::Seniors => &EMPLOYMENT_SENIORS,
            SecondaryTab::Contracts => &EMPLOYMENT_CONTRACTS,
            SecondaryTab::Sectors => &EMPLOYMENT_SECTORS,
            SecondaryTab::Recruitment => &EMPLOYMENT_RECRUITMENT,
            SecondaryTab::Dynamics => &EMPLOYMENT_DYNAMICS,
        },
    }
}

/// Every descriptor in the table, each once.
pub fn all_descriptors() -> impl Iterator<Item = &'static PanelDescriptor> {
    [
        &PURCHASING_POWER[..],
        &WAGES[..],
        &INFLATION[..],
        &EMPLOYMENT_UNEMPLOYMENT[..],
        &EMPLOYMENT_SENIORS[..],
        &EMPLOYMENT_CONTRACTS[..],
        &EMPLOYMENT_SECTORS[..],
        &EMPLOYMENT_RECRUITMENT[..],
        &EMPLOYMENT_DYNAMICS[..],
    ]
    .into_iter()
    .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    #[test]
    fn every_selection_has_panels() {
        for p in PrimaryTab::ALL {
            for s in SecondaryTab::ALL {
                assert!(!panel_descriptors(p, s).is_empty(), "{p}/{s}");
            }
        }
    }

    #[test]
    fn panel_ids_are_unique() {
        let ids: Vec<PanelId> = all_descriptors().map(|d| d.id).collect();
        let mut deduped = ids.clone();
        deduped.sort_by_key(|id| format!("{id:?}"));
        deduped.dedup();
        assert_eq!(ids.len(), deduped.len());
    }

    #[test]
    fn field_projections_reference_real_fields() {
        let ds = Dataset::bundled();
        for desc in all_descriptors().filter(|d| d.projection == Projection::Fields) {
            let records = ds.series(desc.series);
            let first = records[0];
            for channel in desc.encoding.channels {
                assert!(
                    first.value(channel.field).is_some(),
                    "{:?}: {} lacks {}",
                    desc.id,
                    desc.series,
                    channel.field
                );
            }
            if let Some(ColorRule::TrendSign(f) | ColorRule::DifficultyBands(f)) =
                desc.encoding.color_rule
            {
                assert!(first.value(f).is_some(), "{:?}: colour field {f}", desc.id);
            }
        }
    }

    #[test]
    fn composed_panels_mix_bars_and_lines() {
        for desc in all_descriptors().filter(|d| d.kind == ChartKind::Composed) {
            let marks: Vec<Mark> = desc.encoding.channels.iter().map(|c| c.mark).collect();
            assert!(marks.contains(&Mark::Bar) && marks.contains(&Mark::Line), "{:?}", desc.id);
        }
    }

    #[test]
    fn stacked_panels_share_a_stack_group() {
        for desc in all_descriptors().filter(|d| d.kind == ChartKind::StackedBar) {
            assert!(desc.encoding.channels.iter().all(|c| c.stack.is_some()));
        }
    }

    #[test]
    fn table_panel_has_badge_and_count_columns() {
        let table = all_descriptors()
            .find(|d| d.kind == ChartKind::Table)
            .unwrap();
        assert_eq!(table.encoding.channels.len(), 2);
        assert_eq!(table.encoding.channels[1].format, ValueFormat::Count);
        assert!(matches!(table.encoding.color_rule, Some(ColorRule::DifficultyBands(_))));
    }
}

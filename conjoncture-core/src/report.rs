//! Markdown negotiation brief.

use crate::dataset::Dataset;
use crate::derived::{difficulty_band, other_contracts_share};
use crate::format::ValueFormat;
use crate::indicators::KeyIndicators;

/// Renders the dataset as a markdown brief for wage negotiations.
pub struct MarkdownBrief;

impl MarkdownBrief {
    pub fn generate(&self, dataset: &Dataset) -> String {
        let kpi = KeyIndicators::from_dataset(dataset);
        let mut report = format!(
            "# Conjoncture - Dossier NAO\n\n\
Données au {}\n\n\
## Indicateurs clés\n\n\
| Indicateur | Valeur |\n\
|------------|--------|\n",
            dataset.last_updated
        );
        for (label, value) in kpi.rows() {
            report.push_str(&format!("| {} | {} |\n", label, value));
        }

        // Inflation
        if !dataset.inflation_salaires.is_empty() {
            report.push_str("\n## Inflation\n\n");
            report.push_str("| Année | Inflation | SMIC | Salaires de base |\n");
            report.push_str("|-------|-----------|------|------------------|\n");
            for year in &dataset.inflation_salaires {
                report.push_str(&format!(
                    "| {} | {:.1}% | {:+.1}% | {:+.1}% |\n",
                    year.annee, year.inflation, year.smic, year.salaires_base
                ));
            }
            if let (Some(first), Some(last), Some(cumulative)) = (
                dataset.inflation_salaires.first(),
                dataset.inflation_salaires.last(),
                kpi.cumulative_inflation,
            ) {
                report.push_str(&format!(
                    "\n**Inflation cumulée {}-{} : {:.1}%**\n",
                    first.annee, last.annee, cumulative
                ));
            }
        }

        // Wages
        report.push_str("\n## Salaires et pouvoir d'achat\n\n");
        report.push_str(&format!(
            "- SMIC brut : {} ({} de l'heure), net : {}, en vigueur au {}\n",
            ValueFormat::Euro.format(kpi.smic_gross),
            ValueFormat::Euro.format(kpi.smic_hourly),
            ValueFormat::Euro.format(kpi.smic_net),
            kpi.smic_effective
        ));
        if let Some(median) = dataset.salaire_median.last() {
            report.push_str(&format!(
                "- Salaire médian net {} : {} ({:+.1}% sur un an)\n",
                median.annee,
                ValueFormat::Euro.format(median.median),
                median.evolution
            ));
        }
        if let Some(gap) = &kpi.gender_pay_gap {
            report.push_str(&format!(
                "- Écart femmes-hommes {} : {:.1}%\n",
                gap.period, gap.value
            ));
        }
        if !dataset.salaires_secteurs.is_empty() {
            report.push_str("\n| Secteur | Salaire médian | Évolution |\n");
            report.push_str("|---------|----------------|-----------|\n");
            for sector in &dataset.salaires_secteurs {
                report.push_str(&format!(
                    "| {} | {} | {:+.1}% |\n",
                    sector.secteur,
                    ValueFormat::Euro.format(sector.salaire),
                    sector.evolution
                ));
            }
        }

        // Employment
        report.push_str("\n## Emploi\n\n");
        if let (Some(rate), Some(youth)) = (&kpi.unemployment, &kpi.youth_unemployment) {
            report.push_str(&format!(
                "- Taux de chômage {} : {:.1}% (15-24 ans : {:.1}%)\n",
                rate.period, rate.value, youth.value
            ));
        }
        if let Some(mix) = dataset.types_contrats.last() {
            report.push_str(&format!(
                "- Contrats {} : CDI {:.1}%, CDD {:.1}%, intérim {:.1}%, autres {:.1}%\n",
                mix.annee,
                mix.cdi,
                mix.cdd,
                mix.interim,
                other_contracts_share(mix.cdi, mix.cdd, mix.interim)
            ));
        }
        if !dataset.metiers_tension.is_empty() {
            let mut ranked: Vec<_> = dataset.metiers_tension.iter().collect();
            ranked.sort_by(|a, b| {
                b.tension
                    .partial_cmp(&a.tension)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

            report.push_str("\n### Métiers en tension\n");
            report.push_str("| Métier | Difficulté | Niveau | Projets |\n");
            report.push_str("|--------|------------|--------|---------|\n");
            for occupation in ranked.iter().take(5) {
                report.push_str(&format!(
                    "| {} | {:.1}% | {} | {} |\n",
                    occupation.metier,
                    occupation.tension,
                    difficulty_band(occupation.tension).label(),
                    ValueFormat::Count.format(f64::from(occupation.projets))
                ));
            }
        }

        // Arguments
        let arguments = self.arguments(dataset, &kpi);
        if !arguments.is_empty() {
            report.push_str("\n## Arguments NAO\n\n");
            for argument in &arguments {
                report.push_str(&format!("- {}\n", argument));
            }
        }

        if !dataset.sources.is_empty() {
            report.push_str("\n## Sources\n\n");
            for source in &dataset.sources {
                report.push_str(&format!("- {}\n", source));
            }
        }

        report
    }

    /// Negotiation talking points derived from the indicators.
    pub fn arguments(&self, dataset: &Dataset, kpi: &KeyIndicators) -> Vec<String> {
        let mut arguments = Vec::new();

        if let Some(cumulative) = kpi.cumulative_inflation {
            arguments.push(format!(
                "Inflation cumulée depuis {} : {:.1}%, rattrapage nécessaire",
                dataset
                    .inflation_salaires
                    .first()
                    .map(|y| y.annee.as_str())
                    .unwrap_or("2020"),
                cumulative
            ));
            if let Some(wages) = kpi.cumulative_base_wages {
                let gap = wages - cumulative;
                if gap < 0.0 {
                    arguments.push(format!(
                        "Salaires de base en retard de {:.1} points sur les prix",
                        -gap
                    ));
                }
            }
        }

        arguments.push(format!(
            "SMIC revalorisé de {:.1}% depuis 2020",
            kpi.smic_since_2020
        ));

        if let Some(gap) = &kpi.gender_pay_gap {
            arguments.push(format!(
                "Écart salarial femmes-hommes : {:.1}%, réduction à négocier",
                gap.value
            ));
        }

        let shares = &dataset.part_smic;
        if let (Some(first), Some(last)) = (shares.first(), shares.last()) {
            if last.part > first.part {
                arguments.push(format!(
                    "Part des salariés au SMIC passée de {:.1}% à {:.1}% ({}-{}) : tassement des grilles",
                    first.part, last.part, first.annee, last.annee
                ));
            }
        }

        let hard = dataset
            .difficultes_recrutement
            .iter()
            .filter(|d| d.difficulte >= 70.0)
            .count();
        if hard > 0 {
            arguments.push(format!(
                "{} secteurs à au moins 70% de recrutements difficiles : levier d'attractivité",
                hard
            ));
        }

        arguments
    }
}

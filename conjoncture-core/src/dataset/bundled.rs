//! The literal dataset. Figures from INSEE, DARES, Banque de France and
//! France Travail publications, as of `last_updated`.

use super::*;

fn s(v: &str) -> String {
    v.to_string()
}

pub(super) fn dataset() -> Dataset {
    Dataset {
        last_updated: s("2026-01-15"),
        sources: vec![
            s("INSEE - Indice des prix à la consommation"),
            s("INSEE - Enquête Emploi"),
            s("INSEE - Estimations d'emploi salarié"),
            s("Banque de France - Négociations salariales"),
            s("DARES - Statistiques du marché du travail"),
            s("France Travail - Enquête Besoins en Main-d'Œuvre"),
        ],
        smic: MinimumWage {
            montant_brut: 1823.03,
            montant_net: 1443.11,
            taux_horaire: 12.02,
            date_vigueur: s("2026-01-01"),
            evolution_depuis_2020: 17.0,
        },
        inflation_salaires: vec![
            inflation_wage("2020", 0.5, 1.2, 1.5),
            inflation_wage("2021", 1.6, 2.2, 1.4),
            inflation_wage("2022", 5.2, 5.6, 3.5),
            inflation_wage("2023", 4.9, 6.6, 4.2),
            inflation_wage("2024", 2.0, 2.0, 2.8),
            inflation_wage("2025", 0.9, 1.2, 2.0),
        ],
        pouvoir_achat: vec![
            purchasing_power("T4 2020", 100.0, 100.0, 100.0),
            purchasing_power("T2 2021", 101.0, 100.5, 101.0),
            purchasing_power("T4 2021", 102.2, 101.4, 102.5),
            purchasing_power("T2 2022", 105.0, 103.0, 106.0),
            purchasing_power("T4 2022", 108.0, 105.0, 109.0),
            purchasing_power("T2 2023", 112.0, 108.0, 113.0),
            purchasing_power("T4 2023", 115.0, 111.0, 115.0),
            purchasing_power("T2 2024", 116.0, 113.0, 116.0),
            purchasing_power("T4 2024", 117.0, 115.0, 117.0),
            purchasing_power("T3 2025", 118.0, 116.5, 117.5),
        ],
        part_smic: vec![
            minimum_wage_share("2019", 12.0),
            minimum_wage_share("2020", 12.5),
            minimum_wage_share("2021", 13.4),
            minimum_wage_share("2022", 14.5),
            minimum_wage_share("2023", 17.3),
            minimum_wage_share("2024", 14.6),
        ],
        salaire_median: vec![
            median_wage("2019", 1940.0, 1.6),
            median_wage("2020", 1960.0, 1.0),
            median_wage("2021", 2005.0, 2.3),
            median_wage("2022", 2091.0, 4.3),
            median_wage("2023", 2183.0, 4.4),
            median_wage("2024", 2230.0, 2.2),
        ],
        ecart_hf: vec![
            gender_pay_gap("2018", 16.8),
            gender_pay_gap("2019", 16.1),
            gender_pay_gap("2020", 15.6),
            gender_pay_gap("2021", 15.4),
            gender_pay_gap("2022", 14.9),
            gender_pay_gap("2023", 14.2),
        ],
        salaires_secteurs: vec![
            sector_wage("Finance-assurance", 3350.0, 2.4),
            sector_wage("Information-communication", 3120.0, 2.6),
            sector_wage("Industrie", 2450.0, 3.1),
            sector_wage("Transports", 2230.0, 3.3),
            sector_wage("Construction", 2180.0, 2.8),
            sector_wage("Commerce", 2050.0, 2.9),
            sector_wage("Santé-action sociale", 2010.0, 3.0),
            sector_wage("Hébergement-restauration", 1720.0, 3.6),
        ],
        ppv: vec![
            value_sharing_bonus("2022", 15.1, 806.0),
            value_sharing_bonus("2023", 23.1, 885.0),
            value_sharing_bonus("2024", 14.6, 876.0),
        ],
        inflation_detail: vec![
            price_category("Alimentation", 6.8, 11.8, 1.4),
            price_category("Énergie", 23.1, 5.6, 2.3),
            price_category("Services", 3.0, 3.0, 2.7),
            price_category("Manufacturés", 3.3, 3.5, 0.0),
            price_category("Loyers", 2.0, 2.8, 2.8),
        ],
        chomage: vec![
            unemployment("T1 2023", 7.1, 17.5),
            unemployment("T2 2023", 7.2, 17.0),
            unemployment("T3 2023", 7.4, 17.6),
            unemployment("T4 2023", 7.5, 17.6),
            unemployment("T1 2024", 7.5, 18.1),
            unemployment("T2 2024", 7.3, 17.7),
            unemployment("T3 2024", 7.4, 18.3),
            unemployment("T4 2024", 7.3, 19.0),
            unemployment("T1 2025", 7.4, 18.5),
            unemployment("T2 2025", 7.5, 18.8),
            unemployment("T3 2025", 7.7, 19.2),
        ],
        emploi_seniors: vec![
            senior_employment("2019", 52.1, 33.1),
            senior_employment("2020", 53.8, 35.5),
            senior_employment("2021", 56.0, 35.5),
            senior_employment("2022", 56.9, 36.2),
            senior_employment("2023", 58.4, 38.9),
            senior_employment("2024", 60.4, 41.1),
        ],
        types_contrats: vec![
            contract_mix("2019", 74.6, 8.9, 2.1),
            contract_mix("2020", 75.0, 8.5, 1.8),
            contract_mix("2021", 74.9, 8.7, 2.1),
            contract_mix("2022", 75.1, 8.4, 2.0),
            contract_mix("2023", 75.2, 8.2, 1.8),
            contract_mix("2024", 75.3, 8.0, 1.6),
        ],
        emploi_secteurs: vec![
            sector_employment("Industrie", 3240.0, -0.1),
            sector_employment("Construction", 1530.0, -0.6),
            sector_employment("Commerce", 3310.0, 0.1),
            sector_employment("Transports", 1480.0, 0.2),
            sector_employment("Hébergement-restauration", 1300.0, -0.3),
            sector_employment("Services aux entreprises", 3710.0, 0.3),
            sector_employment("Intérim", 720.0, -1.2),
            sector_employment("Santé-action sociale", 2480.0, 0.4),
            sector_employment("Administration publique", 2450.0, 0.0),
        ],
        difficultes_recrutement: vec![
            hiring_difficulty("Santé-action sociale", 81.2),
            hiring_difficulty("Construction", 74.3),
            hiring_difficulty("Hébergement-restauration", 70.0),
            hiring_difficulty("Industrie", 66.4),
            hiring_difficulty("Transports", 63.1),
            hiring_difficulty("Services aux entreprises", 58.9),
            hiring_difficulty("Commerce", 55.8),
        ],
        metiers_tension: vec![
            occupation("Aides-soignants", 86.5, 109_340),
            occupation("Couvreurs", 84.2, 9_870),
            occupation("Infirmiers", 81.0, 61_420),
            occupation("Chaudronniers, soudeurs", 80.0, 18_650),
            occupation("Cuisiniers", 76.3, 79_110),
            occupation("Conducteurs routiers", 74.1, 52_380),
            occupation("Mécaniciens automobile", 70.0, 21_940),
            occupation("Aides à domicile", 69.0, 96_720),
            occupation("Serveurs", 67.8, 128_500),
        ],
        creations_destructions: vec![
            job_flow("T1 2024", 312.0, 287.0, 25.0),
            job_flow("T2 2024", 298.0, 281.0, 17.0),
            job_flow("T3 2024", 289.0, 295.0, -6.0),
            job_flow("T4 2024", 301.0, 299.0, 2.0),
            job_flow("T1 2025", 294.0, 290.0, 4.0),
            job_flow("T2 2025", 287.0, 291.0, -4.0),
            job_flow("T3 2025", 290.0, 296.0, -6.0),
        ],
    }
}

fn inflation_wage(
    annee: &str,
    inflation: f64,
    smic: f64,
    salaires_base: f64,
) -> InflationWagePoint {
    InflationWagePoint {
        annee: s(annee),
        inflation,
        smic,
        salaires_base,
    }
}

fn purchasing_power(periode: &str, smic: f64, salaires: f64, prix: f64) -> PurchasingPowerPoint {
    PurchasingPowerPoint {
        periode: s(periode),
        smic,
        salaires,
        prix,
    }
}

fn minimum_wage_share(annee: &str, part: f64) -> MinimumWageSharePoint {
    MinimumWageSharePoint {
        annee: s(annee),
        part,
    }
}

fn median_wage(annee: &str, median: f64, evolution: f64) -> MedianWagePoint {
    MedianWagePoint {
        annee: s(annee),
        median,
        evolution,
    }
}

fn gender_pay_gap(annee: &str, ecart: f64) -> GenderPayGapPoint {
    GenderPayGapPoint {
        annee: s(annee),
        ecart,
    }
}

fn sector_wage(secteur: &str, salaire: f64, evolution: f64) -> SectorWage {
    SectorWage {
        secteur: s(secteur),
        salaire,
        evolution,
    }
}

fn value_sharing_bonus(
    annee: &str,
    beneficiaires: f64,
    montant_moyen: f64,
) -> ValueSharingBonusPoint {
    ValueSharingBonusPoint {
        annee: s(annee),
        beneficiaires,
        montant_moyen,
    }
}

fn price_category(poste: &str, val2022: f64, val2023: f64, val2024: f64) -> PriceCategory {
    PriceCategory {
        poste: s(poste),
        val2022,
        val2023,
        val2024,
    }
}

fn unemployment(trimestre: &str, taux: f64, jeunes: f64) -> UnemploymentPoint {
    UnemploymentPoint {
        trimestre: s(trimestre),
        taux,
        jeunes,
    }
}

fn senior_employment(annee: &str, taux_55_64: f64, taux_60_64: f64) -> SeniorEmploymentPoint {
    SeniorEmploymentPoint {
        annee: s(annee),
        taux_55_64,
        taux_60_64,
    }
}

fn contract_mix(annee: &str, cdi: f64, cdd: f64, interim: f64) -> ContractMixPoint {
    ContractMixPoint {
        annee: s(annee),
        cdi,
        cdd,
        interim,
    }
}

fn sector_employment(secteur: &str, effectifs: f64, evolution_trim: f64) -> SectorEmployment {
    SectorEmployment {
        secteur: s(secteur),
        effectifs,
        evolution_trim,
    }
}

fn hiring_difficulty(secteur: &str, difficulte: f64) -> HiringDifficulty {
    HiringDifficulty {
        secteur: s(secteur),
        difficulte,
    }
}

fn occupation(metier: &str, tension: f64, projets: u32) -> OccupationTension {
    OccupationTension {
        metier: s(metier),
        tension,
        projets,
    }
}

fn job_flow(trimestre: &str, creations: f64, destructions: f64, solde: f64) -> JobFlowPoint {
    JobFlowPoint {
        trimestre: s(trimestre),
        creations,
        destructions,
        solde,
    }
}

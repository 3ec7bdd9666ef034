//! Every module x scenario combination, flattened for batch export.

use crate::cost_of_living::project_cost_of_living;
use crate::debt::DebtPolicy;
use crate::education::AccessLevel;
use crate::food_system::FoodScenario;
use crate::infrastructure::InvestmentLevel;
use crate::knowledge::TransferRegime;
use crate::projection::{ProjectionTable, ScenarioSet, SeriesProjection};
use crate::stability::stability_curve;
use crate::{debt, education, food_system, infrastructure, knowledge};

/// One exportable table with a file-name stem and a human-readable title.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogueEntry {
    pub stem: String,
    pub title: String,
    pub table: ProjectionTable,
}

/// Lowercase, underscore-separated stem built from a module and label,
/// e.g. `infrastructure_high_investment`.
pub fn file_stem(module: &str, label: &str) -> String {
    let mut stem = String::with_capacity(module.len() + label.len() + 1);
    stem.push_str(module);
    let mut pending_sep = true;
    for ch in label.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_sep {
                stem.push('_');
                pending_sep = false;
            }
            stem.push(ch.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }
    stem
}

fn series_entry(projection: SeriesProjection) -> CatalogueEntry {
    CatalogueEntry {
        stem: file_stem(projection.module, projection.scenario),
        title: format!("{}: {}", projection.module, projection.scenario),
        table: projection.to_table(),
    }
}

fn series_entries<S: ScenarioSet>(
    project: impl Fn(S) -> SeriesProjection,
) -> impl Iterator<Item = CatalogueEntry> {
    S::ALL.iter().map(move |&s| series_entry(project(s)))
}

/// Tables for the two snapshot modules plus every scenario of every
/// time-series module, in dashboard order.
pub fn all_scenario_tables() -> Vec<CatalogueEntry> {
    let mut entries = vec![
        CatalogueEntry {
            stem: "stability_curve".to_string(),
            title: "stability: canonical metrics by monthly support".to_string(),
            table: stability_curve().to_table(),
        },
        CatalogueEntry {
            stem: "cost_of_living".to_string(),
            title: "cost_of_living: income tiers vs monthly cost".to_string(),
            table: project_cost_of_living().to_table(),
        },
    ];
    entries.extend(series_entries::<InvestmentLevel>(infrastructure::project));
    entries.extend(series_entries::<AccessLevel>(education::project));
    entries.extend(series_entries::<FoodScenario>(food_system::project));
    entries.extend(series_entries::<DebtPolicy>(debt::project));
    entries.extend(series_entries::<TransferRegime>(knowledge::project));
    entries
}

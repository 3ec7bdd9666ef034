//! Scenario selection and the projections derived from it.
//!
//! The dashboard owns [`ScenarioSelection`] and writes into it from its
//! widgets. Whenever the selection changes, [`recompute_projections`] extracts
//! each module's parameter and calls the pure projection functions, storing
//! the results in [`Projections`]. Nothing here is read by the projection
//! functions themselves.

use bevy::prelude::*;
use serde::Serialize;

use crate::cost_of_living::{
    classify_income, project_cost_of_living, BudgetOutcome, CostOfLivingReport,
    CUSTOM_INCOME_DEFAULT,
};
use crate::debt::DebtPolicy;
use crate::education::AccessLevel;
use crate::food_system::FoodScenario;
use crate::infrastructure::InvestmentLevel;
use crate::knowledge::TransferRegime;
use crate::projection::SeriesProjection;
use crate::stability::{
    is_within_slider_range, project_stability, stability_curve, StabilityCurve,
    StabilityMetrics, UBI_DEFAULT, UBI_MAX, UBI_MIN,
};
use crate::{debt, education, food_system, infrastructure, knowledge};

/// The parameter currently chosen for every module.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioSelection {
    /// Monthly stabilization amount per adult ($).
    pub ubi: f64,
    /// User-entered monthly income for the cost-of-living comparison ($).
    pub custom_income: f64,
    pub infrastructure: InvestmentLevel,
    pub education: AccessLevel,
    pub food: FoodScenario,
    pub debt: DebtPolicy,
    pub knowledge: TransferRegime,
}

impl Default for ScenarioSelection {
    fn default() -> Self {
        Self {
            ubi: UBI_DEFAULT,
            custom_income: CUSTOM_INCOME_DEFAULT,
            infrastructure: InvestmentLevel::default(),
            education: AccessLevel::default(),
            food: FoodScenario::default(),
            debt: DebtPolicy::default(),
            knowledge: TransferRegime::default(),
        }
    }
}

/// Results for the current [`ScenarioSelection`].
#[derive(Resource, Debug, Clone, PartialEq, Serialize)]
pub struct Projections {
    pub stability: StabilityMetrics,
    pub stability_curve: StabilityCurve,
    pub cost_of_living: CostOfLivingReport,
    pub custom_income: BudgetOutcome,
    pub infrastructure: SeriesProjection,
    pub education: SeriesProjection,
    pub food: SeriesProjection,
    pub debt: SeriesProjection,
    pub knowledge: SeriesProjection,
}

impl Projections {
    pub fn compute(selection: &ScenarioSelection) -> Self {
        Self {
            stability: project_stability(selection.ubi),
            stability_curve: stability_curve(),
            cost_of_living: project_cost_of_living(),
            custom_income: classify_income("Your Income", selection.custom_income),
            infrastructure: infrastructure::project(selection.infrastructure),
            education: education::project(selection.education),
            food: food_system::project(selection.food),
            debt: debt::project(selection.debt),
            knowledge: knowledge::project(selection.knowledge),
        }
    }
}

/// Recompute every module's results from the current selection.
///
/// Runs only when [`ScenarioSelection`] changed (including its first insert).
pub fn recompute_projections(
    selection: Res<ScenarioSelection>,
    mut projections: Option<ResMut<Projections>>,
    mut commands: Commands,
) {
    if !is_within_slider_range(selection.ubi) {
        warn!(
            "UBI {} is outside the {}..={} slider domain; extrapolating",
            selection.ubi, UBI_MIN, UBI_MAX
        );
    }

    let fresh = Projections::compute(&selection);

    debug!(
        "Recomputed projections: ubi={} infrastructure='{}' education='{}' food='{}' debt='{}' knowledge='{}'",
        selection.ubi,
        fresh.infrastructure.scenario,
        fresh.education.scenario,
        fresh.food.scenario,
        fresh.debt.scenario,
        fresh.knowledge.scenario,
    );

    match projections.as_deref_mut() {
        Some(current) => *current = fresh,
        None => commands.insert_resource(fresh),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::ScenarioSet;

    #[test]
    fn test_default_selection_matches_slider_defaults() {
        let s = ScenarioSelection::default();
        assert!((s.ubi - 1000.0).abs() < f64::EPSILON);
        assert!((s.custom_income - 3200.0).abs() < f64::EPSILON);
        assert_eq!(s.infrastructure, InvestmentLevel::High);
        assert_eq!(s.education, AccessLevel::High);
    }

    #[test]
    fn test_compute_uses_each_selection_field() {
        let selection = ScenarioSelection {
            ubi: 500.0,
            custom_income: 5000.0,
            infrastructure: InvestmentLevel::Neglect,
            education: AccessLevel::Desert,
            food: FoodScenario::SupplyShock,
            debt: DebtPolicy::Predatory,
            knowledge: TransferRegime::Collapse,
        };
        let p = Projections::compute(&selection);
        assert!((p.stability.stress - 85.0).abs() < 1e-9);
        assert!((p.custom_income.surplus - 1000.0).abs() < 1e-9);
        assert_eq!(p.infrastructure.scenario, InvestmentLevel::Neglect.label());
        assert_eq!(p.education.scenario, AccessLevel::Desert.label());
        assert_eq!(p.food.scenario, FoodScenario::SupplyShock.label());
        assert_eq!(p.debt.scenario, DebtPolicy::Predatory.label());
        assert_eq!(p.knowledge.scenario, TransferRegime::Collapse.label());
    }

    #[test]
    fn test_compute_is_deterministic() {
        let s = ScenarioSelection::default();
        let a = Projections::compute(&s);
        let b = Projections::compute(&s);
        assert_eq!(a, b);
    }
}

//! Scenario-projection layer for the systemic resilience dashboard.
//!
//! Every module maps one scenario parameter (a slider value or a label from a
//! fixed set) to snapshot metrics or year-aligned indicator series using
//! closed-form formulas and small named constant tables. The functions are
//! pure; [`SimulationPlugin`] only wires them to the dashboard's selection.

use bevy::prelude::*;

pub mod catalogue;
pub mod cost_of_living;
pub mod debt;
pub mod education;
pub mod error;
pub mod food_system;
pub mod infrastructure;
pub mod interpolation;
pub mod knowledge;
pub mod projection;
pub mod selection;
pub mod stability;
pub mod year_axis;

pub use error::ProjectionError;
pub use projection::{Indicator, ProjectionTable, ScenarioSet, SeriesProjection, TableValue};
pub use selection::{Projections, ScenarioSelection};

/// Registers the scenario selection and keeps [`Projections`] in sync with it.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScenarioSelection>().add_systems(
            PreUpdate,
            selection::recompute_projections.run_if(resource_changed::<ScenarioSelection>),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::InvestmentLevel;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins).add_plugins(SimulationPlugin);
        app
    }

    #[test]
    fn test_projections_available_after_first_update() {
        let mut app = test_app();
        app.update();
        let projections = app.world().get_resource::<Projections>();
        assert!(projections.is_some(), "Projections should be inserted on startup");
        let p = projections.unwrap();
        assert!((p.stability.stress - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_changing_selection_recomputes() {
        let mut app = test_app();
        app.update();

        app.world_mut()
            .resource_mut::<ScenarioSelection>()
            .infrastructure = InvestmentLevel::Neglect;
        app.update();

        let p = app.world().resource::<Projections>();
        assert_eq!(p.infrastructure.scenario, "Neglect");
        let q = p.infrastructure.value_at("quality", 2030).unwrap();
        assert!((q - 80.0).abs() < 1e-9, "got {q}");
    }

    #[test]
    fn test_out_of_domain_ubi_still_projects() {
        let mut app = test_app();
        app.world_mut().resource_mut::<ScenarioSelection>().ubi = 2000.0;
        app.update();
        let p = app.world().resource::<Projections>();
        assert!((p.stability.stress - 40.0).abs() < 1e-9);
    }
}

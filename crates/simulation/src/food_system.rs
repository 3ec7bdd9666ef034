//! Module D: food system capacity.
//!
//! A compounding food-capacity index drives food insecurity, which in turn
//! drives per-capita emergency food spending. Insecurity is a share of the
//! population and is kept within 0..=100.

use serde::Serialize;

use crate::error::ProjectionError;
use crate::projection::{compounding, Indicator, ScenarioSet, SeriesProjection};
use crate::year_axis::{YearAxis, ANNUAL_AXIS};

pub const AXIS: YearAxis = ANNUAL_AXIS;

/// Insecurity (%) when capacity sits at the 2025 baseline.
pub const INSECURITY_BASELINE: f64 = 12.0;
/// Insecurity points per point of lost capacity.
pub const INSECURITY_PER_POINT: f64 = 0.9;
/// Emergency food spending floor ($/capita/yr).
pub const EMERGENCY_COST_BASE: f64 = 50.0;
/// Extra emergency spending per insecurity point.
pub const EMERGENCY_COST_PER_POINT: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum FoodScenario {
    Regenerative,
    #[default]
    StatusQuo,
    SoilDepletion,
    SupplyShock,
}

impl FoodScenario {
    /// Capacity growth factor per year.
    pub fn growth_base(self) -> f64 {
        match self {
            FoodScenario::Regenerative => 1.015,
            FoodScenario::StatusQuo => 1.0,
            FoodScenario::SoilDepletion => 0.985,
            FoodScenario::SupplyShock => 0.96,
        }
    }
}

impl ScenarioSet for FoodScenario {
    const MODULE: &'static str = "food_system";
    const ALL: &'static [Self] = &[
        FoodScenario::Regenerative,
        FoodScenario::StatusQuo,
        FoodScenario::SoilDepletion,
        FoodScenario::SupplyShock,
    ];

    fn label(self) -> &'static str {
        match self {
            FoodScenario::Regenerative => "Regenerative Investment",
            FoodScenario::StatusQuo => "Status Quo",
            FoodScenario::SoilDepletion => "Soil Depletion",
            FoodScenario::SupplyShock => "Supply Shock",
        }
    }
}

pub fn food_insecurity(capacity: f64) -> f64 {
    (INSECURITY_BASELINE + (100.0 - capacity) * INSECURITY_PER_POINT).clamp(0.0, 100.0)
}

pub fn emergency_food_cost(insecurity: f64) -> f64 {
    EMERGENCY_COST_BASE + insecurity * EMERGENCY_COST_PER_POINT
}

pub fn project_series(scenario: FoodScenario, axis: &YearAxis) -> SeriesProjection {
    let capacity = compounding(axis, scenario.growth_base());
    let insecurity: Vec<f64> = capacity.iter().map(|&c| food_insecurity(c)).collect();
    let emergency = insecurity.iter().map(|&i| emergency_food_cost(i)).collect();

    SeriesProjection {
        module: FoodScenario::MODULE,
        scenario: scenario.label(),
        years: axis.years(),
        indicators: vec![
            Indicator {
                name: "capacity",
                unit: "index (2025 = 100)",
                values: capacity,
            },
            Indicator {
                name: "food_insecurity",
                unit: "%",
                values: insecurity,
            },
            Indicator {
                name: "emergency_food_cost",
                unit: "$/capita/yr",
                values: emergency,
            },
        ],
    }
}

pub fn project(scenario: FoodScenario) -> SeriesProjection {
    project_series(scenario, &AXIS)
}

pub fn project_label(label: &str) -> Result<SeriesProjection, ProjectionError> {
    Ok(project(FoodScenario::from_label(label)?))
}

//! Module E: debt and wealth lock-in.
//!
//! A household debt-burden index compounds per scenario. Upward mobility is
//! read off a breakpoint table keyed by debt burden, and the share of
//! households locked out of wealth building rises with burden above baseline.

use std::sync::LazyLock;

use serde::Serialize;

use crate::error::ProjectionError;
use crate::interpolation::BreakpointTable;
use crate::projection::{compounding, Indicator, ScenarioSet, SeriesProjection};
use crate::year_axis::{YearAxis, ANNUAL_AXIS};

pub const AXIS: YearAxis = ANNUAL_AXIS;

/// Debt-burden index breakpoints for the mobility lookup.
pub const DEBT_BURDEN_BREAKPOINTS: [f64; 5] = [50.0, 100.0, 150.0, 200.0, 300.0];
/// Chance (%) of moving up an income quintile within a generation.
pub const MOBILITY_BY_BURDEN: [f64; 5] = [60.0, 40.0, 28.0, 18.0, 8.0];

static MOBILITY_CURVE: LazyLock<BreakpointTable> = LazyLock::new(mobility_table);

/// Validated mobility lookup built from the named breakpoint constants.
pub fn mobility_table() -> BreakpointTable {
    // Constant tables; validity is asserted in tests.
    BreakpointTable::new(&DEBT_BURDEN_BREAKPOINTS, &MOBILITY_BY_BURDEN)
        .expect("debt breakpoints are strictly increasing and aligned")
}

const LOCK_IN_BASELINE: f64 = 20.0;
const LOCK_IN_PER_POINT: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum DebtPolicy {
    Relief,
    Regulated,
    #[default]
    StatusQuo,
    Predatory,
}

impl DebtPolicy {
    /// Debt-burden growth factor per year.
    pub fn growth_base(self) -> f64 {
        match self {
            DebtPolicy::Relief => 0.97,
            DebtPolicy::Regulated => 0.995,
            DebtPolicy::StatusQuo => 1.02,
            DebtPolicy::Predatory => 1.045,
        }
    }
}

impl ScenarioSet for DebtPolicy {
    const MODULE: &'static str = "debt";
    const ALL: &'static [Self] = &[
        DebtPolicy::Relief,
        DebtPolicy::Regulated,
        DebtPolicy::StatusQuo,
        DebtPolicy::Predatory,
    ];

    fn label(self) -> &'static str {
        match self {
            DebtPolicy::Relief => "Debt Relief",
            DebtPolicy::Regulated => "Regulated Lending",
            DebtPolicy::StatusQuo => "Status Quo",
            DebtPolicy::Predatory => "Predatory Expansion",
        }
    }
}

pub fn upward_mobility(debt_burden: f64) -> f64 {
    MOBILITY_CURVE.value(debt_burden)
}

pub fn wealth_lock_in(debt_burden: f64) -> f64 {
    (LOCK_IN_BASELINE + (debt_burden - 100.0) * LOCK_IN_PER_POINT).clamp(0.0, 100.0)
}

pub fn project_series(policy: DebtPolicy, axis: &YearAxis) -> SeriesProjection {
    let burden = compounding(axis, policy.growth_base());
    let mobility = burden.iter().map(|&b| MOBILITY_CURVE.value(b)).collect();
    let lock_in = burden.iter().map(|&b| wealth_lock_in(b)).collect();

    SeriesProjection {
        module: DebtPolicy::MODULE,
        scenario: policy.label(),
        years: axis.years(),
        indicators: vec![
            Indicator {
                name: "debt_burden",
                unit: "index (2025 = 100)",
                values: burden,
            },
            Indicator {
                name: "upward_mobility",
                unit: "%",
                values: mobility,
            },
            Indicator {
                name: "wealth_lock_in",
                unit: "% of households",
                values: lock_in,
            },
        ],
    }
}

pub fn project(policy: DebtPolicy) -> SeriesProjection {
    project_series(policy, &AXIS)
}

pub fn project_label(label: &str) -> Result<SeriesProjection, ProjectionError> {
    Ok(project(DebtPolicy::from_label(label)?))
}

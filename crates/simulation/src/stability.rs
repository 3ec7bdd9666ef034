//! Module G: stability and work redistribution.
//!
//! Maps a monthly income-stabilization amount per adult to four snapshot
//! metrics with fixed linear coefficients. The closed-form coefficients are the
//! single source of truth; the chart samples the same formulas across the
//! slider domain instead of plotting a separate reference table.
//!
//! Inputs outside `UBI_MIN..=UBI_MAX` are extrapolated, not clamped.

use serde::Serialize;

use crate::projection::{Indicator, ProjectionTable, TableValue};

// =============================================================================
// Slider domain
// =============================================================================

pub const UBI_MIN: f64 = 0.0;
pub const UBI_MAX: f64 = 1500.0;
pub const UBI_STEP: f64 = 100.0;
pub const UBI_DEFAULT: f64 = 1000.0;

// =============================================================================
// Coefficients
// =============================================================================

/// Stress index with no support.
pub const STRESS_BASELINE: f64 = 100.0;
/// Stress points removed per dollar of monthly support.
pub const STRESS_PER_DOLLAR: f64 = 0.03;
/// Education uptake (%) per dollar.
pub const EDUCATION_PER_DOLLAR: f64 = 0.025;
/// Emergency health cost reduction (%) per dollar.
pub const HEALTH_SAVINGS_PER_DOLLAR: f64 = 0.015;
/// Small business growth (%) per dollar.
pub const BIZ_GROWTH_PER_DOLLAR: f64 = 0.012;

/// Snapshot of the stabilization outcomes for one support level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StabilityMetrics {
    pub ubi: f64,
    /// Societal stress index, lower is better.
    pub stress: f64,
    /// Education participation uptake (%).
    pub education: f64,
    /// Emergency health cost reduction (%).
    pub health_savings: f64,
    /// Small business growth (%).
    pub biz_growth: f64,
}

impl StabilityMetrics {
    pub fn to_table(&self) -> ProjectionTable {
        ProjectionTable {
            columns: METRIC_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: vec![self.row()],
        }
    }

    fn row(&self) -> Vec<TableValue> {
        vec![
            TableValue::Number(self.ubi),
            TableValue::Number(self.stress),
            TableValue::Number(self.education),
            TableValue::Number(self.health_savings),
            TableValue::Number(self.biz_growth),
        ]
    }
}

const METRIC_COLUMNS: [&str; 5] = ["ubi", "stress", "education", "health_savings", "biz_growth"];

pub fn project_stability(ubi: f64) -> StabilityMetrics {
    StabilityMetrics {
        ubi,
        stress: STRESS_BASELINE - ubi * STRESS_PER_DOLLAR,
        education: ubi * EDUCATION_PER_DOLLAR,
        health_savings: ubi * HEALTH_SAVINGS_PER_DOLLAR,
        biz_growth: ubi * BIZ_GROWTH_PER_DOLLAR,
    }
}

pub fn is_within_slider_range(ubi: f64) -> bool {
    (UBI_MIN..=UBI_MAX).contains(&ubi)
}

/// The canonical metrics sampled at every slider stop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StabilityCurve {
    pub ubi_levels: Vec<f64>,
    pub indicators: Vec<Indicator>,
}

impl StabilityCurve {
    pub fn to_table(&self) -> ProjectionTable {
        let rows = self
            .ubi_levels
            .iter()
            .map(|&ubi| project_stability(ubi).row())
            .collect();
        ProjectionTable {
            columns: METRIC_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }
}

pub fn stability_curve() -> StabilityCurve {
    let steps = ((UBI_MAX - UBI_MIN) / UBI_STEP).round() as usize;
    let ubi_levels: Vec<f64> = (0..=steps)
        .map(|i| UBI_MIN + i as f64 * UBI_STEP)
        .collect();
    let snapshots: Vec<StabilityMetrics> =
        ubi_levels.iter().map(|&u| project_stability(u)).collect();

    let series = |name, unit, f: fn(&StabilityMetrics) -> f64| Indicator {
        name,
        unit,
        values: snapshots.iter().map(f).collect(),
    };

    StabilityCurve {
        indicators: vec![
            series("stress", "index", |m| m.stress),
            series("education", "%", |m| m.education),
            series("health_savings", "%", |m| m.health_savings),
            series("biz_growth", "%", |m| m.biz_growth),
        ],
        ubi_levels,
    }
}

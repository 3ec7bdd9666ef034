//! Module B: infrastructure decay vs investment.
//!
//! Quality falls linearly from 100 at a per-scenario rate. Human costs grow
//! with the quality gap `100 - quality`; none of them are clamped, so a
//! neglected system keeps getting more expensive past the end of the axis.

use serde::Serialize;

use crate::error::ProjectionError;
use crate::projection::{linear_decay, Indicator, ScenarioSet, SeriesProjection};
use crate::year_axis::{YearAxis, ANNUAL_AXIS};

pub const AXIS: YearAxis = ANNUAL_AXIS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum InvestmentLevel {
    #[default]
    High,
    Moderate,
    Low,
    Neglect,
}

impl InvestmentLevel {
    /// Quality points lost per year.
    pub fn decay_rate(self) -> f64 {
        match self {
            InvestmentLevel::High => 0.3,
            InvestmentLevel::Moderate => 1.0,
            InvestmentLevel::Low => 2.5,
            InvestmentLevel::Neglect => 4.0,
        }
    }
}

impl ScenarioSet for InvestmentLevel {
    const MODULE: &'static str = "infrastructure";
    const ALL: &'static [Self] = &[
        InvestmentLevel::High,
        InvestmentLevel::Moderate,
        InvestmentLevel::Low,
        InvestmentLevel::Neglect,
    ];

    fn label(self) -> &'static str {
        match self {
            InvestmentLevel::High => "High Investment",
            InvestmentLevel::Moderate => "Moderate Investment",
            InvestmentLevel::Low => "Low Investment",
            InvestmentLevel::Neglect => "Neglect",
        }
    }
}

/// Human burden implied by one quality reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HumanCost {
    /// Power outage risk (%).
    pub power_outage_risk: f64,
    /// Commute disruption (hours per month).
    pub commute_delay: f64,
    /// Healthcare risk (%).
    pub healthcare_risk: f64,
    /// Per-capita repair cost ($/yr).
    pub repair_cost: f64,
}

pub fn human_cost_from_quality(quality: f64) -> HumanCost {
    let gap = 100.0 - quality;
    HumanCost {
        power_outage_risk: 5.0 + gap * 0.8,
        commute_delay: 2.0 + gap * 0.5,
        healthcare_risk: 1.0 + gap * 0.6,
        repair_cost: 200.0 + gap * 20.0,
    }
}

pub fn project_series(level: InvestmentLevel, axis: &YearAxis) -> SeriesProjection {
    let quality = linear_decay(axis, level.decay_rate());
    let costs: Vec<HumanCost> = quality.iter().map(|&q| human_cost_from_quality(q)).collect();
    let pick = |f: fn(&HumanCost) -> f64| costs.iter().map(f).collect::<Vec<f64>>();

    SeriesProjection {
        module: InvestmentLevel::MODULE,
        scenario: level.label(),
        years: axis.years(),
        indicators: vec![
            Indicator {
                name: "quality",
                unit: "index",
                values: quality,
            },
            Indicator {
                name: "power_outage_risk",
                unit: "%",
                values: pick(|c| c.power_outage_risk),
            },
            Indicator {
                name: "healthcare_risk",
                unit: "%",
                values: pick(|c| c.healthcare_risk),
            },
            Indicator {
                name: "commute_delay",
                unit: "hrs/mo",
                values: pick(|c| c.commute_delay),
            },
            Indicator {
                name: "repair_cost",
                unit: "$/yr",
                values: pick(|c| c.repair_cost),
            },
        ],
    }
}

pub fn project(level: InvestmentLevel) -> SeriesProjection {
    project_series(level, &AXIS)
}

pub fn project_label(label: &str) -> Result<SeriesProjection, ProjectionError> {
    Ok(project(InvestmentLevel::from_label(label)?))
}

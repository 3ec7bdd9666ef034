//! Module C: education access and generational opportunity.
//!
//! The opportunity index compounds once per five-year step. Incarceration risk
//! falls as opportunity rises and bottoms out at zero.

use serde::Serialize;

use crate::error::ProjectionError;
use crate::projection::{compounding, Indicator, ScenarioSet, SeriesProjection};
use crate::year_axis::{YearAxis, GENERATIONAL_AXIS};

pub const AXIS: YearAxis = GENERATIONAL_AXIS;

const INCARCERATION_BASE: f64 = 5.0;
const INCARCERATION_PER_POINT: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum AccessLevel {
    #[default]
    High,
    Moderate,
    Limited,
    Desert,
}

impl AccessLevel {
    /// Opportunity growth factor per axis step.
    pub fn growth_base(self) -> f64 {
        match self {
            AccessLevel::High => 1.05,
            AccessLevel::Moderate => 1.03,
            AccessLevel::Limited => 1.01,
            AccessLevel::Desert => 0.98,
        }
    }
}

impl ScenarioSet for AccessLevel {
    const MODULE: &'static str = "education";
    const ALL: &'static [Self] = &[
        AccessLevel::High,
        AccessLevel::Moderate,
        AccessLevel::Limited,
        AccessLevel::Desert,
    ];

    fn label(self) -> &'static str {
        match self {
            AccessLevel::High => "High Access",
            AccessLevel::Moderate => "Moderate Access",
            AccessLevel::Limited => "Limited Access",
            AccessLevel::Desert => "Education Desert",
        }
    }
}

pub fn incarceration_risk(opportunity: f64) -> f64 {
    (INCARCERATION_BASE + (100.0 - opportunity) * INCARCERATION_PER_POINT).max(0.0)
}

pub fn project_series(level: AccessLevel, axis: &YearAxis) -> SeriesProjection {
    let opportunity = compounding(axis, level.growth_base());
    let risk = opportunity.iter().map(|&o| incarceration_risk(o)).collect();

    SeriesProjection {
        module: AccessLevel::MODULE,
        scenario: level.label(),
        years: axis.years(),
        indicators: vec![
            Indicator {
                name: "opportunity",
                unit: "index (2025 = 100)",
                values: opportunity,
            },
            Indicator {
                name: "incarceration_risk",
                unit: "%",
                values: risk,
            },
        ],
    }
}

pub fn project(level: AccessLevel) -> SeriesProjection {
    project_series(level, &AXIS)
}

pub fn project_label(label: &str) -> Result<SeriesProjection, ProjectionError> {
    Ok(project(AccessLevel::from_label(label)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_access_first_step() {
        let p = project(AccessLevel::High);
        let o = &p.indicator("opportunity").unwrap().values;
        assert!((o[0] - 100.0).abs() < 1e-12);
        assert!((o[1] - 105.0).abs() < 1e-9, "got {}", o[1]);
        assert_eq!(p.years[1], 2030);
    }

    #[test]
    fn test_desert_declines() {
        let p = project(AccessLevel::Desert);
        let o = &p.indicator("opportunity").unwrap().values;
        assert!(o.windows(2).all(|w| w[1] < w[0]));
        // 0.98^10
        assert!((o[10] - 100.0 * 0.98_f64.powi(10)).abs() < 1e-9);
    }

    #[test]
    fn test_incarceration_risk_floor() {
        assert!((incarceration_risk(100.0) - 5.0).abs() < 1e-12);
        assert!((incarceration_risk(80.0) - 9.0).abs() < 1e-12);
        assert_eq!(incarceration_risk(200.0), 0.0);
    }

    #[test]
    fn test_high_access_risk_hits_zero_by_2075() {
        let p = project(AccessLevel::High);
        assert_eq!(p.value_at("incarceration_risk", 2075), Some(0.0));
    }

    #[test]
    fn test_all_scenarios_full_length() {
        for &level in AccessLevel::ALL {
            let p = project(level);
            assert_eq!(p.years, AXIS.years());
            for ind in &p.indicators {
                assert_eq!(ind.values.len(), 11, "{} / {}", level.label(), ind.name);
            }
        }
    }

    #[test]
    fn test_unknown_label() {
        assert!(project_label("Unlimited Access").is_err());
        assert!(project_label("Education Desert").is_ok());
    }
}

//! Module F: knowledge attrition, inheritance, and collapse prevention.
//!
//! Institutional knowledge retention decays linearly and never drops below
//! zero. Collapse risk is derived from retention and capped at 100; recovery
//! time is derived from collapse risk.

use serde::Serialize;

use crate::error::ProjectionError;
use crate::projection::{linear_decay, Indicator, ScenarioSet, SeriesProjection};
use crate::year_axis::{YearAxis, GENERATIONAL_AXIS};

pub const AXIS: YearAxis = GENERATIONAL_AXIS;

const COLLAPSE_BASELINE: f64 = 2.0;
const COLLAPSE_PER_POINT: f64 = 1.1;
/// Years needed to rebuild lost capability per point of collapse risk.
const RECOVERY_YEARS_PER_POINT: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum TransferRegime {
    Archiving,
    #[default]
    Mentorship,
    RetirementCliff,
    Collapse,
}

impl TransferRegime {
    /// Retention points lost per calendar year.
    pub fn attrition_rate(self) -> f64 {
        match self {
            TransferRegime::Archiving => 0.2,
            TransferRegime::Mentorship => 0.6,
            TransferRegime::RetirementCliff => 1.4,
            TransferRegime::Collapse => 2.5,
        }
    }
}

impl ScenarioSet for TransferRegime {
    const MODULE: &'static str = "knowledge";
    const ALL: &'static [Self] = &[
        TransferRegime::Archiving,
        TransferRegime::Mentorship,
        TransferRegime::RetirementCliff,
        TransferRegime::Collapse,
    ];

    fn label(self) -> &'static str {
        match self {
            TransferRegime::Archiving => "Institutional Archiving",
            TransferRegime::Mentorship => "Mentorship Networks",
            TransferRegime::RetirementCliff => "Retirement Cliff",
            TransferRegime::Collapse => "Knowledge Collapse",
        }
    }
}

pub fn collapse_risk(retention: f64) -> f64 {
    (COLLAPSE_BASELINE + (100.0 - retention) * COLLAPSE_PER_POINT).min(100.0)
}

pub fn recovery_years(collapse_risk: f64) -> f64 {
    collapse_risk * RECOVERY_YEARS_PER_POINT
}

pub fn project_series(regime: TransferRegime, axis: &YearAxis) -> SeriesProjection {
    let retention: Vec<f64> = linear_decay(axis, regime.attrition_rate())
        .into_iter()
        .map(|r| r.max(0.0))
        .collect();
    let risk: Vec<f64> = retention.iter().map(|&r| collapse_risk(r)).collect();
    let recovery = risk.iter().map(|&c| recovery_years(c)).collect();

    SeriesProjection {
        module: TransferRegime::MODULE,
        scenario: regime.label(),
        years: axis.years(),
        indicators: vec![
            Indicator {
                name: "retention",
                unit: "index",
                values: retention,
            },
            Indicator {
                name: "collapse_risk",
                unit: "%",
                values: risk,
            },
            Indicator {
                name: "recovery_years",
                unit: "years",
                values: recovery,
            },
        ],
    }
}

pub fn project(regime: TransferRegime) -> SeriesProjection {
    project_series(regime, &AXIS)
}

pub fn project_label(label: &str) -> Result<SeriesProjection, ProjectionError> {
    Ok(project(TransferRegime::from_label(label)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mentorship_2030() {
        let p = project(TransferRegime::Mentorship);
        let r = p.value_at("retention", 2030).unwrap();
        assert!((r - 97.0).abs() < 1e-9, "got {r}");
        let c = p.value_at("collapse_risk", 2030).unwrap();
        assert!((c - 5.3).abs() < 1e-9, "got {c}");
    }

    #[test]
    fn test_collapse_retention_floors_at_zero() {
        let p = project(TransferRegime::Collapse);
        // 100 - 50 * 2.5 would be -25
        assert_eq!(p.value_at("retention", 2075), Some(0.0));
        assert_eq!(p.value_at("collapse_risk", 2075), Some(100.0));
        let rec = p.value_at("recovery_years", 2075).unwrap();
        assert!((rec - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_collapse_risk_cap() {
        assert_eq!(collapse_risk(0.0), 100.0);
        assert!((collapse_risk(100.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_risk_non_decreasing_for_all_regimes() {
        for &regime in TransferRegime::ALL {
            let p = project(regime);
            let risk = &p.indicator("collapse_risk").unwrap().values;
            assert_eq!(risk.len(), AXIS.len());
            assert!(risk.windows(2).all(|w| w[1] >= w[0]), "{}", regime.label());
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(
            TransferRegime::from_label("Retirement Cliff"),
            Ok(TransferRegime::RetirementCliff)
        );
        assert!(project_label("Brain Drain").is_err());
    }
}

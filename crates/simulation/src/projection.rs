//! Shared result shapes for the projection modules.
//!
//! Time-series modules return a [`SeriesProjection`]: one [`Indicator`] per
//! tracked quantity, every indicator aligned index-for-index with the year
//! axis. Any result can be flattened into a [`ProjectionTable`] (ordered
//! column names plus aligned rows) for export.

use serde::Serialize;

use crate::error::ProjectionError;
use crate::year_axis::YearAxis;

// =============================================================================
// Scenario selectors
// =============================================================================

/// A module's fixed, ordered set of named scenarios.
pub trait ScenarioSet: Copy + PartialEq + Sized + 'static {
    /// Module name used in error messages and export file names.
    const MODULE: &'static str;

    /// Every member, in display order.
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    /// Parse a display label. Labels are matched exactly.
    fn from_label(label: &str) -> Result<Self, ProjectionError> {
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.label() == label)
            .ok_or_else(|| ProjectionError::UnknownScenario {
                module: Self::MODULE,
                label: label.to_string(),
            })
    }
}

// =============================================================================
// Time series
// =============================================================================

/// One tracked quantity over the year axis. `values` lines up with the
/// owning projection's `years`; a shorter vector leaves trailing years blank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Indicator {
    pub name: &'static str,
    pub unit: &'static str,
    pub values: Vec<f64>,
}

/// All indicators of one module for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesProjection {
    pub module: &'static str,
    pub scenario: &'static str,
    pub years: Vec<i32>,
    pub indicators: Vec<Indicator>,
}

impl SeriesProjection {
    pub fn indicator(&self, name: &str) -> Option<&Indicator> {
        self.indicators.iter().find(|i| i.name == name)
    }

    /// Value of indicator `name` at calendar `year`, if both exist.
    pub fn value_at(&self, name: &str, year: i32) -> Option<f64> {
        let idx = self.years.iter().position(|&y| y == year)?;
        self.indicator(name)?.values.get(idx).copied()
    }

    /// Flatten into a `year` column followed by one column per indicator.
    pub fn to_table(&self) -> ProjectionTable {
        let mut columns = Vec::with_capacity(self.indicators.len() + 1);
        columns.push("year".to_string());
        columns.extend(self.indicators.iter().map(|i| i.name.to_string()));

        let rows = self
            .years
            .iter()
            .enumerate()
            .map(|(idx, &year)| {
                let mut row = Vec::with_capacity(columns.len());
                row.push(TableValue::Integer(year as i64));
                row.extend(self.indicators.iter().map(|i| match i.values.get(idx) {
                    Some(&v) => TableValue::Number(v),
                    None => TableValue::Text(String::new()),
                }));
                row
            })
            .collect();

        ProjectionTable { columns, rows }
    }
}

/// Quality that loses `rate` points per calendar year since the axis start.
pub fn linear_decay(axis: &YearAxis, rate: f64) -> Vec<f64> {
    axis.years()
        .into_iter()
        .map(|y| 100.0 - axis.elapsed_years(y) as f64 * rate)
        .collect()
}

/// Index compounding by `base` once per axis step (not per calendar year).
pub fn compounding(axis: &YearAxis, base: f64) -> Vec<f64> {
    (0..axis.len())
        .map(|i| 100.0 * base.powi(i as i32))
        .collect()
}

// =============================================================================
// Tabular shape
// =============================================================================

/// A single cell in a [`ProjectionTable`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TableValue {
    Integer(i64),
    Number(f64),
    Text(String),
}

/// Ordered column names plus rows aligned to them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectionTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<TableValue>>,
}

impl ProjectionTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

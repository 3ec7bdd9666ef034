//! Module A: minimum viable cost of life.
//!
//! Sums a fixed monthly budget for a working adult and compares it against a
//! handful of reference income tiers (plus an optional user-entered income).

use serde::Serialize;

use crate::projection::{ProjectionTable, TableValue};

/// Monthly cost per essential category (USD).
pub const COST_CATEGORIES: [(&str, f64); 8] = [
    ("Rent/Mortgage", 1500.0),
    ("Food & Water", 450.0),
    ("Transportation", 700.0),
    ("Health Care", 450.0),
    ("Energy & Utilities", 350.0),
    ("Education/Upskilling", 200.0),
    ("Clothing & Hygiene", 150.0),
    ("Other Essentials", 200.0),
];

/// Monthly full-time gross income per wage tier (USD).
pub const INCOME_TIERS: [(&str, f64); 4] = [
    ("Minimum Wage (Full-Time, $7.25/hr)", 1160.0),
    ("Low Wage ($12/hr)", 1920.0),
    ("Living Wage ($20/hr)", 3200.0),
    ("Median Wage ($30/hr)", 4800.0),
];

pub const CUSTOM_INCOME_MIN: f64 = 0.0;
pub const CUSTOM_INCOME_MAX: f64 = 10_000.0;
pub const CUSTOM_INCOME_STEP: f64 = 50.0;
pub const CUSTOM_INCOME_DEFAULT: f64 = 3200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BudgetStatus {
    Surplus,
    BreakEven,
    Deficit,
}

impl BudgetStatus {
    pub fn label(self) -> &'static str {
        match self {
            BudgetStatus::Surplus => "Surplus",
            BudgetStatus::BreakEven => "Break-even",
            BudgetStatus::Deficit => "Deficit",
        }
    }

    fn from_surplus(surplus: f64) -> Self {
        if surplus > 0.0 {
            BudgetStatus::Surplus
        } else if surplus < 0.0 {
            BudgetStatus::Deficit
        } else {
            BudgetStatus::BreakEven
        }
    }
}

/// How one income compares to the monthly cost of survival.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetOutcome {
    pub label: String,
    pub income: f64,
    /// `income - total cost`; negative for a deficit.
    pub surplus: f64,
    pub status: BudgetStatus,
}

impl BudgetOutcome {
    /// Size of the surplus or deficit, always non-negative.
    pub fn magnitude(&self) -> f64 {
        self.surplus.abs()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostOfLivingReport {
    pub total_monthly_cost: f64,
    pub tiers: Vec<BudgetOutcome>,
}

impl CostOfLivingReport {
    pub fn to_table(&self) -> ProjectionTable {
        let columns = ["tier", "income", "total_cost", "surplus", "status"]
            .iter()
            .map(|c| c.to_string())
            .collect();
        let rows = self
            .tiers
            .iter()
            .map(|t| {
                vec![
                    TableValue::Text(t.label.clone()),
                    TableValue::Number(t.income),
                    TableValue::Number(self.total_monthly_cost),
                    TableValue::Number(t.surplus),
                    TableValue::Text(t.status.label().to_string()),
                ]
            })
            .collect();
        ProjectionTable { columns, rows }
    }
}

pub fn monthly_cost_total() -> f64 {
    COST_CATEGORIES.iter().map(|(_, cost)| cost).sum()
}

pub fn classify_income(label: &str, income: f64) -> BudgetOutcome {
    let surplus = income - monthly_cost_total();
    BudgetOutcome {
        label: label.to_string(),
        income,
        surplus,
        status: BudgetStatus::from_surplus(surplus),
    }
}

pub fn project_cost_of_living() -> CostOfLivingReport {
    CostOfLivingReport {
        total_monthly_cost: monthly_cost_total(),
        tiers: INCOME_TIERS
            .iter()
            .map(|&(label, income)| classify_income(label, income))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_sum_to_4000() {
        assert!((monthly_cost_total() - 4000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_minimum_wage_deficit() {
        let outcome = classify_income("min", 1160.0);
        assert_eq!(outcome.status, BudgetStatus::Deficit);
        assert!((outcome.surplus + 2840.0).abs() < f64::EPSILON);
        assert!((outcome.magnitude() - 2840.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_median_wage_surplus() {
        let outcome = classify_income("median", 4800.0);
        assert_eq!(outcome.status, BudgetStatus::Surplus);
        assert!((outcome.magnitude() - 800.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_exact_cost_is_break_even() {
        let outcome = classify_income("exact", 4000.0);
        assert_eq!(outcome.status, BudgetStatus::BreakEven);
        assert_eq!(outcome.status.label(), "Break-even");
        assert!(outcome.magnitude().abs() < f64::EPSILON);
    }

    #[test]
    fn test_report_covers_all_tiers_in_order() {
        let report = project_cost_of_living();
        assert_eq!(report.tiers.len(), INCOME_TIERS.len());
        for (outcome, (label, income)) in report.tiers.iter().zip(INCOME_TIERS.iter()) {
            assert_eq!(outcome.label, *label);
            assert!((outcome.income - income).abs() < f64::EPSILON);
        }
        let statuses: Vec<BudgetStatus> = report.tiers.iter().map(|t| t.status).collect();
        assert_eq!(
            statuses,
            vec![
                BudgetStatus::Deficit,
                BudgetStatus::Deficit,
                BudgetStatus::Deficit,
                BudgetStatus::Surplus
            ]
        );
    }

    #[test]
    fn test_report_table_shape() {
        let table = project_cost_of_living().to_table();
        assert_eq!(table.columns.len(), 5);
        assert_eq!(table.rows.len(), 4);
        assert_eq!(table.rows[3][4], TableValue::Text("Surplus".to_string()));
    }
}

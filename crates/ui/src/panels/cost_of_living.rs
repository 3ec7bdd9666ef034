use bevy_egui::egui;
use simulation::cost_of_living::{
    BudgetOutcome, BudgetStatus, COST_CATEGORIES, CUSTOM_INCOME_MAX, CUSTOM_INCOME_MIN,
    CUSTOM_INCOME_STEP,
};
use simulation::{Projections, ScenarioSelection};

use super::widgets::{self, ExportQueue};
use crate::charts;
use crate::formatting::{format_dollars, status_color, COLOR_BAD, COLOR_GOOD, COLOR_NEUTRAL};

fn outcome_line(ui: &mut egui::Ui, outcome: &BudgetOutcome) {
    let color = status_color(outcome.status);
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
        ui.painter().circle_filled(rect.center(), 5.0, color);
        ui.label(format!(
            "{}: {} \u{2192} {} of {}",
            outcome.label,
            format_dollars(outcome.income),
            outcome.status.label(),
            format_dollars(outcome.magnitude()),
        ));
    });
}

/// Abbreviated tier name for bar labels, e.g. "Minimum Wage".
fn short_tier(label: &str) -> &str {
    label.split(" (").next().unwrap_or(label)
}

pub(crate) fn cost_of_living_panel(
    ui: &mut egui::Ui,
    selection: &mut ScenarioSelection,
    projections: &Projections,
    queue: &mut ExportQueue,
) {
    let report = &projections.cost_of_living;

    ui.heading("Minimum Viable Cost of Life");
    ui.label(
        "Baseline monthly cost of sustaining a working adult in the U.S., using \
         conservative averages across major living needs.",
    );

    egui::Grid::new("cost_categories")
        .striped(true)
        .num_columns(2)
        .show(ui, |ui| {
            for (category, cost) in COST_CATEGORIES {
                ui.label(category);
                ui.label(format_dollars(cost));
                ui.end_row();
            }
            ui.label(egui::RichText::new("Total").strong());
            ui.label(egui::RichText::new(format_dollars(report.total_monthly_cost)).strong());
            ui.end_row();
        });

    ui.label(
        egui::RichText::new(format!(
            "Estimated monthly cost of survival: {}",
            format_dollars(report.total_monthly_cost)
        ))
        .strong(),
    );
    ui.separator();

    for outcome in &report.tiers {
        outcome_line(ui, outcome);
    }

    let bars: Vec<(&str, f64, egui::Color32)> = report
        .tiers
        .iter()
        .map(|o| (short_tier(&o.label), o.surplus, status_color(o.status)))
        .collect();
    charts::draw_bar_chart(ui, &bars, charts::CHART_WIDTH, 180.0);
    ui.horizontal(|ui| {
        charts::legend_item(ui, COLOR_GOOD, BudgetStatus::Surplus.label());
        charts::legend_item(ui, COLOR_NEUTRAL, BudgetStatus::BreakEven.label());
        charts::legend_item(ui, COLOR_BAD, BudgetStatus::Deficit.label());
    });

    ui.separator();
    ui.add(
        egui::Slider::new(&mut selection.custom_income, CUSTOM_INCOME_MIN..=CUSTOM_INCOME_MAX)
            .step_by(CUSTOM_INCOME_STEP)
            .prefix("$")
            .text("Your monthly income"),
    );
    let custom = &projections.custom_income;
    widgets::metric_card(
        ui,
        custom.status.label(),
        &format_dollars(custom.surplus),
        Some(status_color(custom.status)),
    );

    widgets::export_buttons(
        ui,
        "cost_of_living".to_string(),
        "Cost of living by income tier".to_string(),
        || report.to_table(),
        queue,
    );
    widgets::callout(
        ui,
        "Even low-surplus wage levels leave little room for savings, investment or \
         education. Many households operate at or below systemic break-even.",
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_tier_strips_parenthetical() {
        assert_eq!(short_tier("Minimum Wage (Full-Time, $7.25/hr)"), "Minimum Wage");
        assert_eq!(short_tier("Median Wage ($30/hr)"), "Median Wage");
        assert_eq!(short_tier("Custom"), "Custom");
    }
}

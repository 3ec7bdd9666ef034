use bevy_egui::egui;
use simulation::{Projections, ScenarioSelection};

use super::widgets::{self, ExportQueue};
use crate::charts::LineStyle;
use crate::formatting::{format_index, format_percent};

const LINES: [(&str, &str, LineStyle); 3] = [
    ("debt_burden", "Household Debt Burden (2025 = 100)", LineStyle::Solid),
    ("upward_mobility", "Upward Mobility (%)", LineStyle::Dashed),
    ("wealth_lock_in", "Wealth Lock-in (% of households)", LineStyle::Dashed),
];

pub(crate) fn debt_panel(
    ui: &mut egui::Ui,
    selection: &mut ScenarioSelection,
    projections: &Projections,
    queue: &mut ExportQueue,
) {
    ui.heading("Debt Systems, Wealth Lock-in and Social Mobility");
    ui.label(
        "How lending policy shapes household debt burden, and how that burden \
         narrows upward mobility and locks wealth in place.",
    );
    widgets::bullets(
        ui,
        "Key assumptions:",
        &[
            "Debt burden compounds annually under each policy",
            "Mobility falls along a piecewise-linear curve as burden rises",
            "Lock-in grows linearly with burden above the 2025 baseline",
        ],
    );
    ui.separator();

    widgets::scenario_combo(ui, "Debt policy", &mut selection.debt);

    let p = &projections.debt;
    let year = widgets::final_year(p);
    let at_end = |name| widgets::final_value(p, name).unwrap_or_default();
    ui.horizontal_wrapped(|ui| {
        widgets::metric_card(ui, &format!("Debt burden in {year}"), &format_index(at_end("debt_burden")), None);
        widgets::metric_card(ui, "Upward mobility", &format_percent(at_end("upward_mobility")), None);
        widgets::metric_card(ui, "Wealth lock-in", &format_percent(at_end("wealth_lock_in")), None);
    });

    ui.label(egui::RichText::new(format!("Projected debt and mobility: {}", p.scenario)).strong());
    widgets::series_chart(ui, p, &LINES);
    widgets::series_export_buttons(ui, p, queue);

    widgets::callout(
        ui,
        "Illustrative scenario: mobility breakpoints and growth rates are assumptions, \
         not calibrated forecasts.",
    );
}

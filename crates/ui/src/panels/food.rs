use bevy_egui::egui;
use simulation::{Projections, ScenarioSelection};

use super::widgets::{self, ExportQueue};
use crate::charts::LineStyle;
use crate::formatting::{format_dollars, format_index, format_percent};

const LINES: [(&str, &str, LineStyle); 3] = [
    ("capacity", "Food System Capacity (2025 = 100)", LineStyle::Solid),
    ("food_insecurity", "Food Insecurity (%)", LineStyle::Dashed),
    ("emergency_food_cost", "Emergency Food Cost ($/capita/yr)", LineStyle::Dashed),
];

pub(crate) fn food_panel(
    ui: &mut egui::Ui,
    selection: &mut ScenarioSelection,
    projections: &Projections,
    queue: &mut ExportQueue,
) {
    ui.heading("Food System Capacity");
    ui.label(
        "Agricultural efficiency against labor and soil constraints: how productive \
         capacity drives food insecurity and emergency food spending.",
    );
    widgets::bullets(
        ui,
        "Scenarios:",
        &[
            "Regenerative Investment: soil and workforce renewal lift capacity",
            "Status Quo: capacity holds flat",
            "Soil Depletion: slow erosion of yields",
            "Supply Shock: rapid loss from climate and supply-chain disruption",
        ],
    );
    ui.separator();

    widgets::scenario_combo(ui, "Food system scenario", &mut selection.food);

    let p = &projections.food;
    let year = widgets::final_year(p);
    let at_end = |name| widgets::final_value(p, name).unwrap_or_default();
    ui.horizontal_wrapped(|ui| {
        widgets::metric_card(ui, &format!("Capacity in {year}"), &format_index(at_end("capacity")), None);
        widgets::metric_card(ui, "Food insecurity", &format_percent(at_end("food_insecurity")), None);
        widgets::metric_card(
            ui,
            "Emergency food cost",
            &format_dollars(at_end("emergency_food_cost")),
            None,
        );
    });

    ui.label(egui::RichText::new(format!("Projected food system capacity: {}", p.scenario)).strong());
    widgets::series_chart(ui, p, &LINES);
    widgets::series_export_buttons(ui, p, queue);

    widgets::callout(
        ui,
        "Illustrative scenario: growth rates are assumptions chosen to contrast \
         trajectories, not calibrated forecasts.",
    );
}

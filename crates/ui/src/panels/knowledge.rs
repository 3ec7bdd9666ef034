use bevy_egui::egui;
use simulation::{Projections, ScenarioSelection};

use super::widgets::{self, ExportQueue};
use crate::charts::LineStyle;
use crate::formatting::{format_index, format_percent};

const LINES: [(&str, &str, LineStyle); 3] = [
    ("retention", "Institutional Knowledge Retention (0-100)", LineStyle::Markers),
    ("collapse_risk", "Collapse Risk (%)", LineStyle::Dashed),
    ("recovery_years", "Recovery Time (years)", LineStyle::Dashed),
];

pub(crate) fn knowledge_panel(
    ui: &mut egui::Ui,
    selection: &mut ScenarioSelection,
    projections: &Projections,
    queue: &mut ExportQueue,
) {
    ui.heading("Knowledge Attrition, Inheritance and Collapse Prevention");
    ui.label(
        "How well skills and institutional knowledge pass between generations, and \
         what losing them costs in collapse risk and recovery time.",
    );
    widgets::bullets(
        ui,
        "Scenarios:",
        &[
            "Institutional Archiving: documented, searchable, maintained",
            "Mentorship Networks: tacit knowledge passed hand to hand",
            "Retirement Cliff: experienced workers leave without successors",
            "Knowledge Collapse: transfer breaks down entirely",
        ],
    );
    ui.separator();

    widgets::scenario_combo(ui, "Knowledge transfer regime", &mut selection.knowledge);

    let p = &projections.knowledge;
    let year = widgets::final_year(p);
    let at_end = |name| widgets::final_value(p, name).unwrap_or_default();
    ui.horizontal_wrapped(|ui| {
        widgets::metric_card(ui, &format!("Retention in {year}"), &format_index(at_end("retention")), None);
        widgets::metric_card(ui, "Collapse risk", &format_percent(at_end("collapse_risk")), None);
        widgets::metric_card(
            ui,
            "Recovery time",
            &format!("{:.1} years", at_end("recovery_years")),
            None,
        );
    });

    ui.label(egui::RichText::new(format!("Projected knowledge retention: {}", p.scenario)).strong());
    widgets::series_chart(ui, p, &LINES);
    widgets::series_export_buttons(ui, p, queue);

    widgets::callout(
        ui,
        "Illustrative scenario: attrition rates are assumptions chosen to contrast \
         trajectories, not calibrated forecasts.",
    );
}

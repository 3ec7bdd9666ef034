use bevy_egui::egui;
use simulation::{Projections, ScenarioSelection};

use super::widgets::{self, ExportQueue};
use crate::charts::LineStyle;
use crate::formatting::{format_dollars, format_index, format_percent};

const LINES: [(&str, &str, LineStyle); 5] = [
    ("quality", "Infrastructure Quality (0-100)", LineStyle::Solid),
    ("power_outage_risk", "Power Outage Risk (%)", LineStyle::Dashed),
    ("healthcare_risk", "Healthcare Risk (%)", LineStyle::Dashed),
    ("commute_delay", "Commute Delay (hrs/mo)", LineStyle::Dashed),
    ("repair_cost", "Repair Cost ($/yr)", LineStyle::Dashed),
];

pub(crate) fn infrastructure_panel(
    ui: &mut egui::Ui,
    selection: &mut ScenarioSelection,
    projections: &Projections,
    queue: &mut ExportQueue,
) {
    ui.heading("Infrastructure Decay vs Investment");
    ui.label(
        "How investment levels change infrastructure quality over time, and how that \
         turns into power outages, commute disruption and repair burdens.",
    );
    widgets::bullets(
        ui,
        "Scenarios:",
        &[
            "High Investment: maintains quality",
            "Moderate Investment: slow decline",
            "Low Investment: accelerated decay",
            "Neglect: rapid systemic failure",
        ],
    );
    ui.separator();

    widgets::scenario_combo(ui, "Infrastructure investment level", &mut selection.infrastructure);

    let p = &projections.infrastructure;
    let year = widgets::final_year(p);
    let at_end = |name| widgets::final_value(p, name).unwrap_or_default();
    ui.horizontal_wrapped(|ui| {
        widgets::metric_card(ui, &format!("Quality in {year}"), &format_index(at_end("quality")), None);
        widgets::metric_card(
            ui,
            "Power outage risk",
            &format_percent(at_end("power_outage_risk")),
            None,
        );
        widgets::metric_card(
            ui,
            "Commute delay",
            &format!("{:.1} hrs/mo", at_end("commute_delay")),
            None,
        );
        widgets::metric_card(ui, "Repair cost", &format_dollars(at_end("repair_cost")), None);
    });

    ui.label(
        egui::RichText::new(format!(
            "Projected system decay and human impact: {}",
            p.scenario
        ))
        .strong(),
    );
    widgets::series_chart(ui, p, &LINES);
    widgets::series_export_buttons(ui, p, queue);

    widgets::sources(
        ui,
        &[
            "American Society of Civil Engineers (ASCE) Infrastructure Report Card",
            "Federal Transit Administration: Urban Commute Data",
            "Department of Energy: Grid Reliability & Outage Costs",
            "Kaiser Family Foundation (KFF): Environmental & Infrastructure Health Impacts",
            "U.S. Census & GAO estimates on public works and deferred maintenance",
        ],
    );
    widgets::callout(
        ui,
        "Modest underinvestment compounds into large human burdens. Deferred \
         maintenance today multiplies systemic fragility tomorrow.",
    );
}

use bevy_egui::egui;
use simulation::stability::{UBI_MAX, UBI_MIN, UBI_STEP};
use simulation::{Projections, ScenarioSelection};

use super::widgets::{self, ExportQueue};
use crate::charts::{self, LineSeries, LineStyle};
use crate::formatting::{format_index, format_percent};

const CURVE_LABELS: [(&str, &str); 4] = [
    ("stress", "Societal Stress Index (lower is better)"),
    ("education", "Education Participation (%)"),
    ("health_savings", "Emergency Health Cost Reduction (%)"),
    ("biz_growth", "Small Business Growth (%)"),
];

pub(crate) fn stability_panel(
    ui: &mut egui::Ui,
    selection: &mut ScenarioSelection,
    projections: &Projections,
    queue: &mut ExportQueue,
) {
    ui.heading("Stability & Work Redistribution");
    ui.label(
        "Simulates how income stabilization changes societal stress, economic \
         participation and long-term productivity.",
    );
    widgets::bullets(
        ui,
        "Key assumptions:",
        &[
            "Stabilization amount per adult per month",
            "Reduction in healthcare and emergency costs",
            "Increase in education participation and small business creation",
            "Corporate gains from a healthier, more creative society",
        ],
    );
    ui.separator();

    ui.add(
        egui::Slider::new(&mut selection.ubi, UBI_MIN..=UBI_MAX)
            .step_by(UBI_STEP)
            .prefix("$")
            .text("UBI per adult per month"),
    );

    let m = &projections.stability;
    ui.horizontal_wrapped(|ui| {
        widgets::metric_card(ui, "Stress Index (lower is better)", &format_index(m.stress), None);
        widgets::metric_card(ui, "Health Cost Reduction", &format_percent(m.health_savings), None);
        widgets::metric_card(ui, "Education Uptake", &format_percent(m.education), None);
        widgets::metric_card(ui, "Small Biz Growth", &format_percent(m.biz_growth), None);
    });

    ui.add_space(6.0);
    ui.label(egui::RichText::new("Impacts of monthly stability support").strong());
    let curve = &projections.stability_curve;
    let series: Vec<LineSeries<'_>> = CURVE_LABELS
        .iter()
        .enumerate()
        .filter_map(|(i, &(name, label))| {
            curve
                .indicators
                .iter()
                .find(|ind| ind.name == name)
                .map(|ind| LineSeries {
                    label,
                    values: &ind.values,
                    color: charts::palette_color(i),
                    style: LineStyle::Markers,
                })
        })
        .collect();
    charts::draw_line_chart(
        ui,
        &curve.ubi_levels,
        &series,
        charts::CHART_WIDTH,
        charts::CHART_HEIGHT,
    );
    charts::legend(ui, &series);
    ui.small("x: monthly stabilization amount per adult ($)");

    ui.horizontal(|ui| {
        widgets::export_buttons(
            ui,
            "stability_selected".to_string(),
            format!("Stability at ${:.0}/month", m.ubi),
            || m.to_table(),
            queue,
        );
        ui.separator();
        widgets::export_buttons(
            ui,
            "stability_curve".to_string(),
            "Stability across UBI levels".to_string(),
            || curve.to_table(),
            queue,
        );
    });

    widgets::sources(
        ui,
        &[
            "Education benefit estimates adapted from OECD and U.S. Census models",
            "Health cost impacts from Medicaid expansion studies (KFF)",
            "Entrepreneurial growth data from World Bank and small business grants",
            "Stress data from APA national workforce stress surveys",
        ],
    );
    widgets::callout(
        ui,
        "Even modest stabilization ripples through society, reducing emergency costs \
         and unlocking participation in education, care work and entrepreneurship.",
    );
}

use bevy_egui::egui;
use simulation::{Projections, ScenarioSelection};

use super::widgets::{self, ExportQueue};
use crate::charts::LineStyle;
use crate::formatting::{format_index, format_percent};

const LINES: [(&str, &str, LineStyle); 2] = [
    ("opportunity", "Opportunity Index (2025 = 100)", LineStyle::Markers),
    ("incarceration_risk", "Incarceration Risk (%)", LineStyle::Dashed),
];

pub(crate) fn education_panel(
    ui: &mut egui::Ui,
    selection: &mut ScenarioSelection,
    projections: &Projections,
    queue: &mut ExportQueue,
) {
    ui.heading("Education Access & Generational Opportunity");
    ui.label(
        "How access to affordable, high-quality education affects generational \
         mobility, wage growth and community development.",
    );
    widgets::bullets(
        ui,
        "Scenarios:",
        &[
            "High Access: universal, low-cost, local education and training",
            "Moderate Access: public K-12, some trade and college affordability",
            "Limited Access: debt-heavy higher education, weak vocational systems",
            "Education Desert: poor school quality, minimal post-secondary access",
        ],
    );
    ui.separator();

    widgets::scenario_combo(ui, "Education access level", &mut selection.education);

    let p = &projections.education;
    let year = widgets::final_year(p);
    ui.horizontal_wrapped(|ui| {
        widgets::metric_card(
            ui,
            &format!("Opportunity index in {year}"),
            &format_index(widgets::final_value(p, "opportunity").unwrap_or_default()),
            None,
        );
        widgets::metric_card(
            ui,
            "Incarceration risk",
            &format_percent(widgets::final_value(p, "incarceration_risk").unwrap_or_default()),
            None,
        );
    });

    ui.label(
        egui::RichText::new(format!("Projected intergenerational opportunity: {}", p.scenario))
            .strong(),
    );
    widgets::series_chart(ui, p, &LINES);
    widgets::series_export_buttons(ui, p, queue);

    widgets::sources(
        ui,
        &[
            "Brookings: Education & Lifetime Earnings",
            "U.S. Dept of Ed: Access Metrics, School Funding, and Attainment",
            "Pew & Urban Institute: Intergenerational Mobility",
            "OECD: Global Education Equity Models",
            "Vera Institute: Education & Incarceration Risk Reduction",
        ],
    );
    widgets::callout(
        ui,
        "Education is infrastructure. When communities are cut off from learning, \
         the effects cascade across generations.",
    );
}

//! Building blocks shared by every module panel.

use bevy_egui::egui;
use export::{ExportFormat, ExportRequest};
use simulation::catalogue::file_stem;
use simulation::{ProjectionTable, ScenarioSet, SeriesProjection};

use crate::charts::{self, LineSeries, LineStyle};

/// Export requests queued while the panel is being drawn; sent as events
/// once the egui pass is done.
pub(crate) type ExportQueue = Vec<ExportRequest>;

pub(crate) fn metric_card(ui: &mut egui::Ui, label: &str, value: &str, color: Option<egui::Color32>) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(150.0);
        ui.vertical(|ui| {
            ui.small(label);
            let text = egui::RichText::new(value).size(22.0).strong();
            match color {
                Some(c) => ui.label(text.color(c)),
                None => ui.label(text),
            };
        });
    });
}

pub(crate) fn scenario_combo<S: ScenarioSet>(ui: &mut egui::Ui, label: &str, value: &mut S) {
    egui::ComboBox::from_label(label)
        .selected_text(value.label())
        .width(220.0)
        .show_ui(ui, |ui| {
            for &scenario in S::ALL {
                ui.selectable_value(value, scenario, scenario.label());
            }
        });
}

/// Bullet list rendered as plain labels.
pub(crate) fn bullets(ui: &mut egui::Ui, heading: &str, items: &[&str]) {
    ui.label(egui::RichText::new(heading).strong());
    for item in items {
        ui.label(format!("  \u{2022} {item}"));
    }
}

pub(crate) fn callout(ui: &mut egui::Ui, text: &str) {
    egui::Frame::group(ui.style())
        .fill(egui::Color32::from_rgb(30, 52, 60))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).italics());
        });
}

/// CSV / JSON / Text buttons; the table is only built when one is clicked.
pub(crate) fn export_buttons(
    ui: &mut egui::Ui,
    stem: String,
    title: String,
    table: impl Fn() -> ProjectionTable,
    queue: &mut ExportQueue,
) {
    ui.horizontal(|ui| {
        ui.label("Export:");
        for format in ExportFormat::ALL {
            if ui.button(format.label()).clicked() {
                queue.push(ExportRequest {
                    stem: stem.clone(),
                    title: title.clone(),
                    table: table(),
                    format,
                });
            }
        }
    });
}

pub(crate) fn series_export_buttons(
    ui: &mut egui::Ui,
    projection: &SeriesProjection,
    queue: &mut ExportQueue,
) {
    export_buttons(
        ui,
        file_stem(projection.module, projection.scenario),
        format!("{}: {}", projection.module, projection.scenario),
        || projection.to_table(),
        queue,
    );
}

/// Chart of the named indicators, with legend labels and line styles given
/// per indicator. Unknown names are skipped.
pub(crate) fn series_chart(
    ui: &mut egui::Ui,
    projection: &SeriesProjection,
    lines: &[(&str, &str, LineStyle)],
) {
    let xs: Vec<f64> = projection.years.iter().map(|&y| f64::from(y)).collect();
    let series: Vec<LineSeries<'_>> = lines
        .iter()
        .enumerate()
        .filter_map(|(i, &(name, label, style))| {
            projection.indicator(name).map(|ind| LineSeries {
                label,
                values: &ind.values,
                color: charts::palette_color(i),
                style,
            })
        })
        .collect();
    charts::draw_line_chart(ui, &xs, &series, charts::CHART_WIDTH, charts::CHART_HEIGHT);
    charts::legend(ui, &series);
}

/// Final value of an indicator over the projection horizon.
pub(crate) fn final_value(projection: &SeriesProjection, name: &str) -> Option<f64> {
    projection
        .indicator(name)
        .and_then(|ind| ind.values.last().copied())
}

pub(crate) fn final_year(projection: &SeriesProjection) -> i32 {
    projection.years.last().copied().unwrap_or_default()
}

pub(crate) fn sources(ui: &mut egui::Ui, items: &[&str]) {
    ui.collapsing("Data sources", |ui| {
        for item in items {
            ui.small(*item);
        }
    });
}

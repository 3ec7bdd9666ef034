//! The dashboard window: tab strip, the active module panel, and an export
//! status bar.

mod cost_of_living;
mod debt;
mod education;
mod food;
mod infrastructure;
mod knowledge;
mod stability;
mod widgets;

use std::path::Path;

use bevy::prelude::*;
use bevy::window::RequestRedraw;
use bevy_egui::{egui, EguiContexts};

use export::{ExportAllRequest, ExportFormat, ExportLog, ExportRequest, ExportSettings};
use simulation::{Projections, ScenarioSelection};

use crate::tabs::{DashboardState, DashboardTab};

const INTRO: &str = "Explore how system-level decisions, from infrastructure to income \
    policy, shape real-world outcomes like housing stability, education access and \
    long-term prosperity. Every figure is an illustrative what-if projection.";

/// One-line summary of the latest export outcome.
pub(crate) fn export_status_text(log: &ExportLog, output_dir: &Path) -> String {
    if let Some(err) = &log.last_error {
        return format!("Export failed: {err}");
    }
    let latest = match log.last_written.as_slice() {
        [] => return format!("Exports are written to {}", output_dir.display()),
        [single] => format!("Wrote {}", single.display()),
        many => format!("Wrote {} files to {}", many.len(), output_dir.display()),
    };
    format!("{latest} ({} this session)", log.total_files)
}

/// Write the edited selection back if it differs. A change asks winit for
/// another frame so the recomputed projections are drawn without waiting for
/// the next input event.
pub(crate) fn commit_selection(
    selection: &mut ResMut<ScenarioSelection>,
    edited: ScenarioSelection,
    redraw: &mut EventWriter<RequestRedraw>,
) -> bool {
    let changed = selection.set_if_neq(edited);
    if changed {
        redraw.send(RequestRedraw);
    }
    changed
}

#[allow(clippy::too_many_arguments)]
pub fn dashboard_ui(
    mut contexts: EguiContexts,
    mut state: ResMut<DashboardState>,
    mut selection: ResMut<ScenarioSelection>,
    projections: Option<Res<Projections>>,
    export_log: Res<ExportLog>,
    settings: Res<ExportSettings>,
    mut export_requests: EventWriter<ExportRequest>,
    mut export_all: EventWriter<ExportAllRequest>,
    mut redraw: EventWriter<RequestRedraw>,
) {
    let ctx = contexts.ctx_mut();

    // Widgets edit a copy so unchanged frames don't trigger a recompute.
    let mut edited = *selection;
    let mut queue = widgets::ExportQueue::new();
    let mut export_all_clicked = false;

    egui::TopBottomPanel::top("dashboard_tabs").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.heading("Systemic Resilience Simulator");
        ui.collapsing("About", |ui| {
            ui.label(INTRO);
        });
        ui.horizontal_wrapped(|ui| {
            for tab in DashboardTab::ALL {
                ui.selectable_value(&mut state.tab, tab, tab.short_label())
                    .on_hover_text(tab.label());
            }
        });
        ui.add_space(4.0);
    });

    egui::TopBottomPanel::bottom("export_status").show(ctx, |ui| {
        ui.horizontal(|ui| {
            egui::ComboBox::from_id_salt("batch_format")
                .selected_text(state.batch_format.label())
                .show_ui(ui, |ui| {
                    for format in ExportFormat::ALL {
                        ui.selectable_value(&mut state.batch_format, format, format.label());
                    }
                });
            if ui.button("Export all scenarios").clicked() {
                export_all_clicked = true;
            }
            ui.separator();
            let status = export_status_text(&export_log, &settings.output_dir);
            if export_log.last_error.is_some() {
                ui.colored_label(crate::formatting::COLOR_BAD, status);
            } else {
                ui.small(status);
            }
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            let Some(projections) = projections.as_deref() else {
                ui.label("Computing projections...");
                return;
            };
            ui.label(egui::RichText::new(state.tab.label()).small().weak());
            match state.tab {
                DashboardTab::Stability => {
                    stability::stability_panel(ui, &mut edited, projections, &mut queue)
                }
                DashboardTab::CostOfLiving => {
                    cost_of_living::cost_of_living_panel(ui, &mut edited, projections, &mut queue)
                }
                DashboardTab::Infrastructure => {
                    infrastructure::infrastructure_panel(ui, &mut edited, projections, &mut queue)
                }
                DashboardTab::Education => {
                    education::education_panel(ui, &mut edited, projections, &mut queue)
                }
                DashboardTab::Food => food::food_panel(ui, &mut edited, projections, &mut queue),
                DashboardTab::Debt => debt::debt_panel(ui, &mut edited, projections, &mut queue),
                DashboardTab::Knowledge => {
                    knowledge::knowledge_panel(ui, &mut edited, projections, &mut queue)
                }
            }
        });
    });

    commit_selection(&mut selection, edited, &mut redraw);

    for request in queue {
        export_requests.send(request);
    }
    if export_all_clicked {
        export_all.send(ExportAllRequest {
            dir: None,
            format: state.batch_format,
        });
    }
}

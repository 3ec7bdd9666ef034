//! Chart widgets shared by the module panels.

mod drawing;

pub(crate) use drawing::{draw_bar_chart, draw_line_chart, legend, legend_item};
pub(crate) use drawing::{LineSeries, LineStyle};

use bevy_egui::egui;

pub(crate) const CHART_WIDTH: f32 = 620.0;
pub(crate) const CHART_HEIGHT: f32 = 240.0;

/// Series colours, assigned in indicator order.
pub(crate) const PALETTE: [egui::Color32; 5] = [
    egui::Color32::from_rgb(64, 178, 170),
    egui::Color32::from_rgb(240, 110, 90),
    egui::Color32::from_rgb(240, 190, 70),
    egui::Color32::from_rgb(140, 130, 230),
    egui::Color32::from_rgb(120, 200, 110),
];

pub(crate) fn palette_color(index: usize) -> egui::Color32 {
    PALETTE[index % PALETTE.len()]
}

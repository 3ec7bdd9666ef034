//! egui dashboard over the simulation modules.
//!
//! Expects `SimulationPlugin` and `ExportPlugin` to be added alongside.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

mod charts;
mod formatting;
pub mod panels;
pub mod tabs;
pub mod theme;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<tabs::DashboardState>()
            .add_systems(Startup, theme::apply_dashboard_theme)
            .add_systems(Update, panels::dashboard_ui);
    }
}

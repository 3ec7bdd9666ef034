use bevy_egui::{egui, EguiContexts};

/// Slate background with teal accents, roomier spacing for metric cards.
pub fn apply_dashboard_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    let panel = egui::Color32::from_rgb(28, 32, 40);
    let card = egui::Color32::from_rgb(38, 43, 54);
    let idle = egui::Color32::from_rgb(48, 54, 68);
    let hover = egui::Color32::from_rgb(62, 92, 104);
    let accent = egui::Color32::from_rgb(64, 178, 170);

    let visuals = &mut style.visuals;
    visuals.panel_fill = panel;
    visuals.window_fill = panel;
    visuals.faint_bg_color = card;
    visuals.extreme_bg_color = egui::Color32::from_rgb(22, 25, 31);

    for (widget, fill) in [
        (&mut visuals.widgets.noninteractive, card),
        (&mut visuals.widgets.inactive, idle),
        (&mut visuals.widgets.hovered, hover),
        (&mut visuals.widgets.active, accent),
    ] {
        widget.bg_fill = fill;
        widget.weak_bg_fill = fill;
        widget.corner_radius = egui::CornerRadius::same(4);
    }

    visuals.selection.bg_fill = accent;
    visuals.selection.stroke = egui::Stroke::new(1.0, accent);
    visuals.window_corner_radius = egui::CornerRadius::same(6);

    style.spacing.item_spacing = egui::vec2(10.0, 8.0);
    style.spacing.slider_width = 320.0;

    ctx.set_style(style);
}

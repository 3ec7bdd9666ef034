//! Painter-based line and bar charts with axis labels and legends.

use bevy_egui::egui;

const Y_LABEL_GUTTER: f32 = 44.0;
const X_LABEL_GUTTER: f32 = 18.0;
const GRID_LINES: usize = 4;
const MAX_X_TICKS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineStyle {
    Solid,
    Dashed,
    Markers,
}

pub(crate) struct LineSeries<'a> {
    pub label: &'a str,
    pub values: &'a [f64],
    pub color: egui::Color32,
    pub style: LineStyle,
}

/// Data-space extent of a chart, padded so lines never touch the frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ChartBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ChartBounds {
    /// `None` when there are fewer than two x values or no finite y value.
    pub fn fit<'a>(xs: &[f64], series: impl IntoIterator<Item = &'a [f64]>) -> Option<Self> {
        if xs.len() < 2 {
            return None;
        }
        let x_min = xs.iter().copied().fold(f64::INFINITY, f64::min);
        let x_max = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for values in series {
            for &v in values.iter().filter(|v| v.is_finite()) {
                y_min = y_min.min(v);
                y_max = y_max.max(v);
            }
        }
        if !y_min.is_finite() || x_max <= x_min {
            return None;
        }

        // Flat series still get a visible band.
        if y_max - y_min < 1.0 {
            let mid = (y_max + y_min) / 2.0;
            y_min = mid - 0.5;
            y_max = mid + 0.5;
        }
        let pad = (y_max - y_min) * 0.05;
        Some(Self {
            x_min,
            x_max,
            y_min: y_min - pad,
            y_max: y_max + pad,
        })
    }

    pub fn to_screen(&self, rect: egui::Rect, x: f64, y: f64) -> egui::Pos2 {
        let tx = ((x - self.x_min) / (self.x_max - self.x_min)) as f32;
        let ty = ((y - self.y_min) / (self.y_max - self.y_min)) as f32;
        egui::pos2(
            rect.min.x + tx * rect.width(),
            rect.max.y - ty * rect.height(),
        )
    }
}

/// Up to `max_ticks` evenly spread indices into a series of `len` points,
/// always including the first and last.
pub(crate) fn tick_indices(len: usize, max_ticks: usize) -> Vec<usize> {
    if len == 0 || max_ticks == 0 {
        return Vec::new();
    }
    if len <= max_ticks {
        return (0..len).collect();
    }
    if max_ticks == 1 {
        return vec![0];
    }
    let last = len - 1;
    let mut ticks: Vec<usize> = (0..max_ticks)
        .map(|i| (i * last + (max_ticks - 1) / 2) / (max_ticks - 1))
        .collect();
    ticks.dedup();
    ticks
}

fn axis_label(value: f64) -> String {
    if value.abs() >= 10.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// Multi-series line chart over shared x values, with gridlines, y labels on
/// the left and x tick labels underneath.
pub(crate) fn draw_line_chart(
    ui: &mut egui::Ui,
    xs: &[f64],
    series: &[LineSeries<'_>],
    width: f32,
    height: f32,
) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 2.0, egui::Color32::from_gray(24));

    let Some(bounds) = ChartBounds::fit(xs, series.iter().map(|s| s.values)) else {
        return;
    };

    let plot = egui::Rect::from_min_max(
        egui::pos2(rect.min.x + Y_LABEL_GUTTER, rect.min.y + 6.0),
        egui::pos2(rect.max.x - 8.0, rect.max.y - X_LABEL_GUTTER),
    );
    let label_color = egui::Color32::from_gray(150);
    let font = egui::FontId::proportional(10.0);

    for i in 0..=GRID_LINES {
        let t = i as f64 / GRID_LINES as f64;
        let value = bounds.y_min + t * (bounds.y_max - bounds.y_min);
        let y = bounds.to_screen(plot, bounds.x_min, value).y;
        painter.line_segment(
            [egui::pos2(plot.min.x, y), egui::pos2(plot.max.x, y)],
            egui::Stroke::new(0.4, egui::Color32::from_gray(55)),
        );
        painter.text(
            egui::pos2(plot.min.x - 4.0, y),
            egui::Align2::RIGHT_CENTER,
            axis_label(value),
            font.clone(),
            label_color,
        );
    }

    for idx in tick_indices(xs.len(), MAX_X_TICKS) {
        let p = bounds.to_screen(plot, xs[idx], bounds.y_min);
        painter.text(
            egui::pos2(p.x, plot.max.y + 3.0),
            egui::Align2::CENTER_TOP,
            format!("{:.0}", xs[idx]),
            font.clone(),
            label_color,
        );
    }

    for s in series {
        let points: Vec<egui::Pos2> = xs
            .iter()
            .zip(s.values)
            .filter(|(_, v)| v.is_finite())
            .map(|(&x, &v)| bounds.to_screen(plot, x, v))
            .collect();
        if points.len() < 2 {
            continue;
        }
        let stroke = egui::Stroke::new(1.8, s.color);
        match s.style {
            LineStyle::Solid => {
                for w in points.windows(2) {
                    painter.line_segment([w[0], w[1]], stroke);
                }
            }
            LineStyle::Dashed => {
                painter.extend(egui::Shape::dashed_line(&points, stroke, 6.0, 4.0));
            }
            LineStyle::Markers => {
                for w in points.windows(2) {
                    painter.line_segment([w[0], w[1]], stroke);
                }
                for p in &points {
                    painter.circle_filled(*p, 3.0, s.color);
                }
            }
        }
    }
}

/// Extent of a bar chart: always includes zero so deficits hang below the
/// baseline.
pub(crate) fn bar_range(values: &[f64]) -> (f64, f64) {
    let lo = values.iter().copied().fold(0.0_f64, f64::min);
    let hi = values.iter().copied().fold(0.0_f64, f64::max);
    if hi - lo < 1.0 {
        (lo, lo + 1.0)
    } else {
        (lo, hi)
    }
}

/// Vertical bars from a zero baseline, one per label.
pub(crate) fn draw_bar_chart(
    ui: &mut egui::Ui,
    bars: &[(&str, f64, egui::Color32)],
    width: f32,
    height: f32,
) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 2.0, egui::Color32::from_gray(24));
    if bars.is_empty() {
        return;
    }

    let values: Vec<f64> = bars.iter().map(|(_, v, _)| *v).collect();
    let (lo, hi) = bar_range(&values);
    let plot = egui::Rect::from_min_max(
        egui::pos2(rect.min.x + 8.0, rect.min.y + 14.0),
        egui::pos2(rect.max.x - 8.0, rect.max.y - X_LABEL_GUTTER),
    );
    let y_of = |v: f64| plot.max.y - ((v - lo) / (hi - lo)) as f32 * plot.height();
    let zero_y = y_of(0.0);
    painter.line_segment(
        [egui::pos2(plot.min.x, zero_y), egui::pos2(plot.max.x, zero_y)],
        egui::Stroke::new(0.8, egui::Color32::from_gray(120)),
    );

    let slot = plot.width() / bars.len() as f32;
    let font = egui::FontId::proportional(10.0);
    for (i, (label, value, color)) in bars.iter().enumerate() {
        let cx = plot.min.x + slot * (i as f32 + 0.5);
        let half = slot * 0.3;
        let top = y_of(*value);
        let bar = egui::Rect::from_min_max(
            egui::pos2(cx - half, top.min(zero_y)),
            egui::pos2(cx + half, top.max(zero_y)),
        );
        painter.rect_filled(bar, 2.0, *color);
        painter.text(
            egui::pos2(cx, plot.max.y + 3.0),
            egui::Align2::CENTER_TOP,
            *label,
            font.clone(),
            egui::Color32::from_gray(170),
        );
    }
}

pub(crate) fn legend_item(ui: &mut egui::Ui, color: egui::Color32, text: &str) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 2.0, color);
    ui.label(text);
}

pub(crate) fn legend(ui: &mut egui::Ui, series: &[LineSeries<'_>]) {
    ui.horizontal_wrapped(|ui| {
        for s in series {
            legend_item(ui, s.color, s.label);
            ui.add_space(8.0);
        }
    });
}

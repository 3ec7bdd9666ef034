//! Number formatting for metric cards.

use bevy_egui::egui;
use simulation::cost_of_living::BudgetStatus;

pub(crate) const COLOR_GOOD: egui::Color32 = egui::Color32::from_rgb(90, 210, 120);
pub(crate) const COLOR_NEUTRAL: egui::Color32 = egui::Color32::from_rgb(230, 200, 70);
pub(crate) const COLOR_BAD: egui::Color32 = egui::Color32::from_rgb(240, 90, 80);

/// Whole dollars with thousands separators, e.g. `-$2,840`.
pub(crate) fn format_dollars(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

pub(crate) fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

pub(crate) fn format_index(value: f64) -> String {
    format!("{value:.1}")
}

pub(crate) fn status_color(status: BudgetStatus) -> egui::Color32 {
    match status {
        BudgetStatus::Surplus => COLOR_GOOD,
        BudgetStatus::BreakEven => COLOR_NEUTRAL,
        BudgetStatus::Deficit => COLOR_BAD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dollars_grouping() {
        assert_eq!(format_dollars(0.0), "$0");
        assert_eq!(format_dollars(800.0), "$800");
        assert_eq!(format_dollars(4000.0), "$4,000");
        assert_eq!(format_dollars(1234567.0), "$1,234,567");
    }

    #[test]
    fn test_dollars_negative() {
        assert_eq!(format_dollars(-2840.0), "-$2,840");
        assert_eq!(format_dollars(-0.2), "$0");
    }

    #[test]
    fn test_percent_and_index() {
        assert_eq!(format_percent(25.0), "25.0%");
        assert_eq!(format_index(70.04), "70.0");
    }

    #[test]
    fn test_status_colors_distinct() {
        assert_ne!(status_color(BudgetStatus::Surplus), status_color(BudgetStatus::Deficit));
        assert_eq!(status_color(BudgetStatus::BreakEven), COLOR_NEUTRAL);
    }
}

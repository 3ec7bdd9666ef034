//! Dashboard tab selection.

use bevy::prelude::*;
use export::ExportFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DashboardTab {
    #[default]
    Stability,
    CostOfLiving,
    Infrastructure,
    Education,
    Food,
    Debt,
    Knowledge,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 7] = [
        DashboardTab::Stability,
        DashboardTab::CostOfLiving,
        DashboardTab::Infrastructure,
        DashboardTab::Education,
        DashboardTab::Food,
        DashboardTab::Debt,
        DashboardTab::Knowledge,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DashboardTab::Stability => "Module G: Stability & Redistribution",
            DashboardTab::CostOfLiving => "Module A: Cost of Living",
            DashboardTab::Infrastructure => "Module B: Infrastructure Decay",
            DashboardTab::Education => "Module C: Education + Generational Opportunity",
            DashboardTab::Food => "Module D: Food System Capacity",
            DashboardTab::Debt => "Module E: Debt + Wealth Lock-in",
            DashboardTab::Knowledge => "Module F: Knowledge Attrition",
        }
    }

    /// Short label for narrow windows.
    pub fn short_label(self) -> &'static str {
        match self {
            DashboardTab::Stability => "G Stability",
            DashboardTab::CostOfLiving => "A Cost of Living",
            DashboardTab::Infrastructure => "B Infrastructure",
            DashboardTab::Education => "C Education",
            DashboardTab::Food => "D Food",
            DashboardTab::Debt => "E Debt",
            DashboardTab::Knowledge => "F Knowledge",
        }
    }
}

/// UI-only state: which tab is open and the format used by "Export all".
#[derive(Resource, Debug, Clone, Default)]
pub struct DashboardState {
    pub tab: DashboardTab,
    pub batch_format: ExportFormat,
}

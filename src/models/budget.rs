use serde::{Deserialize, Serialize};

use crate::models::MealSlots;

/// Budget parameters entered by the user.
///
/// Both fields are clamped to >= 0 by the prompt layer before they reach the
/// calculator.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BudgetInputs {
    pub budget_per_student: f64,
    pub total_students: u32,
}

impl BudgetInputs {
    pub fn new(budget_per_student: f64, total_students: u32) -> Self {
        Self {
            budget_per_student,
            total_students,
        }
    }
}

/// Spending-health classification of the current selection against the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetStatus {
    NoBudget,
    OverBudget,
    HighUtilization,
    LowRemaining,
    Normal,
}

impl BudgetStatus {
    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            BudgetStatus::NoBudget => "no budget",
            BudgetStatus::OverBudget => "over budget",
            BudgetStatus::HighUtilization => "high utilization",
            BudgetStatus::LowRemaining => "low remaining",
            BudgetStatus::Normal => "normal",
        }
    }
}

/// Derived budget figures. Computed on every change, never stored.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BudgetSummary {
    pub total_budget: f64,
    pub total_selection_price: f64,
    pub remaining_budget: f64,
    pub status: BudgetStatus,
}

/// One selected item as it appears in the order table and submission payload.
#[derive(Debug, Clone, Serialize)]
pub struct OrderLine {
    pub item_id: u32,
    pub name: String,
    pub unit_price: f64,
    pub slots: MealSlots,
    pub line_total: f64,
}

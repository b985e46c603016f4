mod budget;
mod item;

pub use budget::{BudgetInputs, BudgetStatus, BudgetSummary, OrderLine};
pub use item::{MealSlots, MealTime, MenuItem};

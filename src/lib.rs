pub mod budget;
pub mod catalog;
pub mod cli;
pub mod context;
pub mod error;
pub mod interface;
pub mod models;
pub mod prefs;
pub mod selection;
pub mod submit;

pub use error::{MessError, Result};
pub use models::{BudgetInputs, BudgetStatus, MealSlots, MealTime, MenuItem};
pub use selection::SelectionStore;

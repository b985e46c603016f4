pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_budget_per_student, prompt_item, prompt_meal_slots, prompt_total_students,
    prompt_yes_no,
};
pub use render::{display_budget_summary, display_catalog, display_order};

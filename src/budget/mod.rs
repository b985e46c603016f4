pub mod calculator;
pub mod constants;

pub use calculator::{
    classify, derive_summary, line_price, order_lines, total_budget, total_selection_price,
    PricingRule,
};
pub use constants::*;

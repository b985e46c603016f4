use crate::models::{BudgetStatus, BudgetSummary, MenuItem, OrderLine};

/// Display the current order as a formatted table with totals.
pub fn display_order(lines: &[OrderLine]) {
    if lines.is_empty() {
        println!("No items selected.");
        return;
    }

    println!();
    println!("=== Current Order ===");
    println!();

    let max_name_len = lines.iter().map(|l| l.name.len()).max().unwrap_or(10);

    for (i, line) in lines.iter().enumerate() {
        println!(
            "{:>3}. {:<width$}  [{}]  {:>8.2} => {:>8.2}",
            i + 1,
            line.name,
            line.slots.display_short(),
            line.unit_price,
            line.line_total,
            width = max_name_len
        );
    }

    let total: f64 = lines.iter().map(|l| l.line_total).sum();
    println!();
    println!("Total items: {}", lines.len());
    println!("Total price: {:.2}", total);
    println!();
}

/// Display the derived budget figures and status.
pub fn display_budget_summary(summary: &BudgetSummary) {
    println!("--- Budget ---");
    println!("Total budget:    {:>10.2}", summary.total_budget);
    println!("Selection price: {:>10.2}", summary.total_selection_price);
    println!("Remaining:       {:>10.2}", summary.remaining_budget);
    println!("Status:          {}", summary.status.label());

    match summary.status {
        BudgetStatus::OverBudget => {
            println!("Warning: selection exceeds the allocated budget.")
        }
        BudgetStatus::HighUtilization => {
            println!("Note: over 80% of the budget is allocated.")
        }
        BudgetStatus::NoBudget => {
            println!("Set a budget and student count to see utilization.")
        }
        _ => {}
    }
    println!();
}

/// Display a simple catalog listing.
pub fn display_catalog(items: &[&MenuItem], title: &str) {
    if items.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, items.len());
    println!();

    for item in items {
        println!(
            "  #{:<3} {:<20} {:>8.2} / {:<8} [{}]{}",
            item.id,
            item.name,
            item.price,
            item.unit,
            item.default_slots.display_short(),
            if item.editable_slots { "" } else { " (fixed)" }
        );
    }

    println!();
}

use crate::budget::constants::*;
use crate::catalog::Catalog;
use crate::models::{BudgetInputs, BudgetStatus, BudgetSummary, MealSlots, OrderLine};
use crate::selection::SelectionStore;

/// How a selected item's price contributes to the selection total.
///
/// The two formulas come from different order-entry screens; the rule is an
/// explicit argument so they are never mixed within one computation.
/// `FlatPerItem` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PricingRule {
    /// Each selected item counts its catalog price once.
    #[default]
    FlatPerItem,

    /// Catalog price multiplied by the number of enabled meal slots.
    PerMealTime,
}

/// Price of one selected item under the given rule.
pub fn line_price(unit_price: f64, slots: &MealSlots, rule: PricingRule) -> f64 {
    match rule {
        PricingRule::FlatPerItem => unit_price,
        PricingRule::PerMealTime => unit_price * slots.active_count() as f64,
    }
}

/// Total allocated budget. Zero if either input is zero.
pub fn total_budget(inputs: &BudgetInputs) -> f64 {
    inputs.budget_per_student * inputs.total_students as f64
}

/// Sum of selected item prices. Selected IDs missing from the catalog
/// contribute nothing.
pub fn total_selection_price(store: &SelectionStore, catalog: &Catalog, rule: PricingRule) -> f64 {
    store
        .iter()
        .filter_map(|(id, slots)| catalog.get(id).map(|item| line_price(item.price, &slots, rule)))
        .sum()
}

/// Classify spending health. First match wins.
pub fn classify(total_budget: f64, total_price: f64) -> BudgetStatus {
    if total_budget == 0.0 {
        return BudgetStatus::NoBudget;
    }
    if total_price > total_budget {
        return BudgetStatus::OverBudget;
    }
    if total_price / total_budget > HIGH_UTILIZATION_RATIO {
        return BudgetStatus::HighUtilization;
    }
    if total_budget - total_price < total_budget * LOW_REMAINING_RATIO {
        return BudgetStatus::LowRemaining;
    }
    BudgetStatus::Normal
}

/// Derive the full budget summary for the current selection.
///
/// Pure: never fails, never does I/O, cheap enough to recompute on every
/// state change.
pub fn derive_summary(
    inputs: &BudgetInputs,
    store: &SelectionStore,
    catalog: &Catalog,
    rule: PricingRule,
) -> BudgetSummary {
    let total = total_budget(inputs);
    let price = total_selection_price(store, catalog, rule);
    BudgetSummary {
        total_budget: total,
        total_selection_price: price,
        remaining_budget: total - price,
        status: classify(total, price),
    }
}

/// Build the order table: one line per selected item, ascending by ID.
pub fn order_lines(store: &SelectionStore, catalog: &Catalog, rule: PricingRule) -> Vec<OrderLine> {
    let mut lines: Vec<OrderLine> = store
        .iter()
        .filter_map(|(id, slots)| {
            catalog.get(id).map(|item| OrderLine {
                item_id: id,
                name: item.name.clone(),
                unit_price: item.price,
                slots,
                line_total: line_price(item.price, &slots, rule),
            })
        })
        .collect();
    lines.sort_unstable_by_key(|l| l.item_id);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MenuItem;

    fn catalog_of(prices: &[(u32, f64)]) -> Catalog {
        Catalog::new(
            prices
                .iter()
                .map(|&(id, price)| MenuItem {
                    id,
                    name: format!("Item {}", id),
                    price,
                    unit: "plate".to_string(),
                    default_slots: MealSlots::all(),
                    editable_slots: true,
                })
                .collect(),
        )
    }

    fn select_all(catalog: &Catalog) -> SelectionStore {
        let mut store = SelectionStore::new();
        for item in catalog.all() {
            store.toggle_item(item);
        }
        store
    }

    #[test]
    fn test_total_budget_zero_inputs() {
        assert_eq!(total_budget(&BudgetInputs::new(0.0, 10)), 0.0);
        assert_eq!(total_budget(&BudgetInputs::new(50.0, 0)), 0.0);
        assert_eq!(total_budget(&BudgetInputs::new(50.0, 10)), 500.0);
    }

    #[test]
    fn test_line_price_rules() {
        let two_slots = MealSlots::new(true, false, true);
        assert_eq!(line_price(40.0, &two_slots, PricingRule::FlatPerItem), 40.0);
        assert_eq!(line_price(40.0, &two_slots, PricingRule::PerMealTime), 80.0);
        assert_eq!(
            line_price(40.0, &MealSlots::none(), PricingRule::PerMealTime),
            0.0
        );
    }

    #[test]
    fn test_unknown_ids_contribute_nothing() {
        let catalog = catalog_of(&[(1, 100.0)]);
        let mut store = select_all(&catalog);

        // Select an item the catalog no longer carries.
        let ghost = MenuItem {
            id: 99,
            name: "Ghost".to_string(),
            price: 500.0,
            unit: "plate".to_string(),
            default_slots: MealSlots::all(),
            editable_slots: false,
        };
        store.toggle_item(&ghost);

        let price = total_selection_price(&store, &catalog, PricingRule::FlatPerItem);
        assert_eq!(price, 100.0);
    }

    #[test]
    fn test_classify_order() {
        assert_eq!(classify(0.0, 0.0), BudgetStatus::NoBudget);
        assert_eq!(classify(0.0, 600.0), BudgetStatus::NoBudget);
        assert_eq!(classify(500.0, 600.0), BudgetStatus::OverBudget);
        assert_eq!(classify(500.0, 450.0), BudgetStatus::HighUtilization);
        assert_eq!(classify(500.0, 250.0), BudgetStatus::Normal);
        assert_eq!(classify(500.0, 0.0), BudgetStatus::Normal);
    }

    #[test]
    fn test_over_budget_beats_utilization() {
        // price > total must win no matter how extreme the ratio
        assert_eq!(classify(1.0, 1000.0), BudgetStatus::OverBudget);
    }

    #[test]
    fn test_derive_summary_scenario() {
        let catalog = catalog_of(&[(1, 100.0), (2, 150.0)]);
        let store = select_all(&catalog);
        let inputs = BudgetInputs::new(50.0, 10);

        let summary = derive_summary(&inputs, &store, &catalog, PricingRule::FlatPerItem);
        assert_eq!(summary.total_budget, 500.0);
        assert_eq!(summary.total_selection_price, 250.0);
        assert_eq!(summary.remaining_budget, 250.0);
        assert_eq!(summary.status, BudgetStatus::Normal);
    }

    #[test]
    fn test_order_lines_sorted_and_priced() {
        let catalog = catalog_of(&[(5, 30.0), (2, 20.0)]);
        let store = select_all(&catalog);

        let lines = order_lines(&store, &catalog, PricingRule::PerMealTime);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].item_id, 2);
        assert_eq!(lines[0].line_total, 60.0); // 20 * 3 slots
        assert_eq!(lines[1].item_id, 5);
        assert_eq!(lines[1].line_total, 90.0);
    }

    #[test]
    fn test_clear_zeroes_totals() {
        let catalog = catalog_of(&[(1, 100.0), (2, 150.0)]);
        let mut store = select_all(&catalog);
        store.clear();

        let price = total_selection_price(&store, &catalog, PricingRule::FlatPerItem);
        assert_eq!(price, 0.0);
        assert!(store.selected_ids().is_empty());
    }
}

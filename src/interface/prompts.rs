use dialoguer::{Confirm, Input, Select};

use crate::catalog::{fuzzy_search, Catalog};
use crate::error::{MessError, Result};
use crate::models::{MealSlots, MealTime, MenuItem};

/// Prompt for the budget per student. Rejects non-numeric and negative input.
pub fn prompt_budget_per_student(default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Budget per student")
        .default(format!("{}", default))
        .interact_text()?;

    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| MessError::InvalidInput("Budget must be a number".to_string()))?;

    if value < 0.0 {
        return Err(MessError::InvalidInput(
            "Budget must not be negative".to_string(),
        ));
    }

    Ok(value)
}

/// Prompt for the number of students. Rejects non-numeric input; the unsigned
/// parse rejects negatives.
pub fn prompt_total_students(default: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("Total students")
        .default(format!("{}", default))
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| MessError::InvalidInput("Student count must be a whole number".to_string()))
}

/// Prompt for an item name, with fuzzy matching against the catalog.
///
/// Empty input means the user is done and yields None.
pub fn prompt_item<'a>(catalog: &'a Catalog) -> Result<Option<&'a MenuItem>> {
    let input: String = Input::new()
        .with_prompt("Item name (or press Enter to go back)")
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let candidates = fuzzy_search(catalog, input);

    if candidates.is_empty() {
        println!("No matching item found for '{}'", input);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let item = candidates[0];
        if item.name.eq_ignore_ascii_case(input) {
            return Ok(Some(item));
        }
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", item.name))
            .default(true)
            .interact()?;
        return Ok(if confirm { Some(item) } else { None });
    }

    // Multiple matches - let the user pick
    let mut options: Vec<String> = candidates.iter().map(|i| i.name.clone()).collect();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(candidates.get(selection).copied())
}

/// Prompt for per-slot flags on an editable item, starting from its current
/// values. Callers must not invoke this for items with fixed meal times.
pub fn prompt_meal_slots(item_name: &str, current: MealSlots) -> Result<MealSlots> {
    let mut slots = current;
    for (label, slot) in [
        ("morning", MealTime::Morning),
        ("afternoon", MealTime::Afternoon),
        ("night", MealTime::Night),
    ] {
        let value = Confirm::new()
            .with_prompt(format!("Serve '{}' at {}?", item_name, label))
            .default(slots.get(slot))
            .interact()?;
        slots.set(slot, value);
    }
    Ok(slots)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

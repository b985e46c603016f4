use clap::Parser;
use dialoguer::Select;
use std::path::Path;

use mess_order_planner::budget::{derive_summary, order_lines};
use mess_order_planner::catalog::{
    builtin_catalog, fuzzy_search, load_catalog_csv, load_catalog_json, Catalog,
};
use mess_order_planner::cli::{Cli, Command};
use mess_order_planner::context::AppContext;
use mess_order_planner::error::Result;
use mess_order_planner::interface::{
    display_budget_summary, display_catalog, display_order, prompt_budget_per_student,
    prompt_item, prompt_meal_slots, prompt_total_students, prompt_yes_no,
};
use mess_order_planner::models::{BudgetInputs, MealTime};
use mess_order_planner::selection::SelectionStore;
use mess_order_planner::submit::{build_payload, JsonFileEndpoint, OrderSession};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Order => cmd_order(&cli.file, &cli.prefs, &cli.out),
        Command::Catalog { query } => cmd_catalog(&cli.file, query.as_deref()),
    }
}

/// Load the catalog by file extension, falling back to the built-in list.
fn load_catalog(file_path: &str) -> Result<Catalog> {
    let path = Path::new(file_path);

    if !path.exists() {
        println!("Catalog file not found: {} (using built-in catalog)", file_path);
        return Ok(builtin_catalog());
    }

    if path.extension().is_some_and(|e| e == "csv") {
        load_catalog_csv(path)
    } else {
        load_catalog_json(path)
    }
}

/// Run an interactive ordering session.
fn cmd_order(file_path: &str, prefs_path: &str, out_path: &str) -> Result<()> {
    let catalog = load_catalog(file_path)?;
    if catalog.is_empty() {
        println!("Catalog is empty; nothing to order.");
        return Ok(());
    }
    println!("Loaded {} catalog items", catalog.len());

    let mut ctx = AppContext::init(None, prefs_path);

    // Budget inputs, seeded from cached preferences.
    let budget_per_student = prompt_budget_per_student(ctx.prefs.budget_per_student)?;
    let total_students = prompt_total_students(ctx.prefs.total_students)?;
    let inputs = BudgetInputs::new(budget_per_student, total_students);
    let rule = ctx.prefs.pricing_rule;

    ctx.prefs.budget_per_student = budget_per_student;
    ctx.prefs.total_students = total_students;
    ctx.save_prefs();

    let mut store = SelectionStore::new();
    let mut session = OrderSession::new();
    let mut endpoint = JsonFileEndpoint::new(out_path);

    const ACTIONS: &[&str] = &[
        "Add or remove an item",
        "Edit meal times",
        "Show order and budget",
        "Clear selection",
        "Cancel changes",
        "Save order",
        "Quit",
    ];

    loop {
        if let Some(msg) = session.last_error() {
            println!("Last submission failed: {}", msg);
        }

        let action = Select::new()
            .with_prompt("What next?")
            .items(ACTIONS)
            .default(0)
            .interact()?;

        match action {
            // Add or remove an item
            0 => {
                display_catalog(&catalog.all(), "Catalog");
                if let Some(item) = prompt_item(&catalog)? {
                    let selected = store.toggle_item(item);
                    session.mark_editing();
                    println!(
                        "{} '{}'",
                        if selected { "Selected" } else { "Removed" },
                        item.name
                    );
                }
            }
            // Edit meal times
            1 => {
                if let Some(item) = prompt_item(&catalog)? {
                    if !store.is_selected(item.id) {
                        println!("'{}' is not selected.", item.name);
                    } else if !item.editable_slots {
                        println!("'{}' has fixed meal times.", item.name);
                    } else if let Some(current) = store.slots(item.id) {
                        let slots = prompt_meal_slots(&item.name, current)?;
                        for slot in [MealTime::Morning, MealTime::Afternoon, MealTime::Night] {
                            store.set_meal_time(item.id, slot, slots.get(slot));
                        }
                        session.mark_editing();
                    }
                }
            }
            // Show order and budget
            2 => {
                display_order(&order_lines(&store, &catalog, rule));
                display_budget_summary(&derive_summary(&inputs, &store, &catalog, rule));
            }
            // Clear selection
            3 => {
                if store.is_empty() || prompt_yes_no("Clear the whole selection?", false)? {
                    store.clear();
                    println!("Selection cleared.");
                }
            }
            // Cancel changes
            4 => {
                store.cancel();
                println!("Reverted to the last saved selection.");
            }
            // Save order
            5 => {
                if store.is_empty() {
                    println!("Nothing to save.");
                    continue;
                }
                let summary = derive_summary(&inputs, &store, &catalog, rule);
                display_budget_summary(&summary);

                if !prompt_yes_no("Submit this order?", true)? {
                    continue;
                }

                let submitted_by = ctx.current_user().map(|u| u.name.clone());
                let payload = build_payload(&store, &catalog, &inputs, rule, submitted_by);

                match session.submit(&mut endpoint, &mut store, &payload) {
                    Ok(()) => println!("Order saved to {}", out_path),
                    Err(e) => println!("Could not save order: {}", e),
                }
            }
            // Quit
            _ => {
                if store.has_unsaved_changes()
                    && !prompt_yes_no("Discard unsaved changes and quit?", false)?
                {
                    continue;
                }
                break;
            }
        }
    }

    Ok(())
}

/// List or search the catalog.
fn cmd_catalog(file_path: &str, query: Option<&str>) -> Result<()> {
    let catalog = load_catalog(file_path)?;

    match query {
        Some(q) => {
            let hits = fuzzy_search(&catalog, q);
            display_catalog(&hits, &format!("Matches for '{}'", q));
        }
        None => display_catalog(&catalog.all(), "Catalog"),
    }

    Ok(())
}

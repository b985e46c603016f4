mod search;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::models::{MealSlots, MenuItem};

pub use search::{fuzzy_search, Debouncer, QueryGate};

/// The item catalog, keyed by item ID.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: HashMap<u32, MenuItem>,
}

impl Catalog {
    /// Build a catalog from a list of items, deduplicating by ID
    /// (last occurrence wins).
    pub fn new(items: Vec<MenuItem>) -> Self {
        let mut map = HashMap::new();
        for item in items {
            map.insert(item.id, item);
        }
        Self { items: map }
    }

    pub fn get(&self, id: u32) -> Option<&MenuItem> {
        self.items.get(&id)
    }

    /// Look up an item by exact name, case-insensitive.
    pub fn get_by_name(&self, name: &str) -> Option<&MenuItem> {
        self.items
            .values()
            .find(|i| i.name.eq_ignore_ascii_case(name))
    }

    /// All items, ascending by ID.
    pub fn all(&self) -> Vec<&MenuItem> {
        let mut items: Vec<&MenuItem> = self.items.values().collect();
        items.sort_unstable_by_key(|i| i.id);
        items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Load a catalog from a JSON file (a list of items).
pub fn load_catalog_json<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    let items: Vec<MenuItem> = serde_json::from_str(&content)?;
    Ok(Catalog::new(items))
}

/// Save a catalog to a JSON file.
pub fn save_catalog_json<P: AsRef<Path>>(path: P, catalog: &Catalog) -> Result<()> {
    let items: Vec<&MenuItem> = catalog.all();
    let json = serde_json::to_string_pretty(&items)?;
    fs::write(path, json)?;
    Ok(())
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    id: u32,
    name: String,
    price: f64,
    unit: String,
    morning: bool,
    afternoon: bool,
    night: bool,
    #[serde(default)]
    editable: bool,
}

/// Load a catalog from a headed CSV file
/// (`id,name,price,unit,morning,afternoon,night,editable`).
pub fn load_catalog_csv<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut items = Vec::new();
    for row in reader.deserialize() {
        let row: CsvRow = row?;
        items.push(MenuItem {
            id: row.id,
            name: row.name,
            price: row.price,
            unit: row.unit,
            default_slots: MealSlots::new(row.morning, row.afternoon, row.night),
            editable_slots: row.editable,
        });
    }
    Ok(Catalog::new(items))
}

/// Built-in fallback catalog, used when no catalog file is given.
pub fn builtin_catalog() -> Catalog {
    let item = |id, name: &str, price, unit: &str, slots, editable| MenuItem {
        id,
        name: name.to_string(),
        price,
        unit: unit.to_string(),
        default_slots: slots,
        editable_slots: editable,
    };

    Catalog::new(vec![
        item(1, "Rice", 40.0, "plate", MealSlots::new(false, true, true), true),
        item(2, "Dal", 30.0, "bowl", MealSlots::new(false, true, true), true),
        item(3, "Chapati", 10.0, "piece", MealSlots::all(), true),
        item(4, "Poha", 25.0, "plate", MealSlots::new(true, false, false), false),
        item(5, "Curd", 20.0, "bowl", MealSlots::new(false, true, false), true),
        item(6, "Egg Curry", 60.0, "bowl", MealSlots::new(false, true, true), true),
        item(7, "Tea", 10.0, "cup", MealSlots::new(true, false, true), false),
    ])
}

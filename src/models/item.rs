use serde::{Deserialize, Serialize};

/// Which meal times an item is served at.
///
/// One naming convention crate-wide: morning/afternoon/night. The
/// breakfast/lunch/dinner spelling is accepted on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSlots {
    #[serde(alias = "breakfast")]
    pub morning: bool,

    #[serde(alias = "lunch")]
    pub afternoon: bool,

    #[serde(alias = "dinner")]
    pub night: bool,
}

/// A single meal time within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealTime {
    Morning,
    Afternoon,
    Night,
}

impl MealSlots {
    pub fn new(morning: bool, afternoon: bool, night: bool) -> Self {
        Self {
            morning,
            afternoon,
            night,
        }
    }

    /// All three slots enabled.
    pub fn all() -> Self {
        Self::new(true, true, true)
    }

    /// No slots enabled.
    pub fn none() -> Self {
        Self::new(false, false, false)
    }

    pub fn get(&self, slot: MealTime) -> bool {
        match slot {
            MealTime::Morning => self.morning,
            MealTime::Afternoon => self.afternoon,
            MealTime::Night => self.night,
        }
    }

    pub fn set(&mut self, slot: MealTime, value: bool) {
        match slot {
            MealTime::Morning => self.morning = value,
            MealTime::Afternoon => self.afternoon = value,
            MealTime::Night => self.night = value,
        }
    }

    /// Number of enabled slots (0 to 3).
    #[inline]
    pub fn active_count(&self) -> u32 {
        self.morning as u32 + self.afternoon as u32 + self.night as u32
    }

    /// Short display form, e.g. "M-N" for morning and night only.
    pub fn display_short(&self) -> String {
        format!(
            "{}{}{}",
            if self.morning { 'M' } else { '-' },
            if self.afternoon { 'A' } else { '-' },
            if self.night { 'N' } else { '-' }
        )
    }
}

impl Default for MealSlots {
    fn default() -> Self {
        Self::all()
    }
}

/// A selectable catalog item.
///
/// Immutable catalog data: the selection store never mutates these, it only
/// copies `default_slots` when an item is first selected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,

    pub name: String,

    pub price: f64,

    pub unit: String,

    /// Meal times the item is served at by default.
    #[serde(alias = "meal_time_defaults")]
    pub default_slots: MealSlots,

    /// Whether the user may change the meal-time flags after selecting.
    #[serde(alias = "editable", default)]
    pub editable_slots: bool,
}

impl MenuItem {
    /// Basic validation: non-negative price and a non-empty name.
    pub fn is_valid(&self) -> bool {
        self.price >= 0.0 && !self.name.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_count() {
        assert_eq!(MealSlots::all().active_count(), 3);
        assert_eq!(MealSlots::none().active_count(), 0);
        assert_eq!(MealSlots::new(true, false, true).active_count(), 2);
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut slots = MealSlots::none();
        slots.set(MealTime::Afternoon, true);
        assert!(slots.get(MealTime::Afternoon));
        assert!(!slots.get(MealTime::Morning));
        assert!(!slots.get(MealTime::Night));
    }

    #[test]
    fn test_display_short() {
        assert_eq!(MealSlots::new(true, false, true).display_short(), "M-N");
        assert_eq!(MealSlots::all().display_short(), "MAN");
    }

    #[test]
    fn test_breakfast_lunch_dinner_aliases() {
        let json = r#"{"breakfast": true, "lunch": false, "dinner": true}"#;
        let slots: MealSlots = serde_json::from_str(json).unwrap();
        assert_eq!(slots, MealSlots::new(true, false, true));
    }

    #[test]
    fn test_item_validation() {
        let item = MenuItem {
            id: 1,
            name: "Rice".to_string(),
            price: 40.0,
            unit: "plate".to_string(),
            default_slots: MealSlots::all(),
            editable_slots: true,
        };
        assert!(item.is_valid());

        let mut bad = item.clone();
        bad.price = -1.0;
        assert!(!bad.is_valid());

        let mut blank = item;
        blank.name = "  ".to_string();
        assert!(!blank.is_valid());
    }
}

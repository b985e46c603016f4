use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::budget::PricingRule;

/// Cached budget preferences, reloaded at startup so the user does not
/// re-enter the same figures every session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetPrefs {
    #[serde(default)]
    pub budget_per_student: f64,

    #[serde(default)]
    pub total_students: u32,

    #[serde(default)]
    pub pricing_rule: PricingRule,
}

/// Load preferences from a JSON file. Best-effort: any failure (missing file,
/// unreadable, malformed) yields defaults.
pub fn load_prefs<P: AsRef<Path>>(path: P) -> BudgetPrefs {
    fs::read_to_string(path)
        .ok()
        .and_then(|content| serde_json::from_str(&content).ok())
        .unwrap_or_default()
}

/// Save preferences to a JSON file. Best-effort: failures are ignored.
pub fn save_prefs<P: AsRef<Path>>(path: P, prefs: &BudgetPrefs) {
    if let Ok(json) = serde_json::to_string_pretty(prefs) {
        let _ = fs::write(path, json);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_roundtrip() {
        let prefs = BudgetPrefs {
            budget_per_student: 55.0,
            total_students: 120,
            pricing_rule: PricingRule::PerMealTime,
        };

        let file = NamedTempFile::new().unwrap();
        save_prefs(file.path(), &prefs);

        let loaded = load_prefs(file.path());
        assert_eq!(loaded.budget_per_student, 55.0);
        assert_eq!(loaded.total_students, 120);
        assert_eq!(loaded.pricing_rule, PricingRule::PerMealTime);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let loaded = load_prefs("/nonexistent/prefs.json");
        assert_eq!(loaded.budget_per_student, 0.0);
        assert_eq!(loaded.total_students, 0);
        assert_eq!(loaded.pricing_rule, PricingRule::FlatPerItem);
    }

    #[test]
    fn test_malformed_file_yields_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();

        let loaded = load_prefs(file.path());
        assert_eq!(loaded.total_students, 0);
    }

    #[test]
    fn test_save_to_bad_path_is_silent() {
        let prefs = BudgetPrefs::default();
        save_prefs("/nonexistent/dir/prefs.json", &prefs);
    }
}

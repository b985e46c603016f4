use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::prefs::{load_prefs, save_prefs, BudgetPrefs};

/// An authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
}

/// Explicit application context, constructed once at startup and passed to
/// whatever needs it. Replaces the global auth/client singletons of the
/// original system; logout is its teardown.
#[derive(Debug)]
pub struct AppContext {
    user: Option<User>,
    pub prefs: BudgetPrefs,
    prefs_path: PathBuf,
}

impl AppContext {
    /// Build the context, loading cached preferences best-effort.
    pub fn init(user: Option<User>, prefs_path: impl Into<PathBuf>) -> Self {
        let prefs_path = prefs_path.into();
        let prefs = load_prefs(&prefs_path);
        Self {
            user,
            prefs,
            prefs_path,
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Persist the current preferences. Best-effort.
    pub fn save_prefs(&self) {
        save_prefs(&self.prefs_path, &self.prefs);
    }

    /// Teardown: clear the signed-in user.
    pub fn logout(&mut self) {
        self.user = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logout_clears_user() {
        let user = User {
            id: 1,
            name: "Asha".to_string(),
        };
        let mut ctx = AppContext::init(Some(user), "/nonexistent/prefs.json");

        assert!(ctx.is_authenticated());
        assert_eq!(ctx.current_user().unwrap().name, "Asha");

        ctx.logout();
        assert!(!ctx.is_authenticated());
        assert!(ctx.current_user().is_none());
    }

    #[test]
    fn test_init_without_user() {
        let ctx = AppContext::init(None, "/nonexistent/prefs.json");
        assert!(!ctx.is_authenticated());
        assert_eq!(ctx.prefs.total_students, 0);
    }
}

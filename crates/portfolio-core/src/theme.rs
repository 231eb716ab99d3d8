//! Light/dark theme preference.
//!
//! The active theme comes from the stored preference when there is one and
//! from the platform's `prefers-color-scheme` signal otherwise. Toggling
//! persists the choice; later platform changes are then ignored.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{PortfolioError, PortfolioResult};

/// Key the preference is stored under.
pub const THEME_KEY: &str = "portfolio-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Theme implied by the platform color-scheme signal.
    pub fn from_system(prefers_light: bool) -> Self {
        if prefers_light {
            Theme::Light
        } else {
            Theme::Dark
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(PortfolioError::UnknownTheme(s.to_string())),
        }
    }
}

/// Persistence for the single theme preference.
pub trait ThemeStore: Send + Sync {
    fn load(&self) -> PortfolioResult<Option<Theme>>;
    fn save(&self, theme: Theme) -> PortfolioResult<()>;
    fn clear(&self) -> PortfolioResult<()>;
}

/// Session-only store, used in tests and when the database cannot be opened.
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    value: Arc<Mutex<Option<Theme>>>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self {
            value: Arc::new(Mutex::new(Some(theme))),
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> PortfolioResult<Option<Theme>> {
        Ok(*self.value.lock())
    }

    fn save(&self, theme: Theme) -> PortfolioResult<()> {
        *self.value.lock() = Some(theme);
        Ok(())
    }

    fn clear(&self) -> PortfolioResult<()> {
        *self.value.lock() = None;
        Ok(())
    }
}

/// Applies the preference rules on top of a [`ThemeStore`].
///
/// Store failures are logged and otherwise ignored; the page keeps working
/// with an unpersisted theme.
pub struct ThemeController {
    store: Arc<dyn ThemeStore>,
    current: Theme,
    /// Set by a command-line override; system changes are then ignored
    pinned: bool,
}

impl ThemeController {
    /// Resolve the initial theme from the store, then the system signal.
    pub fn new(store: Arc<dyn ThemeStore>, system_prefers_light: bool) -> Self {
        let current = match store.load() {
            Ok(Some(theme)) => theme,
            Ok(None) => Theme::from_system(system_prefers_light),
            Err(e) => {
                tracing::warn!("Failed to read theme preference: {}", e);
                Theme::from_system(system_prefers_light)
            }
        };
        tracing::debug!(theme = %current, "Theme resolved");
        Self {
            store,
            current,
            pinned: false,
        }
    }

    /// Start from `theme` for this session without touching the store.
    ///
    /// Platform color-scheme changes are ignored; toggling still works and
    /// persists as usual.
    pub fn with_override(store: Arc<dyn ThemeStore>, theme: Theme) -> Self {
        Self {
            store,
            current: theme,
            pinned: true,
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme and persist it.
    pub fn toggle(&mut self) -> Theme {
        self.set(self.current.toggled());
        self.current
    }

    /// Set and persist the theme.
    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        if let Err(e) = self.store.save(theme) {
            tracing::warn!("Failed to save theme preference: {}", e);
        }
    }

    /// Follow a platform color-scheme change unless the user picked a theme.
    ///
    /// Returns whether the active theme changed.
    pub fn system_changed(&mut self, prefers_light: bool) -> bool {
        if self.pinned {
            return false;
        }
        match self.store.load() {
            Ok(None) => {}
            Ok(Some(_)) => return false,
            Err(e) => {
                tracing::warn!("Failed to read theme preference: {}", e);
                return false;
            }
        }
        let theme = Theme::from_system(prefers_light);
        if theme == self.current {
            return false;
        }
        self.current = theme;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingStore;

    impl ThemeStore for FailingStore {
        fn load(&self) -> PortfolioResult<Option<Theme>> {
            Err(PortfolioError::Storage("unavailable".into()))
        }
        fn save(&self, _theme: Theme) -> PortfolioResult<()> {
            Err(PortfolioError::Storage("unavailable".into()))
        }
        fn clear(&self) -> PortfolioResult<()> {
            Err(PortfolioError::Storage("unavailable".into()))
        }
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!(" DARK ".parse::<Theme>().unwrap(), Theme::Dark);
        assert!(matches!(
            "sepia".parse::<Theme>(),
            Err(PortfolioError::UnknownTheme(_))
        ));
        assert_eq!(Theme::Light.to_string(), "light");
    }

    #[test]
    fn stored_preference_wins_over_system() {
        let store = Arc::new(MemoryThemeStore::with_theme(Theme::Dark));
        let controller = ThemeController::new(store, true);
        assert_eq!(controller.current(), Theme::Dark);
    }

    #[test]
    fn falls_back_to_system_preference() {
        let light = ThemeController::new(Arc::new(MemoryThemeStore::new()), true);
        assert_eq!(light.current(), Theme::Light);
        let dark = ThemeController::new(Arc::new(MemoryThemeStore::new()), false);
        assert_eq!(dark.current(), Theme::Dark);
    }

    #[test]
    fn toggle_persists() {
        let store = Arc::new(MemoryThemeStore::new());
        let mut controller = ThemeController::new(store.clone(), false);
        assert_eq!(controller.toggle(), Theme::Light);
        assert_eq!(store.load().unwrap(), Some(Theme::Light));
        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(store.load().unwrap(), Some(Theme::Dark));
    }

    #[test]
    fn system_change_applies_only_without_preference() {
        let store = Arc::new(MemoryThemeStore::new());
        let mut controller = ThemeController::new(store.clone(), false);
        assert!(controller.system_changed(true));
        assert_eq!(controller.current(), Theme::Light);

        controller.toggle();
        assert!(!controller.system_changed(true));
        assert_eq!(controller.current(), Theme::Dark);
    }

    #[test]
    fn override_does_not_persist() {
        let store = Arc::new(MemoryThemeStore::new());
        let controller = ThemeController::with_override(store.clone(), Theme::Light);
        assert_eq!(controller.current(), Theme::Light);
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn override_ignores_system_changes() {
        let store = Arc::new(MemoryThemeStore::new());
        let mut controller = ThemeController::with_override(store, Theme::Light);
        assert!(!controller.system_changed(false));
        assert_eq!(controller.current(), Theme::Light);
    }

    #[test]
    fn store_failures_are_tolerated() {
        let mut controller = ThemeController::new(Arc::new(FailingStore), true);
        assert_eq!(controller.current(), Theme::Light);
        assert_eq!(controller.toggle(), Theme::Dark);
        assert!(!controller.system_changed(true));
    }
}

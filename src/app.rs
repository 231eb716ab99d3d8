use std::sync::Arc;

use dioxus::prelude::*;
use portfolio_core::{Catalog, MemoryThemeStore, PreferenceStore, ThemeController, ThemeStore};

use crate::bridge;
use crate::context::{get_launch_config, LaunchConfig, PageState};
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Builds the page-session state, starts the page bridge once mounted, and
/// keeps the document's scroll lock in sync with the project modal.
#[component]
pub fn App() -> Element {
    let config = use_hook(get_launch_config);
    let page = PageState::provide(|| load_catalog(&config), || init_theme(&config));

    // Start forwarding browser signals once the DOM exists
    use_effect(move || {
        spawn(bridge::run(page));
    });

    // Mirror modal visibility onto background scrolling
    use_effect(move || {
        let locked = page.modal.read().scroll_locked();
        bridge::set_scroll_lock(locked);
    });

    let theme = page.theme.read().current();

    rsx! {
        style { {GLOBAL_STYLES} }
        div {
            class: "page",
            "data-theme": "{theme}",
            Home {}
        }
    }
}

/// Catalog from `--catalog`, falling back to the built-in projects.
fn load_catalog(config: &LaunchConfig) -> Catalog {
    if let Some(path) = &config.catalog_path {
        match Catalog::load(path) {
            Ok(catalog) => {
                tracing::info!(
                    "Loaded {} projects from {}",
                    catalog.len(),
                    path.display()
                );
                return catalog;
            }
            Err(e) => {
                tracing::error!(
                    "Failed to load catalog {}: {}; using built-in projects",
                    path.display(),
                    e
                );
            }
        }
    }

    match Catalog::builtin() {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Built-in catalog is invalid: {}", e);
            Catalog::default()
        }
    }
}

/// Theme controller backed by the preference file, or memory if it cannot
/// be opened.
fn init_theme(config: &LaunchConfig) -> ThemeController {
    let store: Arc<dyn ThemeStore> = match PreferenceStore::open_in(&config.data_dir) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::warn!(
                "Theme preference will not persist ({}): {}",
                config.data_dir.display(),
                e
            );
            Arc::new(MemoryThemeStore::new())
        }
    };

    match config.theme_override {
        Some(theme) => ThemeController::with_override(store, theme),
        // The bridge reports the real system preference right after mount
        None => ThemeController::new(store, false),
    }
}

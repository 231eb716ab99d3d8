//! Page-session state shared through Dioxus context.
//!
//! Every piece of mutable page state is owned by one signal created in
//! [`crate::app::App`]. Components reach it through the hooks below.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! let page = PageState::provide(|| catalog, || theme);
//!
//! // In child components
//! let modal = use_modal();
//! let dispatch = use_modal_dispatch();
//! dispatch.send(InputEvent::CardClick(id));
//! ```

use std::path::PathBuf;

use dioxus::prelude::*;
use portfolio_core::{
    Catalog, InputEvent, InputRouter, ModalController, NavMenu, RevealTracker, ScrollState,
    Theme, ThemeController,
};

/// Options resolved from the command line before launch.
#[derive(Clone, Debug, Default)]
pub struct LaunchConfig {
    pub data_dir: PathBuf,
    pub catalog_path: Option<PathBuf>,
    pub theme_override: Option<Theme>,
}

/// Get the launch configuration set from command line args.
pub fn get_launch_config() -> LaunchConfig {
    crate::get_launch_config()
}

/// Signal handles for every piece of page state.
///
/// All fields are `Copy` signal handles, so the struct can be moved into
/// event handlers and the bridge task freely.
#[derive(Clone, Copy)]
pub struct PageState {
    pub catalog: Signal<Catalog>,
    pub modal: Signal<ModalController>,
    pub router: Signal<InputRouter>,
    pub theme: Signal<ThemeController>,
    pub scroll: Signal<ScrollState>,
    pub reveals: Signal<RevealTracker>,
    pub nav_menu: Signal<NavMenu>,
}

impl PageState {
    /// Create the page signals and provide them to all children.
    ///
    /// Must be called from the root component.
    /// The initializers only run on the first render.
    pub fn provide(
        init_catalog: impl FnOnce() -> Catalog,
        init_theme: impl FnOnce() -> ThemeController,
    ) -> Self {
        let catalog = use_signal(init_catalog);
        let state = PageState {
            catalog,
            modal: use_signal(|| ModalController::new(catalog.peek().clone())),
            router: use_signal(InputRouter::default),
            theme: use_signal(init_theme),
            scroll: use_signal(ScrollState::default),
            reveals: use_signal(RevealTracker::new),
            nav_menu: use_signal(NavMenu::default),
        };
        use_context_provider(|| state);
        state
    }
}

/// Hook to access all page signals.
pub fn use_page() -> PageState {
    use_context::<PageState>()
}

/// Hook to access the project modal controller.
pub fn use_modal() -> Signal<ModalController> {
    use_page().modal
}

/// Hook to access the project catalog.
pub fn use_catalog() -> Signal<Catalog> {
    use_page().catalog
}

/// Routes input events into the modal controller.
#[derive(Clone, Copy)]
pub struct ModalDispatch {
    modal: Signal<ModalController>,
    router: Signal<InputRouter>,
}

impl ModalDispatch {
    pub fn new(modal: Signal<ModalController>, router: Signal<InputRouter>) -> Self {
        Self { modal, router }
    }

    /// Returns whether the modal state changed.
    pub fn send(mut self, event: InputEvent) -> bool {
        let router = self.router.peek();
        router.dispatch(&mut self.modal.write(), event)
    }
}

/// Hook returning a dispatcher for modal input events.
///
/// # Example
///
/// ```ignore
/// let dispatch = use_modal_dispatch();
///
/// rsx! {
///     button { onclick: move |_| { dispatch.send(InputEvent::NextClick); }, "›" }
/// }
/// ```
pub fn use_modal_dispatch() -> ModalDispatch {
    let page = use_page();
    ModalDispatch::new(page.modal, page.router)
}

//! Portfolio Core Library
//!
//! Renderer-independent state for a single-page developer portfolio.
//!
//! ## Overview
//!
//! The page is a set of small state machines, each driven synchronously by
//! one kind of input:
//!
//! - **Catalog**: the static table of project records behind the cards
//! - **Gallery / Modal / Input**: the project detail modal with its image
//!   carousel and the dispatch table that routes clicks and keys into it
//! - **Theme**: light/dark preference with a persisted override
//! - **Typing, Nav, Filter, Reveal**: hero title animation, scroll-driven
//!   navigation state, the category filter, and one-shot counters/skill bars
//!
//! Nothing here touches a renderer. The desktop crate feeds DOM events in and
//! renders the resulting view models.
//!
//! ## Quick Start
//!
//! ```ignore
//! use portfolio_core::{Catalog, InputEvent, InputRouter, Key, ModalController};
//!
//! let catalog = Catalog::builtin()?;
//! let mut modal = ModalController::new(catalog);
//! let router = InputRouter::default();
//!
//! router.dispatch(&mut modal, InputEvent::CardClick("fursah".into()));
//! router.dispatch(&mut modal, InputEvent::Key(Key::ArrowRight));
//!
//! let view = modal.view().expect("modal is open");
//! println!("{} - {}", view.title, view.main_image);
//! ```

pub mod catalog;
pub mod error;
pub mod filter;
pub mod gallery;
pub mod input;
pub mod modal;
pub mod nav;
pub mod reveal;
pub mod storage;
pub mod theme;
pub mod typing;

// Re-exports
pub use catalog::{Catalog, Platform, ProjectRecord};
pub use error::{PortfolioError, PortfolioResult};
pub use filter::Filter;
pub use gallery::{Direction, GalleryState};
pub use input::{EventKind, InputEvent, InputRouter, Key, ModalAction};
pub use modal::{ModalController, ModalView, ModalVisibility, Thumbnail};
pub use nav::{NavMenu, ScrollState, SectionBounds};
pub use reveal::{skill_bar_width, CounterAnimation, RevealKind, RevealTracker};
pub use storage::PreferenceStore;
pub use theme::{MemoryThemeStore, Theme, ThemeController, ThemeStore};
pub use typing::{TypingAnimation, TypingFrame};

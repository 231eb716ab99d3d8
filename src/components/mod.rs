//! UI Components for the portfolio page.

mod about;
mod contact;
mod fade_in;
mod hero;
mod navbar;
mod project_modal;
mod projects;
mod skills;

pub use about::About;
pub use contact::{Contact, Footer};
pub use fade_in::FadeIn;
pub use hero::Hero;
pub use navbar::{Navbar, NAV_SECTIONS};
pub use project_modal::ProjectModal;
pub use projects::Projects;
pub use skills::Skills;

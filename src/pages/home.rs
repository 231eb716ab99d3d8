//! The single portfolio page.

use dioxus::prelude::*;

use crate::components::{About, Contact, Footer, Hero, Navbar, ProjectModal, Projects, Skills};

/// Home page component.
///
/// Section ids match [`crate::components::NAV_SECTIONS`] so scroll
/// highlighting and anchor links line up.
#[component]
pub fn Home() -> Element {
    rsx! {
        Navbar {}
        main { class: "main",
            Hero {}
            About {}
            Skills {}
            Projects {}
            Contact {}
        }
        Footer {}
        ProjectModal {}
    }
}

//! Fade-in wrapper revealed on first scroll into view.

use dioxus::prelude::*;

use crate::context::use_page;

/// Wraps content that fades in the first time it becomes visible.
///
/// The `id` is what the page bridge observes, so it must be unique.
#[component]
pub fn FadeIn(id: String, children: Element) -> Element {
    let page = use_page();
    let visible = page.reveals.read().is_revealed(&id);

    rsx! {
        div {
            id: "{id}",
            class: if visible { "fade-in visible" } else { "fade-in" },
            "data-reveal": "fade",
            {children}
        }
    }
}

//! Navigation Bar Component
//!
//! Fixed top bar with section links, the theme toggle, and the mobile menu
//! button. Styling follows scroll position: compact once scrolled, and the
//! link for the section in view is highlighted.

use dioxus::prelude::*;
use portfolio_core::Theme;
use portfolio_ui::IconButton;

use crate::bridge::scroll_to;
use crate::context::use_page;

/// Page sections in navigation order: (element id, link label)
pub const NAV_SECTIONS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

#[component]
pub fn Navbar() -> Element {
    let page = use_page();
    let mut theme = page.theme;
    let mut nav_menu = page.nav_menu;

    let (scrolled, active_section) = {
        let scroll = page.scroll.read();
        (scroll.navbar_scrolled, scroll.active_section.clone())
    };
    let menu_open = nav_menu.read().is_open();
    let current_theme = theme.read().current();

    rsx! {
        nav {
            id: "navbar",
            class: if scrolled { "navbar scrolled" } else { "navbar" },

            a {
                class: "nav-logo",
                href: "#home",
                onclick: move |e| {
                    e.prevent_default();
                    scroll_to("home");
                },
                "SR."
            }

            ul {
                id: "nav-menu",
                class: if menu_open { "nav-menu active" } else { "nav-menu" },
                for (section_id, label) in NAV_SECTIONS {
                    li { key: "{section_id}",
                        a {
                            class: if active_section.as_deref() == Some(section_id) { "nav-link active" } else { "nav-link" },
                            href: "#{section_id}",
                            onclick: move |e| {
                                e.prevent_default();
                                nav_menu.write().link_clicked();
                                scroll_to(section_id);
                            },
                            "{label}"
                        }
                    }
                }
            }

            div { class: "nav-actions",
                IconButton {
                    aria_label: "Toggle theme".to_string(),
                    class: "theme-toggle".to_string(),
                    onclick: move |_| {
                        let next = theme.write().toggle();
                        tracing::info!(theme = %next, "Theme toggled");
                    },
                    if current_theme == Theme::Dark { "\u{2600}" } else { "\u{263E}" }
                }

                button {
                    id: "nav-toggle",
                    class: if menu_open { "nav-toggle active" } else { "nav-toggle" },
                    "aria-label": "Toggle navigation",
                    onclick: move |_| nav_menu.write().toggle(),
                    span {}
                    span {}
                    span {}
                }
            }
        }
    }
}

//! Contact section and footer.

use dioxus::prelude::*;

use crate::components::hero::OWNER_NAME;
use crate::components::FadeIn;

const CONTACT_LINKS: [(&str, &str); 3] = [
    ("Email", "mailto:hello@example.com"),
    ("GitHub", "https://github.com/"),
    ("LinkedIn", "https://www.linkedin.com/"),
];

#[component]
pub fn Contact() -> Element {
    rsx! {
        section { id: "contact", class: "contact",
            FadeIn { id: "fade-contact",
                h2 { class: "section-title", "Get In Touch" }
                p { class: "section-subtitle",
                    "Have an app idea or an open role? My inbox is always open."
                }
                div { class: "contact-links",
                    for (label, href) in CONTACT_LINKS {
                        a {
                            key: "{label}",
                            class: "contact-link",
                            href: "{href}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            p { "Designed and built by {OWNER_NAME}" }
        }
    }
}

//! Hero section with the typed title line.

use dioxus::prelude::*;
use portfolio_core::typing::START_DELAY;
use portfolio_core::TypingAnimation;
use portfolio_ui::{Button, ButtonVariant};

use crate::bridge::scroll_to;
use crate::context::use_page;

pub const OWNER_NAME: &str = "Sami Rahman";

#[component]
pub fn Hero() -> Element {
    let page = use_page();
    let mut typed = use_signal(String::new);

    // Runs for the lifetime of the page
    use_future(move || async move {
        tokio::time::sleep(START_DELAY).await;
        let mut animation = TypingAnimation::default();
        while let Some(frame) = animation.tick() {
            typed.set(frame.text);
            tokio::time::sleep(frame.delay).await;
        }
    });

    let visual_style = page
        .scroll
        .read()
        .parallax_offset
        .map(|offset| format!("transform: translateY({offset}px);"))
        .unwrap_or_default();

    rsx! {
        section { id: "home", class: "hero",
            div { class: "hero-content",
                p { class: "hero-greeting", "Hi, my name is" }
                h1 { class: "hero-name", "{OWNER_NAME}" }
                p { class: "hero-title",
                    span { id: "typed-text", "{typed}" }
                    span { class: "typed-cursor" }
                }
                p { class: "hero-description",
                    "I design and build fast, polished mobile apps for iOS and Android, "
                    "from the first wireframe to the store listing."
                }
                div { class: "hero-cta",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| scroll_to("projects"),
                        "View Projects"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| scroll_to("contact"),
                        "Contact Me"
                    }
                }
            }
            div { class: "hero-visual", style: "{visual_style}",
                div { class: "hero-avatar" }
            }
        }
    }
}

//! About section with animated stat counters.

use dioxus::prelude::*;
use portfolio_core::reveal::COUNTER_FRAME;
use portfolio_core::CounterAnimation;

use crate::components::FadeIn;
use crate::context::use_page;

/// (element id, label, final value)
const STATS: [(&str, &str, u64); 4] = [
    ("stat-years", "Years Experience", 5),
    ("stat-projects", "Projects Completed", 30),
    ("stat-clients", "Happy Clients", 20),
    ("stat-apps", "Apps Published", 12),
];

#[component]
pub fn About() -> Element {
    rsx! {
        section { id: "about", class: "about",
            FadeIn { id: "fade-about",
                h2 { class: "section-title", "About Me" }
                p { class: "section-subtitle", "A little about how I work" }
            }
            div { class: "about-grid",
                div { class: "about-text",
                    p {
                        "I'm a mobile developer who cares about the details: smooth "
                        "animations, accessible layouts, and apps that stay fast on "
                        "older devices."
                    }
                    p {
                        "Most of my work is native Swift and Kotlin, with Flutter and "
                        "React Native when a shared codebase makes more sense."
                    }
                }
                div { class: "stats",
                    for (id, label, target) in STATS {
                        StatCounter {
                            key: "{id}",
                            id: id.to_string(),
                            label: label.to_string(),
                            target: target,
                        }
                    }
                }
            }
        }
    }
}

/// Counts up to `target` the first time the card is revealed.
#[component]
fn StatCounter(id: String, label: String, target: u64) -> Element {
    let reveals = use_page().reveals;
    let mut value = use_signal(|| 0u64);
    let mut started = use_signal(|| false);

    let watched_id = id.clone();
    use_effect(move || {
        if !reveals.read().is_revealed(&watched_id) || *started.peek() {
            return;
        }
        started.set(true);
        spawn(async move {
            let mut counter = CounterAnimation::new(target);
            while let Some(current) = counter.tick() {
                value.set(current);
                tokio::time::sleep(COUNTER_FRAME).await;
            }
        });
    });

    rsx! {
        div {
            id: "{id}",
            class: "stat-card",
            "data-reveal": "counter",
            "data-target": "{target}",
            span { class: "stat-number", "{value}" }
            span { class: "stat-label", "{label}" }
        }
    }
}

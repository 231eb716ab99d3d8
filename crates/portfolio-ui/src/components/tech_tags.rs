//! Technology tag badges.

use dioxus::prelude::*;

/// Row of technology badges, rendered in the order given.
#[component]
pub fn TechTags(tags: Vec<String>, #[props(default)] compact: bool) -> Element {
    if tags.is_empty() {
        return VNode::empty();
    }

    rsx! {
        div { class: if compact { "tech-tags compact" } else { "tech-tags" },
            for (i, tag) in tags.iter().enumerate() {
                span { key: "{i}", class: "tech-tag", "{tag}" }
            }
        }
    }
}

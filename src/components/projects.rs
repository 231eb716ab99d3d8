//! Portfolio section: filter buttons and the project card grid.

use dioxus::prelude::*;
use portfolio_core::{Filter, InputEvent, ProjectRecord};
use portfolio_ui::{FilterPills, TechTags};

use crate::components::FadeIn;
use crate::context::{use_catalog, use_modal_dispatch};

/// Project grid with category filter.
///
/// Filtered-out cards stay in the DOM with the `hidden` class so the page
/// bridge keeps observing them.
#[component]
pub fn Projects() -> Element {
    let catalog = use_catalog();
    let dispatch = use_modal_dispatch();
    let mut filter = use_signal(Filter::default);

    let records = catalog.read();
    let filters = Filter::options(&records);
    let active = filter();

    rsx! {
        section { id: "projects", class: "projects",
            FadeIn { id: "fade-projects",
                h2 { class: "section-title", "Projects" }
                p { class: "section-subtitle", "A selection of apps I've shipped" }
            }

            FilterPills {
                filters: filters,
                selected: active,
                on_select: move |f| filter.set(f),
            }

            div { class: "projects-grid",
                for record in records.iter() {
                    ProjectCard {
                        key: "{record.id}",
                        record: record.clone(),
                        hidden: !active.matches(record),
                        on_open: move |id: String| {
                            dispatch.send(InputEvent::CardClick(id));
                        },
                    }
                }
            }
        }
    }
}

/// A single project card. Clicking it opens the project modal.
#[component]
fn ProjectCard(record: ProjectRecord, hidden: bool, on_open: EventHandler<String>) -> Element {
    let project_id = record.id.clone();
    let cover = record.images.first().cloned().unwrap_or_default();

    rsx! {
        article {
            class: if hidden { "project-card hidden" } else { "project-card" },
            "data-category": "{record.platform}",
            "data-project": "{record.id}",
            onclick: move |_| on_open.call(project_id.clone()),

            img { class: "project-image", src: "{cover}", alt: "{record.title}" }

            div { class: "project-body",
                span { class: "project-category", "{record.category}" }
                h3 { class: "project-title", "{record.title}" }
                TechTags { tags: record.tech.clone(), compact: true }
            }
        }
    }
}

//! Project Modal Component
//!
//! Detail view for one project: image gallery with thumbnails on the left,
//! description, tech tags, and feature list on the right.
//!
//! All state lives in the shared [`ModalController`]; this component only
//! paints its [`ModalView`] and forwards clicks as [`InputEvent`]s. Keyboard
//! shortcuts (Escape, arrows) arrive through the page bridge.
//!
//! [`ModalController`]: portfolio_core::ModalController

use dioxus::prelude::*;
use portfolio_core::{InputEvent, ModalView};
use portfolio_ui::{CloseButton, IconButton, TechTags};

use crate::context::{use_modal, use_modal_dispatch};

/// Project modal
///
/// The overlay is always mounted so the open/close transition can run;
/// the content is only rendered while a project is open.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Projects {}
///     ProjectModal {}
/// }
/// ```
#[component]
pub fn ProjectModal() -> Element {
    let modal = use_modal();
    let dispatch = use_modal_dispatch();

    let view = modal.read().view();
    let is_open = view.is_some();

    rsx! {
        div {
            id: "project-modal",
            class: if is_open { "modal-overlay open" } else { "modal-overlay" },
            "aria-hidden": if is_open { "false" } else { "true" },
            onclick: move |_| {
                dispatch.send(InputEvent::BackdropClick);
            },

            if let Some(view) = view {
                div {
                    class: "modal-content",
                    role: "dialog",
                    "aria-modal": "true",
                    onclick: move |e| e.stop_propagation(),

                    CloseButton {
                        onclick: move |_| {
                            dispatch.send(InputEvent::CloseClick);
                        }
                    }

                    ModalGallery { view: view.clone() }
                    ModalDetails { view: view }
                }
            }
        }
    }
}

/// Main image, prev/next controls, and the thumbnail strip.
#[component]
fn ModalGallery(view: ModalView) -> Element {
    let dispatch = use_modal_dispatch();

    rsx! {
        div { class: "modal-gallery",
            div { class: "gallery-main",
                img {
                    id: "modal-main-image",
                    src: "{view.main_image}",
                    alt: "{view.title}",
                }

                // Hidden rather than disabled for single-image projects
                if view.show_nav {
                    IconButton {
                        aria_label: "Previous image".to_string(),
                        class: "gallery-nav prev".to_string(),
                        onclick: move |_| {
                            dispatch.send(InputEvent::PrevClick);
                        },
                        "\u{2039}"
                    }
                    IconButton {
                        aria_label: "Next image".to_string(),
                        class: "gallery-nav next".to_string(),
                        onclick: move |_| {
                            dispatch.send(InputEvent::NextClick);
                        },
                        "\u{203A}"
                    }
                }
            }

            div { class: "gallery-thumbnails",
                for thumb in view.thumbnails.iter() {
                    {
                        let index = thumb.index;
                        let alt = format!("{} screenshot {}", view.title, index + 1);
                        rsx! {
                            img {
                                key: "{thumb.src}-{index}",
                                class: if thumb.active { "thumbnail active" } else { "thumbnail" },
                                src: "{thumb.src}",
                                alt: "{alt}",
                                onclick: move |e| {
                                    e.stop_propagation();
                                    dispatch.send(InputEvent::ThumbnailClick(index));
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Text side of the modal. Every field renders as a text node.
#[component]
fn ModalDetails(view: ModalView) -> Element {
    rsx! {
        div { class: "modal-info",
            span { class: "modal-category", "{view.category}" }
            h2 { class: "modal-title", "{view.title}" }
            p { class: "modal-description", "{view.description}" }

            TechTags { tags: view.tech.clone() }

            if !view.features.is_empty() {
                h3 { class: "modal-subheading", "Key Features" }
                ol { class: "modal-features",
                    for (i, feature) in view.features.iter().enumerate() {
                        li { key: "{i}", "{feature}" }
                    }
                }
            }

            if let Some(link) = view.app_link.clone() {
                a {
                    class: "btn-primary modal-link",
                    href: "{link}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "View App"
                }
            }
        }
    }
}

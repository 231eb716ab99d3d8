//! Button Components
//!
//! Button styles used across the portfolio:
//! - Primary: filled accent call to action ("View Projects")
//! - Outline: secondary action ("Contact Me")
//! - Link: external store link in the project modal

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled accent background
    #[default]
    Primary,
    /// Transparent with accent border
    Outline,
    /// Inline store/app link styling
    Link,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Link => "btn-link",
        }
    }
}

fn join_class(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Outline,
///         onclick: move |_| scroll_to("contact"),
///         "Contact Me"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_class(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Icon button for compact controls (close, gallery arrows, theme toggle)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Clicks on icon buttons never reach enclosing handlers, so a control
/// inside the modal cannot trigger the backdrop's close.
#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = join_class("icon-btn", props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |e| {
                e.stop_propagation();
                props.onclick.call(());
            },
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Close".to_string(),
            class: "modal-close".to_string(),
            "\u{00D7}"
        }
    }
}

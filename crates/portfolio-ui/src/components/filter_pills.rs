//! Filter Pills Component
//!
//! Row of portfolio filter buttons. Exactly one is active at a time.

use dioxus::prelude::*;
use portfolio_core::Filter;

/// Properties for the FilterPills component
#[derive(Clone, PartialEq, Props)]
pub struct FilterPillsProps {
    /// Available filters, "All" first
    pub filters: Vec<Filter>,
    /// Currently active filter
    pub selected: Filter,
    /// Handler called when a filter is chosen
    pub on_select: EventHandler<Filter>,
}

/// Displays the portfolio filter buttons
///
/// # Example
///
/// ```rust,ignore
/// let mut filter = use_signal(Filter::default);
///
/// rsx! {
///     FilterPills {
///         filters: Filter::options(&catalog),
///         selected: filter(),
///         on_select: move |f| filter.set(f)
///     }
/// }
/// ```
#[component]
pub fn FilterPills(props: FilterPillsProps) -> Element {
    rsx! {
        div {
            class: "portfolio-filters",
            role: "radiogroup",
            "aria-label": "Filter projects",
            for filter in props.filters.iter().copied() {
                {
                    let is_selected = props.selected == filter;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{filter.key()}",
                            class: filter_class(is_selected),
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            "data-filter": "{filter.key()}",
                            onclick: move |_| {
                                tracing::debug!(filter = %filter, "Portfolio filter selected");
                                on_select.call(filter);
                            },
                            "{filter.label()}"
                        }
                    }
                }
            }
        }
    }
}

fn filter_class(selected: bool) -> &'static str {
    if selected {
        "filter-btn active"
    } else {
        "filter-btn"
    }
}

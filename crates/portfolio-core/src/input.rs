//! Input routing for the project modal.
//!
//! Raw page events are reduced to [`InputEvent`]s by the renderer, then
//! resolved through a dispatch table into [`ModalAction`]s and applied to the
//! [`ModalController`]. Every handler runs to completion synchronously.

use std::collections::HashMap;

use crate::gallery::Direction;
use crate::modal::{ModalController, ModalVisibility};

/// Keys the modal cares about, by DOM `KeyboardEvent.key` name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other(String),
}

impl Key {
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Key::Escape,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            other => Key::Other(other.to_string()),
        }
    }
}

/// A user interaction that may concern the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Click on a project card carrying its project id
    CardClick(String),
    CloseClick,
    /// Click on the overlay outside the modal content
    BackdropClick,
    PrevClick,
    NextClick,
    ThumbnailClick(usize),
    Key(Key),
}

/// Discriminant of [`InputEvent`] used as the dispatch table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    CardClick,
    CloseClick,
    BackdropClick,
    PrevClick,
    NextClick,
    ThumbnailClick,
    Escape,
    ArrowLeft,
    ArrowRight,
    OtherKey,
}

impl InputEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            InputEvent::CardClick(_) => EventKind::CardClick,
            InputEvent::CloseClick => EventKind::CloseClick,
            InputEvent::BackdropClick => EventKind::BackdropClick,
            InputEvent::PrevClick => EventKind::PrevClick,
            InputEvent::NextClick => EventKind::NextClick,
            InputEvent::ThumbnailClick(_) => EventKind::ThumbnailClick,
            InputEvent::Key(Key::Escape) => EventKind::Escape,
            InputEvent::Key(Key::ArrowLeft) => EventKind::ArrowLeft,
            InputEvent::Key(Key::ArrowRight) => EventKind::ArrowRight,
            InputEvent::Key(Key::Other(_)) => EventKind::OtherKey,
        }
    }
}

/// Controller call an event resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    Open(String),
    Close,
    Step(Direction),
    Select(usize),
}

type Resolver = fn(&InputEvent) -> Option<ModalAction>;

#[derive(Clone, Copy)]
struct Route {
    /// Keyboard routes are dropped while the modal is closed
    requires_open: bool,
    resolve: Resolver,
}

/// Dispatch table from event kind to modal action.
#[derive(Clone)]
pub struct InputRouter {
    routes: HashMap<EventKind, Route>,
}

impl Default for InputRouter {
    fn default() -> Self {
        let mut routes = HashMap::new();

        let mut bind = |kind, requires_open, resolve: Resolver| {
            routes.insert(
                kind,
                Route {
                    requires_open,
                    resolve,
                },
            );
        };

        bind(EventKind::CardClick, false, |event| match event {
            InputEvent::CardClick(id) => Some(ModalAction::Open(id.clone())),
            _ => None,
        });
        bind(EventKind::CloseClick, false, |_| Some(ModalAction::Close));
        bind(EventKind::BackdropClick, false, |_| Some(ModalAction::Close));
        bind(EventKind::PrevClick, false, |_| {
            Some(ModalAction::Step(Direction::Prev))
        });
        bind(EventKind::NextClick, false, |_| {
            Some(ModalAction::Step(Direction::Next))
        });
        bind(EventKind::ThumbnailClick, false, |event| match event {
            InputEvent::ThumbnailClick(index) => Some(ModalAction::Select(*index)),
            _ => None,
        });
        bind(EventKind::Escape, true, |_| Some(ModalAction::Close));
        bind(EventKind::ArrowLeft, true, |_| {
            Some(ModalAction::Step(Direction::Prev))
        });
        bind(EventKind::ArrowRight, true, |_| {
            Some(ModalAction::Step(Direction::Next))
        });

        Self { routes }
    }
}

impl InputRouter {
    /// Resolve an event against the current modal visibility.
    ///
    /// Returns `None` for unbound events and for keyboard input while the
    /// modal is closed.
    pub fn resolve(&self, event: &InputEvent, visibility: ModalVisibility) -> Option<ModalAction> {
        let route = self.routes.get(&event.kind())?;
        if route.requires_open && visibility != ModalVisibility::Open {
            return None;
        }
        (route.resolve)(event)
    }

    /// Resolve and apply an event. Returns whether the modal state changed.
    pub fn dispatch(&self, modal: &mut ModalController, event: InputEvent) -> bool {
        match self.resolve(&event, modal.visibility()) {
            Some(action) => Self::apply(modal, action),
            None => false,
        }
    }

    /// Apply an already-resolved action.
    pub fn apply(modal: &mut ModalController, action: ModalAction) -> bool {
        match action {
            ModalAction::Open(id) => modal.open(&id),
            ModalAction::Close => modal.close(),
            ModalAction::Step(direction) => modal.step(direction),
            ModalAction::Select(index) => modal.select(index),
        }
    }

    pub fn is_bound(&self, kind: EventKind) -> bool {
        self.routes.contains_key(&kind)
    }
}

//! Project detail modal.
//!
//! [`ModalController`] is the single owner of the modal's state: which
//! project is open, the gallery position, and whether the modal is visible.
//! It is constructed once per page session. Renderers call [`ModalController::view`]
//! and paint the returned [`ModalView`]; all text fields are plain strings
//! meant to be inserted as text nodes.

use crate::catalog::{Catalog, ProjectRecord};
use crate::gallery::{Direction, GalleryState};

/// Whether the modal is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalVisibility {
    #[default]
    Closed,
    Open,
}

/// One entry in the thumbnail strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub index: usize,
    pub src: String,
    pub active: bool,
}

/// Everything the renderer needs to paint an open modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub project_id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub tech: Vec<String>,
    pub features: Vec<String>,
    pub app_link: Option<String>,
    pub main_image: String,
    pub active_index: usize,
    pub thumbnails: Vec<Thumbnail>,
    /// Prev/next controls are hidden, not disabled, for single-image galleries
    pub show_nav: bool,
}

/// Owns the modal lifecycle: Closed -> Open -> Closed.
#[derive(Debug, Clone)]
pub struct ModalController {
    catalog: Catalog,
    gallery: GalleryState,
    visibility: ModalVisibility,
    current: Option<String>,
}

impl ModalController {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            gallery: GalleryState::new(),
            visibility: ModalVisibility::Closed,
            current: None,
        }
    }

    /// Open the modal on project `id`.
    ///
    /// Unknown ids are ignored: nothing changes, including a modal that is
    /// already showing another project. Returns whether the modal opened.
    pub fn open(&mut self, id: &str) -> bool {
        let Some(record) = self.catalog.lookup(id) else {
            tracing::debug!(project = id, "No catalog entry for project card, ignoring");
            return false;
        };

        self.gallery.reset(record.images.clone(), 0);
        self.current = Some(record.id.clone());
        self.visibility = ModalVisibility::Open;

        tracing::debug!(
            project = id,
            images = self.gallery.len(),
            "Project modal opened"
        );
        true
    }

    /// Close the modal. Returns whether anything changed.
    pub fn close(&mut self) -> bool {
        if self.visibility == ModalVisibility::Closed {
            return false;
        }
        self.visibility = ModalVisibility::Closed;
        tracing::debug!("Project modal closed");
        true
    }

    /// Step the gallery. Ignored while closed.
    pub fn step(&mut self, direction: Direction) -> bool {
        if !self.is_open() {
            return false;
        }
        let before = self.gallery.active_index();
        self.gallery.step(direction);
        self.gallery.active_index() != before
    }

    /// Jump to a thumbnail. Ignored while closed.
    pub fn select(&mut self, index: usize) -> bool {
        if !self.is_open() {
            return false;
        }
        debug_assert!(
            index < self.gallery.len(),
            "thumbnail index {index} out of range"
        );
        let before = self.gallery.active_index();
        self.gallery.select(index);
        self.gallery.active_index() != before
    }

    pub fn visibility(&self) -> ModalVisibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == ModalVisibility::Open
    }

    /// Page background scrolling is suspended while the modal is open.
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    pub fn gallery(&self) -> &GalleryState {
        &self.gallery
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Record of the most recently opened project.
    ///
    /// Still returns the last project after close; only [`Self::view`] is
    /// gated on visibility.
    pub fn current_project(&self) -> Option<&ProjectRecord> {
        self.current
            .as_deref()
            .and_then(|id| self.catalog.lookup(id))
    }

    /// Render model for the open modal, or `None` while closed.
    pub fn view(&self) -> Option<ModalView> {
        if !self.is_open() {
            return None;
        }
        let record = self.current_project()?;
        let active_index = self.gallery.active_index();

        let thumbnails = self
            .gallery
            .images()
            .iter()
            .enumerate()
            .map(|(index, src)| Thumbnail {
                index,
                src: src.clone(),
                active: index == active_index,
            })
            .collect();

        Some(ModalView {
            project_id: record.id.clone(),
            title: record.title.clone(),
            category: record.category.clone(),
            description: record.description.clone(),
            tech: record.tech.clone(),
            features: record.features.clone(),
            app_link: record.app_link.clone(),
            main_image: self.gallery.current().unwrap_or_default().to_string(),
            active_index,
            thumbnails,
            show_nav: self.gallery.is_navigable(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> ModalController {
        ModalController::new(Catalog::builtin().unwrap())
    }

    #[test]
    fn starts_closed() {
        let modal = controller();
        assert_eq!(modal.visibility(), ModalVisibility::Closed);
        assert!(modal.view().is_none());
        assert!(!modal.scroll_locked());
    }

    #[test]
    fn open_renders_record_fields() {
        let mut modal = controller();
        assert!(modal.open("boxit4me"));

        let record = modal.catalog().lookup("boxit4me").unwrap().clone();
        let view = modal.view().unwrap();
        assert_eq!(view.title, record.title);
        assert_eq!(view.category, record.category);
        assert_eq!(view.description, record.description);
        assert_eq!(view.tech, record.tech);
        assert_eq!(view.features, record.features);
        assert_eq!(view.main_image, record.images[0]);
        assert_eq!(view.thumbnails.len(), record.images.len());
        assert!(view.thumbnails[0].active);
        assert!(view.thumbnails[1..].iter().all(|t| !t.active));
        assert!(modal.scroll_locked());
    }

    #[test]
    fn unknown_id_while_closed_stays_closed() {
        let mut modal = controller();
        assert!(!modal.open("nope"));
        assert_eq!(modal.visibility(), ModalVisibility::Closed);
    }

    #[test]
    fn unknown_id_while_open_keeps_current_project() {
        let mut modal = controller();
        modal.open("fursah");
        modal.step(Direction::Next);
        let before = modal.view();

        assert!(!modal.open("nope"));
        assert_eq!(modal.view(), before);
    }

    #[test]
    fn close_is_idempotent() {
        let mut modal = controller();
        modal.open("fursah");
        assert!(modal.close());
        assert!(!modal.close());
        assert_eq!(modal.visibility(), ModalVisibility::Closed);
        assert!(!modal.scroll_locked());
    }

    #[test]
    fn step_and_select_ignored_while_closed() {
        let mut modal = controller();
        modal.open("fursah");
        modal.close();
        assert!(!modal.step(Direction::Next));
        assert!(!modal.select(2));
        assert_eq!(modal.gallery().active_index(), 0);
    }

    #[test]
    fn select_marks_thumbnail_active() {
        let mut modal = controller();
        modal.open("fursah");
        assert!(modal.select(2));
        let view = modal.view().unwrap();
        assert_eq!(view.active_index, 2);
        assert_eq!(view.main_image, "./assets/images/fursah_3.png");
        let active: Vec<_> = view.thumbnails.iter().filter(|t| t.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].index, 2);
    }

    #[test]
    fn reopen_resets_gallery_to_first_image() {
        let mut modal = controller();
        modal.open("fursah");
        modal.select(3);
        modal.close();
        modal.open("fursah");
        assert_eq!(modal.gallery().active_index(), 0);
    }

    #[test]
    fn link_hidden_when_absent() {
        let mut modal = controller();
        modal.open("meezan360");
        assert_eq!(modal.view().unwrap().app_link, None);
        modal.open("fursah");
        assert!(modal.view().unwrap().app_link.is_some());
    }
}

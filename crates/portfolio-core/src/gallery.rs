//! Image carousel state for the project modal.

/// Direction of a single gallery step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    fn offset(self) -> isize {
        match self {
            Direction::Prev => -1,
            Direction::Next => 1,
        }
    }
}

/// The open project's image list and the index of the image on screen.
///
/// `active_index` always lies in `0..images.len()` once the gallery has been
/// reset with a non-empty list. Stepping wraps in both directions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryState {
    images: Vec<String>,
    active_index: usize,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the image list wholesale and jump to `start_index`.
    pub fn reset(&mut self, images: Vec<String>, start_index: usize) {
        self.images = images;
        self.active_index = start_index;
    }

    /// Move one image back or forward, wrapping at either end.
    ///
    /// No-op on an empty gallery.
    pub fn step(&mut self, direction: Direction) {
        let len = self.images.len();
        if len == 0 {
            return;
        }
        let next = (self.active_index as isize + direction.offset()).rem_euclid(len as isize);
        self.active_index = next as usize;
    }

    /// Jump straight to `index`.
    ///
    /// Callers pass thumbnail indices generated from this gallery, so the
    /// index is not range-checked.
    pub fn select(&mut self, index: usize) {
        self.active_index = index;
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Image currently on screen.
    pub fn current(&self) -> Option<&str> {
        self.images.get(self.active_index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Prev/next controls are only shown with more than one image.
    pub fn is_navigable(&self) -> bool {
        self.images.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery(n: usize) -> GalleryState {
        let mut g = GalleryState::new();
        g.reset((0..n).map(|i| format!("img_{i}.png")).collect(), 0);
        g
    }

    #[test]
    fn prev_from_zero_wraps_to_last() {
        let mut g = gallery(4);
        g.step(Direction::Prev);
        assert_eq!(g.active_index(), 3);
        assert_eq!(g.current(), Some("img_3.png"));
    }

    #[test]
    fn next_from_last_wraps_to_zero() {
        let mut g = gallery(3);
        g.select(2);
        g.step(Direction::Next);
        assert_eq!(g.active_index(), 0);
    }

    #[test]
    fn single_image_stays_at_zero() {
        let mut g = gallery(1);
        g.step(Direction::Next);
        assert_eq!(g.active_index(), 0);
        g.step(Direction::Prev);
        assert_eq!(g.active_index(), 0);
        assert!(!g.is_navigable());
    }

    #[test]
    fn empty_gallery_step_is_noop() {
        let mut g = GalleryState::new();
        g.step(Direction::Next);
        g.step(Direction::Prev);
        assert_eq!(g.active_index(), 0);
        assert_eq!(g.current(), None);
    }

    #[test]
    fn reset_replaces_images_and_index() {
        let mut g = gallery(4);
        g.select(3);
        g.reset(vec!["a.png".into(), "b.png".into()], 0);
        assert_eq!(g.len(), 2);
        assert_eq!(g.active_index(), 0);
        assert_eq!(g.images(), &["a.png".to_string(), "b.png".to_string()]);
    }
}

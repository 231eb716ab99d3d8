//! Scroll-driven navigation state.
//!
//! Covers the navbar's scrolled style, which nav link is highlighted for the
//! section in view, the hero parallax offset, and the mobile menu toggle.

/// Scroll distance after which the navbar switches to its compact style.
pub const NAVBAR_SCROLLED_AFTER: f64 = 100.0;

/// How far below the top edge a section counts as "in view".
pub const SECTION_PROBE_OFFSET: f64 = 150.0;

/// Parallax is disabled at or below this viewport width.
pub const PARALLAX_MIN_WIDTH: f64 = 768.0;

pub const PARALLAX_FACTOR: f64 = 0.15;

/// Layout of one `section[id]` as reported by the page.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, probe: f64) -> bool {
        probe > self.top && probe <= self.top + self.height
    }
}

/// Derived state for the latest scroll position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScrollState {
    pub navbar_scrolled: bool,
    pub active_section: Option<String>,
    /// Hero translateY in pixels, `None` when parallax is off
    pub parallax_offset: Option<f64>,
}

impl ScrollState {
    /// Fold a new scroll sample into the state.
    ///
    /// The active section only changes when some section contains the probe
    /// line; otherwise the previous highlight stays.
    pub fn update(&mut self, scroll_y: f64, viewport_width: f64, sections: &[SectionBounds]) {
        self.navbar_scrolled = scroll_y > NAVBAR_SCROLLED_AFTER;
        if let Some(id) = active_section(scroll_y, sections) {
            if self.active_section.as_deref() != Some(id) {
                tracing::trace!(section = id, "Active section changed");
                self.active_section = Some(id.to_string());
            }
        }
        self.parallax_offset = parallax_offset(scroll_y, viewport_width);
    }

    pub fn is_active(&self, section_id: &str) -> bool {
        self.active_section.as_deref() == Some(section_id)
    }
}

/// Last section whose bounds contain `scroll_y + 150`.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    let probe = scroll_y + SECTION_PROBE_OFFSET;
    sections
        .iter()
        .filter(|s| s.contains(probe))
        .last()
        .map(|s| s.id.as_str())
}

pub fn parallax_offset(scroll_y: f64, viewport_width: f64) -> Option<f64> {
    (viewport_width > PARALLAX_MIN_WIDTH).then(|| scroll_y * PARALLAX_FACTOR)
}

/// Mobile navigation drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Following a link always closes the drawer.
    pub fn link_clicked(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("home", 0.0, 800.0),
            SectionBounds::new("about", 800.0, 600.0),
            SectionBounds::new("projects", 1400.0, 1000.0),
        ]
    }

    #[test]
    fn navbar_scrolled_threshold() {
        let mut state = ScrollState::default();
        state.update(100.0, 1200.0, &[]);
        assert!(!state.navbar_scrolled);
        state.update(100.5, 1200.0, &[]);
        assert!(state.navbar_scrolled);
    }

    #[test]
    fn active_section_uses_probe_offset() {
        let s = sections();
        assert_eq!(active_section(0.0, &s), Some("home"));
        // probe = 800: still inside home (top < probe <= top + height)
        assert_eq!(active_section(650.0, &s), Some("home"));
        assert_eq!(active_section(651.0, &s), Some("about"));
        assert_eq!(active_section(1300.0, &s), Some("projects"));
    }

    #[test]
    fn highlight_kept_when_no_section_matches() {
        let mut state = ScrollState::default();
        state.update(0.0, 1200.0, &sections());
        assert!(state.is_active("home"));
        state.update(10_000.0, 1200.0, &sections());
        assert!(state.is_active("home"));
    }

    #[test]
    fn parallax_only_on_wide_viewports() {
        assert_eq!(parallax_offset(200.0, 768.0), None);
        let offset = parallax_offset(200.0, 1024.0).unwrap();
        assert!((offset - 30.0).abs() < 1e-9);
    }

    #[test]
    fn nav_menu_toggles_and_closes_on_link() {
        let mut menu = NavMenu::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.link_clicked();
        assert!(!menu.is_open());
        menu.link_clicked();
        assert!(!menu.is_open());
    }
}

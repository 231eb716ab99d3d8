//! Portfolio category filter.

use std::fmt;
use std::str::FromStr;

use crate::catalog::{Catalog, Platform, ProjectRecord};

/// The single active filter button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Platform(Platform),
}

impl Filter {
    pub fn matches(&self, record: &ProjectRecord) -> bool {
        match self {
            Filter::All => true,
            Filter::Platform(platform) => record.platform == *platform,
        }
    }

    /// `data-filter` key for the button.
    pub fn key(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Platform(platform) => platform.key(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Platform(platform) => platform.label(),
        }
    }

    /// "All" followed by one button per platform in the catalog.
    pub fn options(catalog: &Catalog) -> Vec<Filter> {
        std::iter::once(Filter::All)
            .chain(catalog.platforms().into_iter().map(Filter::Platform))
            .collect()
    }

    /// Ids of the cards left visible, in catalog order.
    pub fn visible_ids<'a>(&self, catalog: &'a Catalog) -> Vec<&'a str> {
        catalog
            .iter()
            .filter(|record| self.matches(record))
            .map(|record| record.id.as_str())
            .collect()
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Filter::All);
        }
        s.parse().map(Filter::Platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_shows_everything() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(Filter::All.visible_ids(&catalog).len(), catalog.len());
    }

    #[test]
    fn platform_filter_hides_others() {
        let catalog = Catalog::builtin().unwrap();
        let ios = Filter::Platform(Platform::Ios).visible_ids(&catalog);
        assert!(ios.contains(&"ui-story"));
        assert!(ios.contains(&"fursah"));
        assert!(!ios.contains(&"boxit4me"));
        for id in ios {
            assert_eq!(catalog.lookup(id).unwrap().platform, Platform::Ios);
        }
    }

    #[test]
    fn options_start_with_all() {
        let catalog = Catalog::builtin().unwrap();
        let options = Filter::options(&catalog);
        assert_eq!(options[0], Filter::All);
        assert_eq!(options.len(), 4);
    }

    #[test]
    fn parse_filter_keys() {
        assert_eq!("all".parse::<Filter>().unwrap(), Filter::All);
        assert_eq!(
            "android".parse::<Filter>().unwrap(),
            Filter::Platform(Platform::Android)
        );
        assert!("web".parse::<Filter>().is_err());
    }
}

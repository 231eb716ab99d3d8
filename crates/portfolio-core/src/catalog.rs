//! Project catalog.
//!
//! A read-only table of [`ProjectRecord`]s keyed by id. The catalog is built
//! once at startup (from the embedded JSON or a file passed on the command
//! line) and never mutated afterwards. Cloning is cheap; all clones share the
//! same records.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{PortfolioError, PortfolioResult};

const BUILTIN_CATALOG: &str = include_str!("../data/projects.json");

/// Platform a project targets. Used as the portfolio filter key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    Ios,
    Android,
    CrossPlatform,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Ios, Platform::Android, Platform::CrossPlatform];

    /// Filter key as it appears in catalog files and on the CLI.
    pub fn key(&self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::CrossPlatform => "cross-platform",
        }
    }

    /// Label shown on the filter button.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Ios => "iOS",
            Platform::Android => "Android",
            Platform::CrossPlatform => "Cross-Platform",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Invalid platform '{}'. Must be one of: ios, android, cross-platform",
                    s
                )
            })
    }
}

/// A single project shown as a card and in the detail modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    /// Display category, e.g. "iOS App"
    pub category: String,
    pub platform: Platform,
    pub description: String,
    /// Technology tags in display order
    #[serde(default)]
    pub tech: Vec<String>,
    /// Feature bullet points in display order
    #[serde(default)]
    pub features: Vec<String>,
    /// Gallery images in display order; never empty in a validated catalog
    pub images: Vec<String>,
    /// External store link. `"#"` and blank strings load as `None`.
    #[serde(
        default,
        deserialize_with = "deserialize_link",
        skip_serializing_if = "Option::is_none"
    )]
    pub app_link: Option<String>,
}

fn deserialize_link<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|link| normalize_link(&link)))
}

/// Map the markup-era "no link" placeholders to `None`.
pub fn normalize_link(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "#" {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Static mapping from project id to record, in display order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Arc<Vec<ProjectRecord>>,
}

impl Catalog {
    /// The eight projects shipped with the site.
    pub fn builtin() -> PortfolioResult<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse and validate a catalog from a JSON array of records.
    pub fn from_json(json: &str) -> PortfolioResult<Self> {
        let records: Vec<ProjectRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Load a catalog file from disk.
    pub fn load(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    /// Validate records and build the catalog.
    ///
    /// Ids must be non-empty and unique, and every record needs at least one
    /// image for the gallery to show.
    pub fn from_records(records: Vec<ProjectRecord>) -> PortfolioResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if record.id.trim().is_empty() {
                return Err(PortfolioError::EmptyProjectId(position));
            }
            if !seen.insert(record.id.as_str()) {
                return Err(PortfolioError::DuplicateProject(record.id.clone()));
            }
            if record.images.is_empty() {
                return Err(PortfolioError::EmptyGallery(record.id.clone()));
            }
        }

        tracing::debug!(projects = records.len(), "Catalog loaded");

        Ok(Self {
            records: Arc::new(records),
        })
    }

    /// Find a record by id. Unknown ids yield `None`.
    pub fn lookup(&self, id: &str) -> Option<&ProjectRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lookup(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Platforms present in the catalog, in first-seen order.
    pub fn platforms(&self) -> Vec<Platform> {
        let mut platforms = Vec::new();
        for record in self.records.iter() {
            if !platforms.contains(&record.platform) {
                platforms.push(record.platform);
            }
        }
        platforms
    }
}

impl PartialEq for Catalog {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.records, &other.records) || self.records == other.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, images: &[&str]) -> ProjectRecord {
        ProjectRecord {
            id: id.to_string(),
            title: id.to_uppercase(),
            category: "iOS App".to_string(),
            platform: Platform::Ios,
            description: String::new(),
            tech: vec![],
            features: vec![],
            images: images.iter().map(|s| s.to_string()).collect(),
            app_link: None,
        }
    }

    #[test]
    fn builtin_catalog_has_eight_projects() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 8);
        for id in ["ui-story", "fursah", "boxit4me", "meezan360"] {
            assert!(catalog.contains(id), "missing {}", id);
        }
    }

    #[test]
    fn builtin_records_have_images() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.iter().all(|r| !r.images.is_empty()));
    }

    #[test]
    fn lookup_unknown_is_none() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.lookup("does-not-exist").is_none());
        assert!(catalog.lookup("").is_none());
    }

    #[test]
    fn placeholder_links_load_as_none() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.lookup("ui-story").unwrap().app_link, None);
        assert_eq!(catalog.lookup("meezan360").unwrap().app_link, None);
        assert_eq!(catalog.lookup("campus-connect").unwrap().app_link, None);
        assert_eq!(catalog.lookup("fitlog").unwrap().app_link, None);
        assert!(catalog.lookup("fursah").unwrap().app_link.is_some());
    }

    #[test]
    fn normalize_link_trims() {
        assert_eq!(normalize_link("  #  "), None);
        assert_eq!(normalize_link(""), None);
        assert_eq!(
            normalize_link(" https://example.com "),
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn duplicate_ids_rejected() {
        let err = Catalog::from_records(vec![record("a", &["x.png"]), record("a", &["y.png"])])
            .unwrap_err();
        assert!(matches!(err, PortfolioError::DuplicateProject(id) if id == "a"));
    }

    #[test]
    fn empty_gallery_rejected() {
        let err = Catalog::from_records(vec![record("a", &[])]).unwrap_err();
        assert!(matches!(err, PortfolioError::EmptyGallery(id) if id == "a"));
    }

    #[test]
    fn empty_id_rejected() {
        let err = Catalog::from_records(vec![record("a", &["x.png"]), record(" ", &["y.png"])])
            .unwrap_err();
        assert!(matches!(err, PortfolioError::EmptyProjectId(1)));
    }

    #[test]
    fn malformed_json_rejected() {
        let err = Catalog::from_json("{ not a list").unwrap_err();
        assert!(matches!(err, PortfolioError::CatalogParse(_)));
    }

    #[test]
    fn order_is_preserved() {
        let catalog = Catalog::from_records(vec![
            record("b", &["1.png"]),
            record("a", &["2.png"]),
            record("c", &["3.png"]),
        ])
        .unwrap();
        let ids: Vec<_> = catalog.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn platform_parse_and_display() {
        assert_eq!("ios".parse::<Platform>().unwrap(), Platform::Ios);
        assert_eq!(
            "Cross-Platform".parse::<Platform>().unwrap(),
            Platform::CrossPlatform
        );
        assert!("windows".parse::<Platform>().is_err());
        assert_eq!(Platform::Android.to_string(), "android");
    }

    #[test]
    fn builtin_platforms_in_first_seen_order() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(
            catalog.platforms(),
            vec![Platform::Ios, Platform::Android, Platform::CrossPlatform]
        );
    }
}

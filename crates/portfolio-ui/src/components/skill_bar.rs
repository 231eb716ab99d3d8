//! Skill Card Component
//!
//! Skill name with a progress bar that fills once the card has been
//! scrolled into view.

use dioxus::prelude::*;
use portfolio_core::skill_bar_width;

/// A skill and how far its bar fills, 0..=100
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub progress: u8,
}

impl Skill {
    pub fn new(id: &str, name: &str, progress: u8) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            progress,
        }
    }
}

/// Properties for the SkillCard component
#[derive(Clone, PartialEq, Props)]
pub struct SkillCardProps {
    pub skill: Skill,
    /// Whether the card has been revealed; the bar stays empty until then
    pub revealed: bool,
}

/// Skill card with animated progress bar
///
/// The width change animates through the `.skill-progress` CSS transition.
/// The element id is used by the page bridge to observe visibility.
#[component]
pub fn SkillCard(props: SkillCardProps) -> Element {
    let width = skill_bar_width(props.skill.progress, props.revealed);

    rsx! {
        div {
            class: "skill-card",
            id: "skill-{props.skill.id}",
            "data-reveal": "skill",
            div { class: "skill-header",
                span { class: "skill-name", "{props.skill.name}" }
                span { class: "skill-percent", "{props.skill.progress}%" }
            }
            div { class: "skill-bar",
                div {
                    class: "skill-progress",
                    style: "width: {width};",
                    "data-progress": "{props.skill.progress}",
                }
            }
        }
    }
}

/// Skills shown on the page
pub fn default_skills() -> Vec<Skill> {
    vec![
        Skill::new("swift", "Swift / SwiftUI", 95),
        Skill::new("kotlin", "Kotlin / Jetpack Compose", 90),
        Skill::new("flutter", "Flutter / Dart", 80),
        Skill::new("firebase", "Firebase", 85),
        Skill::new("rest", "REST & GraphQL APIs", 88),
        Skill::new("git", "Git & CI/CD", 82),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_skills_have_unique_ids() {
        let skills = default_skills();
        let mut ids: Vec<_> = skills.iter().map(|s| s.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), skills.len());
    }

    #[test]
    fn default_skills_progress_in_range() {
        assert!(default_skills().iter().all(|s| s.progress <= 100));
    }
}

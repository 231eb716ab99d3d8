//! Skills section.

use dioxus::prelude::*;
use portfolio_ui::{default_skills, SkillCard};

use crate::components::FadeIn;
use crate::context::use_page;

#[component]
pub fn Skills() -> Element {
    let reveals = use_page().reveals;
    let skills = default_skills();

    rsx! {
        section { id: "skills", class: "skills",
            FadeIn { id: "fade-skills",
                h2 { class: "section-title", "Skills" }
                p { class: "section-subtitle", "Tools I reach for every day" }
            }
            div { class: "skills-grid",
                for skill in skills {
                    {
                        let revealed = reveals.read().is_revealed(&format!("skill-{}", skill.id));
                        rsx! {
                            SkillCard { key: "{skill.id}", skill: skill.clone(), revealed: revealed }
                        }
                    }
                }
            }
        }
    }
}

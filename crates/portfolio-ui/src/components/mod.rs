//! Reusable UI components for the portfolio.

mod button;
mod filter_pills;
mod skill_bar;
mod tech_tags;

pub use button::*;
pub use filter_pills::*;
pub use skill_bar::*;
pub use tech_tags::*;

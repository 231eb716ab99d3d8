//! Global styles for the portfolio.

mod styles;

pub use styles::GLOBAL_STYLES;

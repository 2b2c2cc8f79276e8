//! Styling for the intro page.

mod styles;

pub use styles::GLOBAL_STYLES;

//! Page context for the intro page.
//!
//! The [`PageHandle`] created by `App` is provided to every component through
//! context.
//!
//! ## Usage
//!
//! ```ignore
//! let page = use_page();
//!
//! // Public operations
//! page.cycle_theme();
//! page.show_notification("Hello");
//! page.apply_theme(Theme::new("mono", "#111", "#222", "#333"))?;
//! ```

use dioxus::prelude::*;

use lumen_core::PageConfig;

use crate::runtime::PageHandle;

/// Get the page configuration loaded at startup.
pub fn get_page_config() -> PageConfig {
    crate::get_page_config()
}

/// Hook to access the running page from context.
pub fn use_page() -> PageHandle {
    use_context::<PageHandle>()
}

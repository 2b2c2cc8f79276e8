//! Lumen UI Components
//!
//! Dioxus components for the intro page. They render state handed to them
//! by the page runtime and report raw input back through event handlers;
//! none of them keeps page state of its own.
//!
//! ## Class contract
//!
//! The stylesheet in the `lumen` binary styles these classes:
//! - `particle`, `particles`: floating background field
//! - `ripple`, `pulse`, `fadeInUp`: action button feedback
//! - `notification`, `show`: toast lifecycle

pub mod components;

pub use components::*;

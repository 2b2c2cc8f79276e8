//! Structured logging for the page runtime.
//!
//! Console output goes through `tracing-subscriber`'s fmt layer. Optionally
//! every event is also appended as one JSON object per line to a per-day
//! file, so a session's theme changes, skipped effects and forwarded script
//! errors can be inspected afterwards.
//!
//! ```text
//! <log_dir>/
//! └── raw/
//!     └── 2026-10-17_lumen.jsonl
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use lumen_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new("lumen")
//!     .with_log_dir("./logs")
//!     .with_filter("lumen=debug")
//!     .init()?;
//! ```
//!
//! ```bash
//! # Every forwarded script error
//! jq 'select(.level == "error")' logs/raw/*.jsonl
//! ```

pub mod entry;
pub mod layer;
pub mod writer;

pub use entry::JsonLogEntry;
pub use layer::{JsonlLayer, LoggingBuilder, DEFAULT_FILTER};
pub use writer::SessionLogWriter;

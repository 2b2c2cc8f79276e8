//! Lumen Core Library
//!
//! Display-free decision logic for the Lumen intro page.
//!
//! ## Overview
//!
//! The page is a single controller reacting to a handful of input sources
//! (clicks, keys, pointer movement, resize, visibility) and timers. This crate
//! owns every "what happens next" decision so it can be tested without a
//! webview:
//!
//! - **Themes**: a cyclic palette of named color triples
//! - **Typewriter**: character-by-character title reveal
//! - **Particles**: randomized background field, repositioned on resize
//! - **Notifications**: fixed-duration toast lifecycle
//! - **Controller**: one reducer turning [`PageEvent`]s into [`Command`]s
//!
//! The Dioxus runtime in the `lumen` binary applies the commands.
//!
//! ## Quick Start
//!
//! ```ignore
//! use lumen_core::{ActionOrigin, Command, PageConfig, PageController, PageEvent};
//!
//! let config = PageConfig::default();
//! let mut controller = PageController::new(&config)?;
//!
//! for command in controller.handle(PageEvent::Action(ActionOrigin::Keyboard)) {
//!     match command {
//!         Command::ApplyTheme(theme) => println!("now showing {}", theme.name),
//!         other => println!("{:?}", other),
//!     }
//! }
//! ```

pub mod config;
pub mod controller;
pub mod debounce;
pub mod elements;
pub mod entrance;
pub mod error;
pub mod input;
pub mod logging;
pub mod notification;
pub mod parallax;
pub mod particles;
pub mod ripple;
pub mod theme;
pub mod timers;
pub mod typewriter;

// Re-exports
pub use config::{PageConfig, PageCopy, ParticleConfig, Timings};
pub use controller::{Command, PageController, PageState};
pub use debounce::{DebounceSlot, DebounceTicket, Debouncer};
pub use elements::{ElementCache, ElementRole};
pub use entrance::{EntranceAction, EntranceScript, EntranceStep};
pub use error::{PageError, PageResult};
pub use input::{ActionOrigin, Key, PageEvent, Point, Size, Viewport};
pub use notification::{
    Notification, NotificationCenter, NotificationId, NotificationSchedule, NotificationStage,
};
pub use parallax::ParallaxOffset;
pub use particles::{Particle, ParticleField};
pub use ripple::{Ripple, RippleId, RippleSet, FALLBACK_ACTION_SIZE};
pub use theme::{Theme, ThemeCycler, ThemePalette};
pub use timers::{TimerHandle, TimerId, TimerRegistry};
pub use typewriter::{Typewriter, TypewriterFrame};

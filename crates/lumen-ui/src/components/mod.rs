//! Reusable components for the intro page.

mod action_button;
mod notification_stack;
mod particle_layer;

pub use action_button::*;
pub use notification_stack::*;
pub use particle_layer::*;

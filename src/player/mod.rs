//! Player module - locomotion, jump, and the kick-leg state machine

mod components;
mod physics;

pub use components::*;
pub use physics::*;

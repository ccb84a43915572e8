//! Ball module - spin state and aerodynamics systems

mod components;
mod physics;

pub use components::*;
pub use physics::*;

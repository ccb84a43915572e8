//! AI module - the autonomous decision driver
//!
//! The decision policy is a pure function of {ball, opponent, self,
//! defended side} so it can be exercised in isolation or disabled entirely
//! (Controller::None) for deterministic tests. A system adapter feeds its
//! output into the same InputState the human driver writes.

mod decision;

pub use decision::*;

use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Per-entity command buffer read by the physics systems.
/// Human input is copied here; the AI writes here directly.
#[derive(Component, Default, Debug, Clone, Copy)]
pub struct InputState {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    pub kick: bool,
}

/// Match-scoped RNG driving the AI's probability rolls. Seeded from
/// MatchConfig so a match replays identically for a given seed.
#[derive(Resource)]
pub struct MatchRng(pub StdRng);

impl MatchRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

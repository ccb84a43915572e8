//! Player-related components

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Marker for player entities
#[derive(Component)]
pub struct Player;

/// Which side a player defends. Fixed at spawn; also fixes the look
/// direction all hitbox geometry is mirrored by (the left-side player
/// looks right and vice versa).
#[derive(Component, Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Team {
    Left,
    Right,
}

impl Team {
    /// Fixed look direction: +1.0 faces right, -1.0 faces left
    pub fn look(self) -> f32 {
        match self {
            Team::Left => 1.0,
            Team::Right => -1.0,
        }
    }

    /// Direction toward the defended goal along x
    pub fn own_goal_dir(self) -> f32 {
        match self {
            Team::Left => -1.0,
            Team::Right => 1.0,
        }
    }
}

/// Direction the player currently faces (-1.0 = left, 1.0 = right).
/// Set by locomotion; only the AI kick decision consults it. Hitbox
/// mirroring uses the fixed `Team::look` instead.
#[derive(Component)]
pub struct Facing(pub f32);

impl Default for Facing {
    fn default() -> Self {
        Self(1.0)
    }
}

/// Who drives this player's InputState each frame
#[derive(Component, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Controller {
    Human,
    Ai,
    /// Receives neutral input every frame (deterministic tests)
    #[default]
    None,
}

/// The swinging-limb sub-state machine. The angle is stored in the
/// canonical facing-right frame and mirrored at read time.
#[derive(Component, Debug, Clone)]
pub struct KickLeg {
    pub angle: f32,
    /// Discriminator: true = swinging toward the kick angle,
    /// false = returning to rest
    pub swinging: bool,
    /// Seconds until the next kick command is accepted
    pub cooldown: f32,
}

impl Default for KickLeg {
    fn default() -> Self {
        Self {
            angle: LEG_REST_ANGLE,
            swinging: false,
            cooldown: 0.0,
        }
    }
}

/// World-frame foot state, derived from the leg angle and look direction
/// every frame. The collision resolver and any renderer consume only this.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Foot {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Mirrored leg angle in world frame
    pub angle: f32,
}

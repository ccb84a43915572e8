//! Global gameplay tuning (decoupled from the constant sheet)
//!
//! Systems read feel-critical values from the `PhysicsTweaks` resource rather
//! than the constants directly, so a config file can reshape the game without
//! a rebuild. Missing file means defaults; a malformed file logs a warning and
//! keeps defaults.

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Path to global gameplay tuning config
pub const GAMEPLAY_TUNING_FILE: &str = "config/gameplay_tuning.json";

/// Serializable tuning values stored in config
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameplayTuning {
    pub gravity: f32,
    pub wall_bounce: f32,
    pub player_speed: f32,
    pub jump_force: f32,
    pub idle_decay: f32,
    pub player_drag: f32,
    pub ball_drag: f32,
    pub ball_restitution: f32,
    pub spin_decay: f32,
    pub magnus_strength: f32,
    pub kick_cooldown: f32,
    pub leg_swing_speed: f32,
    pub leg_return_speed: f32,
}

impl Default for GameplayTuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            wall_bounce: WALL_BOUNCE,
            player_speed: PLAYER_SPEED,
            jump_force: JUMP_FORCE,
            idle_decay: IDLE_DECAY,
            player_drag: PLAYER_DRAG,
            ball_drag: BALL_DRAG,
            ball_restitution: BALL_RESTITUTION,
            spin_decay: SPIN_DECAY,
            magnus_strength: MAGNUS_STRENGTH,
            kick_cooldown: KICK_COOLDOWN,
            leg_swing_speed: LEG_SWING_SPEED,
            leg_return_speed: LEG_RETURN_SPEED,
        }
    }
}

impl GameplayTuning {
    pub fn apply_to(&self, tweaks: &mut PhysicsTweaks) {
        tweaks.gravity = self.gravity;
        tweaks.wall_bounce = self.wall_bounce;
        tweaks.player_speed = self.player_speed;
        tweaks.jump_force = self.jump_force;
        tweaks.idle_decay = self.idle_decay;
        tweaks.player_drag = self.player_drag;
        tweaks.ball_drag = self.ball_drag;
        tweaks.ball_restitution = self.ball_restitution;
        tweaks.spin_decay = self.spin_decay;
        tweaks.magnus_strength = self.magnus_strength;
        tweaks.kick_cooldown = self.kick_cooldown;
        tweaks.leg_swing_speed = self.leg_swing_speed;
        tweaks.leg_return_speed = self.leg_return_speed;
    }
}

/// Runtime-adjustable physics values read by the simulation systems
#[derive(Resource, Debug, Clone)]
pub struct PhysicsTweaks {
    pub gravity: f32,
    pub wall_bounce: f32,
    pub player_speed: f32,
    pub jump_force: f32,
    pub idle_decay: f32,
    pub player_drag: f32,
    pub ball_drag: f32,
    pub ball_restitution: f32,
    pub spin_decay: f32,
    pub magnus_strength: f32,
    pub kick_cooldown: f32,
    pub leg_swing_speed: f32,
    pub leg_return_speed: f32,
}

impl Default for PhysicsTweaks {
    fn default() -> Self {
        let defaults = GameplayTuning::default();
        let mut tweaks = Self {
            gravity: 0.0,
            wall_bounce: 0.0,
            player_speed: 0.0,
            jump_force: 0.0,
            idle_decay: 0.0,
            player_drag: 0.0,
            ball_drag: 0.0,
            ball_restitution: 0.0,
            spin_decay: 0.0,
            magnus_strength: 0.0,
            kick_cooldown: 0.0,
            leg_swing_speed: 0.0,
            leg_return_speed: 0.0,
        };
        defaults.apply_to(&mut tweaks);
        tweaks
    }
}

pub fn load_gameplay_tuning_from_file(path: &str) -> Result<GameplayTuning, String> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read {path}: {e}"))?;
    serde_json::from_str(&contents).map_err(|e| format!("Failed to parse {path}: {e}"))
}

/// Apply the global tuning file to tweaks, if it exists.
/// A missing file is normal (defaults apply); parse errors are reported.
pub fn apply_global_tuning(tweaks: &mut PhysicsTweaks) -> Result<(), String> {
    if !std::path::Path::new(GAMEPLAY_TUNING_FILE).exists() {
        return Ok(());
    }
    let tuning = load_gameplay_tuning_from_file(GAMEPLAY_TUNING_FILE)?;
    tuning.apply_to(tweaks);
    Ok(())
}

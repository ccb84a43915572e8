//! Input module - the per-frame command surface for the human-controlled side
//!
//! The host writes a `PlayerInput` each frame (from whatever device it
//! captures); `copy_human_input` moves it into the human player's
//! `InputState`, which is the single source every physics system reads.
//! The default value is neutral, so a host that writes nothing produces a
//! standing player rather than a fault.

use bevy::prelude::*;

use crate::ai::InputState;
use crate::player::{Controller, Player};

/// Command states for the human-controlled player, valid for one frame.
/// Matches the four-command shape the AI driver produces.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct PlayerInput {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    pub kick: bool,
}

/// Copy the host-provided input into the human player's InputState.
/// Runs first in the frame chain; AI players get theirs from ai_decision,
/// Controller::None players keep the neutral default.
pub fn copy_human_input(
    input: Res<PlayerInput>,
    mut players: Query<(&Controller, &mut InputState), With<Player>>,
) {
    for (controller, mut state) in &mut players {
        if *controller == Controller::Human {
            state.move_left = input.move_left;
            state.move_right = input.move_right;
            state.jump = input.jump;
            state.kick = input.kick;
        }
    }
}

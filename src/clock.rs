//! Match clock
//!
//! Time advances by the fixed step every frame and is folded into whole
//! displayed seconds through an accumulator. The clock keeps running during
//! goal celebrations; only the final whistle waits for the celebration to
//! finish, so a last-second goal still gets its full pause.

use bevy::prelude::*;

use crate::celebration::Celebration;
use crate::constants::SIM_DT;
use crate::events::{EventBus, GameEvent};
use crate::scoring::Score;
use crate::teams::OnMatchEnd;

/// Countdown state for the current match
#[derive(Resource, Debug)]
pub struct MatchClock {
    /// Whole seconds still to play
    pub time_left: u32,
    /// Sub-second remainder, folded into time_left at 1.0
    pub accumulator: f32,
    /// Total simulated seconds since kickoff
    pub elapsed: f32,
    pub ended: bool,
}

impl MatchClock {
    pub fn new(duration_secs: u32) -> Self {
        Self {
            time_left: duration_secs,
            accumulator: 0.0,
            elapsed: 0.0,
            ended: false,
        }
    }
}

/// Run condition: physics and input may advance
pub fn match_live(clock: Res<MatchClock>, celebration: Res<Celebration>) -> bool {
    !clock.ended && !celebration.active
}

/// Run condition: a goal celebration is in progress
pub fn celebrating(celebration: Res<Celebration>) -> bool {
    celebration.active
}

/// Run condition: the final whistle has not gone
pub fn match_running(clock: Res<MatchClock>) -> bool {
    !clock.ended
}

/// Advance the clock one fixed step and fire the final whistle.
///
/// The whistle is deferred while a celebration is active; the first frame
/// after it expires ends the match, emits MatchEnd, and invokes the host's
/// end-of-match callback exactly once.
pub fn update_clock(
    mut clock: ResMut<MatchClock>,
    celebration: Res<Celebration>,
    score: Res<Score>,
    mut bus: ResMut<EventBus>,
    mut on_end: ResMut<OnMatchEnd>,
) {
    if clock.ended {
        return;
    }

    clock.elapsed += SIM_DT;
    if clock.time_left > 0 {
        clock.accumulator += SIM_DT;
        if clock.accumulator >= 1.0 {
            clock.accumulator -= 1.0;
            clock.time_left -= 1;
        }
    }

    if clock.time_left == 0 && !celebration.active {
        clock.ended = true;
        bus.emit(GameEvent::MatchEnd {
            score_left: score.left,
            score_right: score.right,
            duration: clock.elapsed,
        });
        if let Some(callback) = on_end.0.take() {
            callback(score.left, score.right);
        }
    }
}

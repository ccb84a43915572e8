//! Event type definitions

use serde::{Deserialize, Serialize};

use crate::player::Team;

/// Player identifier (Left or Right)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerId {
    L,
    R,
}

impl From<Team> for PlayerId {
    fn from(team: Team) -> Self {
        match team {
            Team::Left => PlayerId::L,
            Team::Right => PlayerId::R,
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerId::L => write!(f, "L"),
            PlayerId::R => write!(f, "R"),
        }
    }
}

/// All match events that can be emitted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameEvent {
    /// Match started (emitted once at kickoff)
    MatchStart {
        session_id: String, // UUID v4
        timestamp: String,  // ISO 8601
        home: String,
        away: String,
        duration_secs: u32,
        seed: u64,
    },
    /// Match ended at the final whistle
    MatchEnd {
        score_left: u32,
        score_right: u32,
        duration: f32,
    },
    /// Goal scored
    Goal {
        player: PlayerId,
        score_left: u32,
        score_right: u32,
    },
    /// Kick swing started
    Kick { player: PlayerId },
    /// Player left the ground
    Jump { player: PlayerId },
}

impl GameEvent {
    /// Get the event type code for compact serialization
    pub fn type_code(&self) -> &'static str {
        match self {
            GameEvent::MatchStart { .. } => "MS",
            GameEvent::MatchEnd { .. } => "ME",
            GameEvent::Goal { .. } => "G",
            GameEvent::Kick { .. } => "K",
            GameEvent::Jump { .. } => "J",
        }
    }
}

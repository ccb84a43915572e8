//! Match initiation surface: team descriptors, match configuration, and the
//! completion callback handed in by the caller.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::player::Team;

/// Minimal team descriptor supplied by the caller. Colors are presentation
/// data carried through untouched; the core never draws.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamInfo {
    pub name: String,
    /// Primary/secondary colors as `#rrggbb` strings
    pub primary: String,
    pub secondary: String,
}

impl TeamInfo {
    pub fn new(name: &str, primary: &str, secondary: &str) -> Self {
        Self {
            name: name.to_string(),
            primary: primary.to_string(),
            secondary: secondary.to_string(),
        }
    }
}

/// Configuration for a single match
#[derive(Resource, Debug, Clone)]
pub struct MatchConfig {
    pub home: TeamInfo,
    pub away: TeamInfo,
    /// Which side the human controls; None = no human player
    pub human_side: Option<Team>,
    pub duration_secs: u32,
    pub celebration_secs: f32,
    /// Seed for the match RNG (AI decision rolls)
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            home: TeamInfo::new("Home", "#d04030", "#ffffff"),
            away: TeamInfo::new("Away", "#3060d0", "#ffff80"),
            human_side: None,
            duration_secs: MATCH_DURATION_SECS,
            celebration_secs: CELEBRATION_SECS,
            seed: 0,
        }
    }
}

/// Completion callback invoked exactly once with the final (left, right)
/// score when the match reaches its end state.
#[derive(Resource, Default)]
pub struct OnMatchEnd(pub Option<Box<dyn FnOnce(u32, u32) + Send + Sync>>);

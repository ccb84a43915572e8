//! Headless simulation harness
//!
//! Builds the full match as a headless Bevy app and paces it frame by frame.
//! Each `App::update()` advances exactly one fixed step, so driving the app
//! yourself gives deterministic, faster-than-realtime matches.

mod app_builder;
mod runner;

pub use app_builder::*;
pub use runner::*;

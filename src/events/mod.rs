//! Match event stream
//!
//! Systems emit timestamped events to a central bus; the host drains them
//! for commentary, replays, or analytics. Nothing inside the simulation
//! consumes them, so a disabled bus changes no gameplay.

mod bus;
mod types;

pub use bus::*;
pub use types::*;

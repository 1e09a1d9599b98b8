//! Character-centric game logic.

pub mod stats;

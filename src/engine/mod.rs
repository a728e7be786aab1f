//! Simulation core
//!
//! The tile map and the player motion model. Nothing in here touches the
//! window, textures, or the keyboard - the session layer feeds in intents
//! and reads positions back out, which keeps the whole module testable
//! headless.

pub mod config;
pub mod level;
pub mod player;

pub use config::SimConfig;
pub use level::{Direction, Level, LevelError, Tile};
pub use player::{MoveIntent, Player};

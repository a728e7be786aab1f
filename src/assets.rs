//! Embedded runtime assets
//!
//! The sprite sheet and the bundled level ship inside the binary, so the
//! game runs from a bare executable with no data directory next to it.

/// 3x3 sprite sheet of 16 px cells; cell order matches tile ids 1..=9.
pub const SPRITES: &[u8] = include_bytes!("../assets/sprites.png");

/// The bundled level document (layers/chunks JSON).
pub const LEVEL_01: &[u8] = include_bytes!("../assets/levels/level-01.json");

/// Sprite sheet grid dimensions.
pub const SHEET_ROWS: u16 = 3;
pub const SHEET_COLUMNS: u16 = 3;

//! Keyboard input mapping
//!
//! Polls macroquad key state once per frame and reduces it to the discrete
//! intents the simulation consumes. The simulation core never reads the
//! keyboard directly.

use crate::engine::MoveIntent;
use macroquad::prelude::{is_key_down, is_key_pressed, KeyCode};

/// Input snapshot for one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub intent: MoveIntent,
    pub jump: bool,
}

/// Read the current key state into a frame snapshot. Left wins when both
/// horizontal keys are held.
pub fn poll() -> FrameInput {
    let left = is_key_down(KeyCode::Left) || is_key_down(KeyCode::A);
    let right = is_key_down(KeyCode::Right) || is_key_down(KeyCode::D);

    let intent = if left {
        MoveIntent::Left
    } else if right {
        MoveIntent::Right
    } else {
        MoveIntent::None
    };

    let jump = is_key_pressed(KeyCode::Space)
        || is_key_pressed(KeyCode::Up)
        || is_key_pressed(KeyCode::W);

    FrameInput { intent, jump }
}

//! Player state and motion
//!
//! Axis-separated velocity integration against the tile map. Every
//! simulation step accelerates from the input intent, probes the destination
//! cell on the moving axis, and either commits the move or zeroes the
//! velocity on that axis. Positions are fractional tile coordinates (1.0 =
//! one tile edge).
//!
//! Horizontal resolution backs the player off by a fixed nudge on contact
//! and lets velocity coast down when input stops. Vertical resolution snaps
//! to the contact row: gravity accumulates while airborne, a grounded jump
//! applies an upward impulse, and landing pins the player to the floor.

use super::config::{self, SimConfig};
use super::level::{Direction, Level, Tile};

/// Horizontal input intent for one simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveIntent {
    #[default]
    None,
    Left,
    Right,
}

/// Player motion state. Created zeroed, positioned once from the spawn cell,
/// then mutated exclusively by [`Player::step`].
#[derive(Debug, Clone, Default)]
pub struct Player {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    grounded: bool,
}

fn solid(tile: Option<Tile>) -> bool {
    tile.map_or(false, Tile::is_solid)
}

/// Decay `v` toward zero by `amount`, clamping to exactly zero on overshoot.
fn decay_toward_zero(v: f32, amount: f32) -> f32 {
    if v > 0.0 {
        (v - amount).max(0.0)
    } else if v < 0.0 {
        (v + amount).min(0.0)
    } else {
        0.0
    }
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place the player on a grid cell and reset all motion.
    pub fn spawn_at(&mut self, grid_x: i32, grid_y: i32) {
        self.x = grid_x as f32;
        self.y = grid_y as f32;
        self.vx = 0.0;
        self.vy = 0.0;
        self.grounded = false;
    }

    /// Position in fractional tile coordinates.
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Velocity in tiles per tick.
    pub fn velocity(&self) -> (f32, f32) {
        (self.vx, self.vy)
    }

    /// Whether the player is resting on solid ground.
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Advance the simulation by one tick.
    pub fn step(&mut self, intent: MoveIntent, jump: bool, level: &Level, config: &SimConfig) {
        let vmax = config.vmax();
        self.step_horizontal(intent, vmax, level, config);
        self.step_vertical(jump, vmax, level, config);
    }

    fn step_horizontal(&mut self, intent: MoveIntent, vmax: f32, level: &Level, config: &SimConfig) {
        match intent {
            MoveIntent::Right if self.vx <= vmax => {
                self.vx = (self.vx + config::ACCEL_FRACTION * vmax).min(vmax);
            }
            MoveIntent::Left if self.vx >= -vmax => {
                self.vx = (self.vx - config::ACCEL_FRACTION * vmax).max(-vmax);
            }
            _ => {}
        }

        if self.vx == 0.0 {
            return;
        }

        let inset = config.hitbox_inset_x();
        let (probe_x, direction) = if self.vx > 0.0 {
            (self.x - inset + self.vx, Direction::Right)
        } else {
            (self.x + inset - self.vx, Direction::Left)
        };

        if solid(level.tile_at(probe_x, self.y, direction)) {
            // back off the obstacle instead of resolving the exact overlap
            let nudge = config::CONTACT_NUDGE * config.tile_size;
            if self.vx > 0.0 {
                self.x -= nudge;
            } else {
                self.x += nudge;
            }
            self.vx = 0.0;
        } else {
            self.x += self.vx;
            self.vx = decay_toward_zero(self.vx, config::DECAY_FRACTION * vmax);
        }
    }

    fn step_vertical(&mut self, jump: bool, vmax: f32, level: &Level, config: &SimConfig) {
        let gravity = config::GRAVITY_FRACTION * vmax;
        let inset = config.hitbox_inset_y();

        if jump && self.grounded {
            self.vy = -config::JUMP_IMPULSE_FRACTION * vmax;
            self.grounded = false;
        }

        if self.grounded {
            // still supported? the probe looks one gravity tick below the
            // hitbox bottom
            let probe = self.y + 1.0 - inset + gravity;
            if solid(level.tile_at(self.x, probe, Direction::Down)) {
                return;
            }
            self.grounded = false;
        }

        // terminal fall speed shares the horizontal cap, so a vertical step
        // can never tunnel either
        self.vy = (self.vy + gravity).min(vmax);

        let (probe_y, direction) = if self.vy > 0.0 {
            (self.y + 1.0 - inset + self.vy, Direction::Down)
        } else {
            (self.y + inset + self.vy, Direction::Up)
        };

        if solid(level.tile_at(self.x, probe_y, direction)) {
            let contact_row = probe_y.floor();
            if self.vy > 0.0 {
                // land: hitbox bottom on the floor row's top edge
                self.y = contact_row - 1.0 + inset;
                self.grounded = true;
            } else {
                // bump: hitbox top under the ceiling row's bottom edge
                self.y = contact_row + 1.0 - inset;
            }
            self.vy = 0.0;
        } else {
            self.y += self.vy;
        }
    }
}

//! Simulation configuration
//!
//! Tile geometry and tick rate, from which the speed cap is derived. Motion
//! tuning constants live here so the player code reads as pure mechanics.

/// Horizontal inset of the collision box from the sprite edge, in pixels.
/// The sprite art carries transparent margins, so the body is narrower than
/// the tile.
pub const HITBOX_INSET_X_PX: f32 = 5.0;

/// Vertical inset of the collision box from the sprite edge, in pixels.
pub const HITBOX_INSET_Y_PX: f32 = 6.0;

/// Fraction of a tile the player is pushed back from an obstacle on contact.
pub const CONTACT_NUDGE: f32 = 0.01;

/// Acceleration gained per tick under input, as a fraction of the speed cap.
pub const ACCEL_FRACTION: f32 = 0.1;

/// Velocity lost per tick while coasting, as a fraction of the speed cap.
pub const DECAY_FRACTION: f32 = 0.05;

/// Downward acceleration per airborne tick, as a fraction of the speed cap.
pub const GRAVITY_FRACTION: f32 = 0.1;

/// Upward impulse of a grounded jump, as a multiple of the speed cap.
pub const JUMP_IMPULSE_FRACTION: f32 = 2.5;

/// Tile geometry and simulation rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    /// Tile edge length in pixels.
    pub tile_size: f32,
    /// Simulation steps per second.
    pub ticks_per_second: f32,
}

impl SimConfig {
    /// Horizontal speed cap in tiles per tick. The cap keeps a single step
    /// well under one tile, so the player cannot tunnel through a
    /// single-tile obstacle.
    pub fn vmax(&self) -> f32 {
        self.tile_size / self.ticks_per_second / 2.0
    }

    /// Horizontal collision-box inset in tile units.
    pub fn hitbox_inset_x(&self) -> f32 {
        HITBOX_INSET_X_PX / self.tile_size
    }

    /// Vertical collision-box inset in tile units.
    pub fn hitbox_inset_y(&self) -> f32 {
        HITBOX_INSET_Y_PX / self.tile_size
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tile_size: 16.0,
            ticks_per_second: 60.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vmax_derivation() {
        let config = SimConfig {
            tile_size: 16.0,
            ticks_per_second: 60.0,
        };
        assert!((config.vmax() - 16.0 / 60.0 / 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_insets_scale_with_tile_size() {
        let config = SimConfig {
            tile_size: 32.0,
            ticks_per_second: 60.0,
        };
        assert!((config.hitbox_inset_x() - 5.0 / 32.0).abs() < f32::EPSILON);
        assert!((config.hitbox_inset_y() - 6.0 / 32.0).abs() < f32::EPSILON);
    }
}

//! Screen state machine and play session
//!
//! One update/draw pair per screen, dispatched exhaustively from the frame
//! loop - a screen change always goes through `App::screen`, never through
//! fallthrough. The play session (level, player, facing) lives here; the
//! simulation core only ever sees intents and the level.

use crate::engine::{Level, MoveIntent, Player, SimConfig, Tile};
use crate::screens;
use crate::tileset::Tileset;

/// Which screen owns update and draw this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Splash,
    Level,
    GameOver,
}

/// Player sprite facing, tracked from the last nonzero intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Idle,
    Right,
}

impl Facing {
    /// The sprite-sheet tile that shows this facing.
    pub fn tile(self) -> Tile {
        match self {
            Facing::Left => Tile::FacingLeft,
            Facing::Idle => Tile::Idle,
            Facing::Right => Tile::FacingRight,
        }
    }

    /// Facing after one frame of the given intent; no intent keeps the
    /// previous facing.
    pub fn after(self, intent: MoveIntent) -> Facing {
        match intent {
            MoveIntent::Left => Facing::Left,
            MoveIntent::Right => Facing::Right,
            MoveIntent::None => self,
        }
    }
}

/// One play-through of a level.
pub struct Session {
    pub level: Level,
    pub player: Player,
    pub facing: Facing,
}

pub struct App {
    pub screen: Screen,
    pub config: SimConfig,
    pub tileset: Tileset,
    pub session: Option<Session>,
}

impl App {
    pub fn new(config: SimConfig, tileset: Tileset) -> Self {
        Self {
            screen: Screen::Splash,
            config,
            tileset,
            session: None,
        }
    }

    /// Parse the bundled level, place the player on its spawn cell, and
    /// enter the play screen. A level that fails to parse keeps the current
    /// screen; there is no partially-loaded session.
    pub fn start_new_game(&mut self) {
        let level = match Level::parse(crate::assets::LEVEL_01) {
            Ok(level) => level,
            Err(e) => {
                eprintln!("Failed to load level: {}", e);
                return;
            }
        };

        let mut player = Player::new();
        match level.find_spawn() {
            Some((grid_x, grid_y)) => player.spawn_at(grid_x, grid_y),
            None => {
                println!("Level has no spawn marker, starting at the origin");
                player.spawn_at(0, 0);
            }
        }

        self.session = Some(Session {
            level,
            player,
            facing: Facing::Idle,
        });
        self.screen = Screen::Level;
    }

    /// Drop the session and return to the splash screen.
    pub fn back_to_menu(&mut self) {
        self.session = None;
        self.screen = Screen::Splash;
    }

    pub fn update(&mut self) {
        match self.screen {
            Screen::Splash => screens::splash::update(self),
            Screen::Level => screens::level::update(self),
            Screen::GameOver => screens::game_over::update(self),
        }
    }

    pub fn draw(&self) {
        match self.screen {
            Screen::Splash => screens::splash::draw(self),
            Screen::Level => screens::level::draw(self),
            Screen::GameOver => screens::game_over::draw(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_follows_intent_and_sticks() {
        let facing = Facing::Idle.after(MoveIntent::Right);
        assert_eq!(facing, Facing::Right);
        // no intent keeps the previous facing
        assert_eq!(facing.after(MoveIntent::None), Facing::Right);
        assert_eq!(facing.after(MoveIntent::Left), Facing::Left);
    }

    #[test]
    fn test_facing_maps_to_sprite_tiles() {
        assert_eq!(Facing::Left.tile(), Tile::FacingLeft);
        assert_eq!(Facing::Idle.tile(), Tile::Idle);
        assert_eq!(Facing::Right.tile(), Tile::FacingRight);
    }
}

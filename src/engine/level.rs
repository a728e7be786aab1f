//! Tile map model and spatial queries
//!
//! Levels are JSON documents exported from a tile editor: a list of layers,
//! each holding rectangular chunks of row-major tile data. A level is parsed
//! and validated once at session start and never mutated afterwards, so every
//! query below is a plain read.

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Validation limits to prevent resource exhaustion from malicious files
pub mod limits {
    /// Maximum number of layers in a level
    pub const MAX_LAYERS: usize = 16;
    /// Maximum number of chunks in a single layer
    pub const MAX_CHUNKS_PER_LAYER: usize = 1024;
    /// Maximum chunk dimension (width or height) in tiles
    pub const MAX_CHUNK_SIZE: i32 = 512;
}

/// A single map cell.
///
/// Conversions follow the integer encoding of the level document (see
/// [`Tile::id`]). `Spawn` (99) only marks the player's starting cell during
/// load and is never solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "i32")]
pub enum Tile {
    Empty,
    Ground,
    Crate,
    Tree,
    Cactus,
    FacingRight,
    FacingLeft,
    Idle,
    Spawn,
}

impl TryFrom<i32> for Tile {
    type Error = String;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        Ok(match id {
            0 => Tile::Empty,
            1 => Tile::Ground,
            2 => Tile::Crate,
            3 => Tile::Tree,
            4 => Tile::Cactus,
            5 => Tile::FacingRight,
            6 => Tile::FacingLeft,
            7 => Tile::Idle,
            99 => Tile::Spawn,
            other => return Err(format!("unknown tile id {}", other)),
        })
    }
}

impl Tile {
    /// The document encoding of this tile, which doubles as its sprite-sheet
    /// index.
    pub fn id(self) -> i32 {
        match self {
            Tile::Empty => 0,
            Tile::Ground => 1,
            Tile::Crate => 2,
            Tile::Tree => 3,
            Tile::Cactus => 4,
            Tile::FacingRight => 5,
            Tile::FacingLeft => 6,
            Tile::Idle => 7,
            Tile::Spawn => 99,
        }
    }

    /// Whether the player collides with this tile. Everything except open air
    /// and the spawn marker blocks movement.
    pub fn is_solid(self) -> bool {
        !matches!(self, Tile::Empty | Tile::Spawn)
    }
}

/// Probe direction for [`Level::tile_at`].
///
/// Accepted by the query so directional tile semantics (one-way platforms,
/// slopes) can slot in; the current lookup is direction-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Left,
    Down,
}

/// A rectangular block of tiles with a world-space origin.
///
/// `data` is row-major from the chunk's top-left corner; validation enforces
/// `data.len() == width * height`.
#[derive(Debug, Clone, Deserialize)]
pub struct Chunk {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub data: Vec<Tile>,
}

/// An ordered sequence of chunks. Chunk rectangles within one layer are
/// expected not to overlap, but nothing enforces it - callers must not rely
/// on it.
#[derive(Debug, Clone, Deserialize)]
pub struct Layer {
    pub chunks: Vec<Chunk>,
}

/// A parsed level: ordered layers of chunks, read-only for the session.
#[derive(Debug, Clone, Deserialize)]
pub struct Level {
    pub layers: Vec<Layer>,
}

/// Error type for level loading
#[derive(Debug)]
pub enum LevelError {
    IoError(std::io::Error),
    ParseError(serde_json::Error),
    ValidationError(String),
}

impl From<std::io::Error> for LevelError {
    fn from(e: std::io::Error) -> Self {
        LevelError::IoError(e)
    }
}

impl From<serde_json::Error> for LevelError {
    fn from(e: serde_json::Error) -> Self {
        LevelError::ParseError(e)
    }
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelError::IoError(e) => write!(f, "IO error: {}", e),
            LevelError::ParseError(e) => write!(f, "Parse error: {}", e),
            LevelError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

/// Validate a chunk
fn validate_chunk(chunk: &Chunk, context: &str) -> Result<(), String> {
    if chunk.width <= 0 || chunk.height <= 0 {
        return Err(format!(
            "{}: non-positive dimensions {}x{}",
            context, chunk.width, chunk.height
        ));
    }
    if chunk.width > limits::MAX_CHUNK_SIZE || chunk.height > limits::MAX_CHUNK_SIZE {
        return Err(format!(
            "{}: dimensions too large ({}x{} > {})",
            context,
            chunk.width,
            chunk.height,
            limits::MAX_CHUNK_SIZE
        ));
    }
    let expected = (chunk.width * chunk.height) as usize;
    if chunk.data.len() != expected {
        return Err(format!(
            "{}: data length mismatch ({} != {}x{})",
            context,
            chunk.data.len(),
            chunk.width,
            chunk.height
        ));
    }
    Ok(())
}

/// Validate an entire level
pub fn validate_level(level: &Level) -> Result<(), LevelError> {
    if level.layers.len() > limits::MAX_LAYERS {
        return Err(LevelError::ValidationError(format!(
            "too many layers ({} > {})",
            level.layers.len(),
            limits::MAX_LAYERS
        )));
    }

    for (i, layer) in level.layers.iter().enumerate() {
        if layer.chunks.len() > limits::MAX_CHUNKS_PER_LAYER {
            return Err(LevelError::ValidationError(format!(
                "layer[{}]: too many chunks ({} > {})",
                i,
                layer.chunks.len(),
                limits::MAX_CHUNKS_PER_LAYER
            )));
        }
        for (j, chunk) in layer.chunks.iter().enumerate() {
            validate_chunk(chunk, &format!("layer[{}] chunk[{}]", i, j))
                .map_err(LevelError::ValidationError)?;
        }
    }

    Ok(())
}

impl Level {
    /// Parse a level from raw JSON bytes.
    ///
    /// Fails on malformed JSON, missing fields, unknown tile ids, or a chunk
    /// whose data length disagrees with its dimensions. No partial level is
    /// ever returned.
    pub fn parse(bytes: &[u8]) -> Result<Level, LevelError> {
        let level: Level = serde_json::from_slice(bytes)?;
        validate_level(&level)?;
        Ok(level)
    }

    /// Load a level from a JSON file on disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Level, LevelError> {
        let bytes = fs::read(path)?;
        Level::parse(&bytes)
    }

    /// Grid cell of the first spawn marker, scanning layers, then chunks,
    /// then flat row-major indices. `None` when no chunk carries one.
    pub fn find_spawn(&self) -> Option<(i32, i32)> {
        for layer in &self.layers {
            for chunk in &layer.chunks {
                for (i, tile) in chunk.data.iter().enumerate() {
                    if *tile == Tile::Spawn {
                        let i = i as i32;
                        // data is row-major, so the divisor is the chunk
                        // width even when width != height
                        return Some((i % chunk.width, i / chunk.width));
                    }
                }
            }
        }
        None
    }

    /// Tile under a fractional tile-space point, or `None` when the point
    /// lies outside every chunk.
    ///
    /// The first chunk whose rectangle contains the point wins, across all
    /// layers in order; later overlapping chunks are never consulted.
    /// Hand-authored maps rely on this ordering. The flat index is computed
    /// from the absolute coordinates, not rebased to the chunk origin - also
    /// part of the map compatibility contract. An index that escapes the
    /// chunk's data yields `None`.
    pub fn tile_at(&self, x: f32, y: f32, _direction: Direction) -> Option<Tile> {
        for layer in &self.layers {
            for chunk in &layer.chunks {
                let cx = chunk.x as f32;
                let cy = chunk.y as f32;
                let inside = x >= cx
                    && x < cx + chunk.width as f32
                    && y >= cy
                    && y < cy + chunk.height as f32;
                if inside {
                    let index = x.floor() as i32 + y.floor() as i32 * chunk.width;
                    return usize::try_from(index)
                        .ok()
                        .and_then(|i| chunk.data.get(i))
                        .copied();
                }
            }
        }
        None
    }

    /// Lowest edge (largest y) across all chunks, in tile rows. The session
    /// layer uses this to detect a player falling out of the world.
    pub fn lowest_edge(&self) -> Option<i32> {
        self.layers
            .iter()
            .flat_map(|layer| &layer.chunks)
            .map(|chunk| chunk.y + chunk.height)
            .max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SINGLE_CHUNK: &str =
        r#"{"layers":[{"chunks":[{"x":0,"y":0,"width":3,"height":1,"data":[1,0,99]}]}]}"#;

    fn level_from_json(json: &str) -> Level {
        Level::parse(json.as_bytes()).expect("level should parse")
    }

    #[test]
    fn test_parse_single_chunk() {
        let level = level_from_json(SINGLE_CHUNK);
        assert_eq!(level.layers.len(), 1);
        let chunk = &level.layers[0].chunks[0];
        assert_eq!((chunk.width, chunk.height), (3, 1));
        assert_eq!(chunk.data.len(), 3);
        assert_eq!(chunk.data[0], Tile::Ground);
    }

    #[test]
    fn test_tile_at_inside_chunk() {
        let level = level_from_json(SINGLE_CHUNK);
        assert_eq!(level.tile_at(0.5, 0.0, Direction::Right), Some(Tile::Ground));
        assert_eq!(level.tile_at(1.5, 0.0, Direction::Right), Some(Tile::Empty));
        assert_eq!(level.tile_at(2.5, 0.0, Direction::Right), Some(Tile::Spawn));
    }

    #[test]
    fn test_tile_at_outside_all_chunks() {
        let level = level_from_json(SINGLE_CHUNK);
        assert_eq!(level.tile_at(5.0, 0.0, Direction::Right), None);
        assert_eq!(level.tile_at(0.5, 2.0, Direction::Down), None);
        assert_eq!(level.tile_at(-1.0, 0.0, Direction::Left), None);
    }

    #[test]
    fn test_tile_at_direction_independent() {
        let level = level_from_json(SINGLE_CHUNK);
        for direction in [
            Direction::Up,
            Direction::Right,
            Direction::Left,
            Direction::Down,
        ] {
            assert_eq!(level.tile_at(0.5, 0.0, direction), Some(Tile::Ground));
        }
    }

    #[test]
    fn test_tile_at_first_matching_chunk_wins() {
        // Two layers covering the same rectangle: the first layer's chunk
        // answers, the second is never consulted.
        let json = r#"{"layers":[
            {"chunks":[{"x":0,"y":0,"width":1,"height":1,"data":[1]}]},
            {"chunks":[{"x":0,"y":0,"width":1,"height":1,"data":[4]}]}
        ]}"#;
        let level = level_from_json(json);
        assert_eq!(level.tile_at(0.5, 0.5, Direction::Down), Some(Tile::Ground));
    }

    #[test]
    fn test_tile_at_falls_through_to_later_layer() {
        // A later layer answers where the first layer has no chunk. The
        // wider chunk sits at the origin so its absolute flat index stays
        // valid.
        let json = r#"{"layers":[
            {"chunks":[{"x":0,"y":0,"width":1,"height":1,"data":[1]}]},
            {"chunks":[{"x":0,"y":0,"width":2,"height":1,"data":[2,2]}]}
        ]}"#;
        let level = level_from_json(json);
        assert_eq!(level.tile_at(1.5, 0.5, Direction::Right), Some(Tile::Crate));
    }

    #[test]
    fn test_tile_at_index_outside_data_returns_none() {
        // The flat index uses absolute coordinates, so a chunk away from the
        // origin can produce an index past its data. That is "no tile", not
        // a crash.
        let json =
            r#"{"layers":[{"chunks":[{"x":16,"y":0,"width":3,"height":1,"data":[1,1,1]}]}]}"#;
        let level = level_from_json(json);
        assert_eq!(level.tile_at(16.5, 0.0, Direction::Right), None);
    }

    #[test]
    fn test_find_spawn_returns_first_marker() {
        let level = level_from_json(SINGLE_CHUNK);
        assert_eq!(level.find_spawn(), Some((2, 0)));
    }

    #[test]
    fn test_find_spawn_non_square_chunk() {
        // Regression: the grid y must come from dividing by the chunk width,
        // which only shows on chunks where width != height.
        let json = r#"{"layers":[{"chunks":[
            {"x":0,"y":0,"width":4,"height":2,"data":[0,0,0,0,0,99,0,0]}
        ]}]}"#;
        let level = level_from_json(json);
        assert_eq!(level.find_spawn(), Some((1, 1)));
    }

    #[test]
    fn test_find_spawn_missing() {
        let json = r#"{"layers":[{"chunks":[{"x":0,"y":0,"width":1,"height":1,"data":[1]}]}]}"#;
        let level = level_from_json(json);
        assert_eq!(level.find_spawn(), None);
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let result = Level::parse(b"{\"layers\": [");
        assert!(matches!(result, Err(LevelError::ParseError(_))));
    }

    #[test]
    fn test_parse_rejects_missing_fields() {
        let result = Level::parse(br#"{"layers":[{"chunks":[{"x":0,"y":0}]}]}"#);
        assert!(matches!(result, Err(LevelError::ParseError(_))));
    }

    #[test]
    fn test_parse_rejects_unknown_tile_id() {
        let result =
            Level::parse(br#"{"layers":[{"chunks":[{"x":0,"y":0,"width":1,"height":1,"data":[42]}]}]}"#);
        assert!(matches!(result, Err(LevelError::ParseError(_))));
    }

    #[test]
    fn test_parse_rejects_data_length_mismatch() {
        let result = Level::parse(
            br#"{"layers":[{"chunks":[{"x":0,"y":0,"width":3,"height":1,"data":[1,0]}]}]}"#,
        );
        assert!(matches!(result, Err(LevelError::ValidationError(_))));
    }

    #[test]
    fn test_parse_rejects_non_positive_dimensions() {
        let result = Level::parse(
            br#"{"layers":[{"chunks":[{"x":0,"y":0,"width":0,"height":1,"data":[]}]}]}"#,
        );
        assert!(matches!(result, Err(LevelError::ValidationError(_))));
    }

    #[test]
    fn test_load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(SINGLE_CHUNK.as_bytes()).expect("write level");
        let level = Level::load(file.path()).expect("level should load");
        assert_eq!(level.find_spawn(), Some((2, 0)));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Level::load("no/such/level.json");
        assert!(matches!(result, Err(LevelError::IoError(_))));
    }

    #[test]
    fn test_lowest_edge() {
        let json = r#"{"layers":[
            {"chunks":[{"x":0,"y":0,"width":1,"height":3,"data":[0,0,1]}]},
            {"chunks":[{"x":1,"y":2,"width":1,"height":4,"data":[0,0,0,1]}]}
        ]}"#;
        let level = level_from_json(json);
        assert_eq!(level.lowest_edge(), Some(6));
        assert_eq!(level_from_json(r#"{"layers":[]}"#).lowest_edge(), None);
    }
}

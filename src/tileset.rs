//! Sprite sheet slicing
//!
//! The art ships as a single PNG grid of tile-sized cells. The grid is cut
//! once at startup into per-cell textures keyed by tile id, matching the
//! sheet layout the level editor exports against. Id 0 (open air) has no
//! sprite.

use macroquad::prelude::*;
use std::collections::HashMap;

/// Error type for tileset construction
#[derive(Debug)]
pub enum TilesetError {
    /// The sheet bytes failed to decode as an image
    Decode(macroquad::Error),
    /// The decoded sheet is smaller than the requested grid
    SheetTooSmall {
        width: u16,
        height: u16,
        need_w: u16,
        need_h: u16,
    },
}

impl From<macroquad::Error> for TilesetError {
    fn from(e: macroquad::Error) -> Self {
        TilesetError::Decode(e)
    }
}

impl std::fmt::Display for TilesetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TilesetError::Decode(e) => write!(f, "Decode error: {:?}", e),
            TilesetError::SheetTooSmall {
                width,
                height,
                need_w,
                need_h,
            } => write!(
                f,
                "Sheet too small: {}x{} px, grid needs {}x{}",
                width, height, need_w, need_h
            ),
        }
    }
}

/// Tile id of a sheet cell. Cells are numbered row-major starting at 1, so
/// id 0 stays free for the empty tile.
fn cell_id(row: u16, col: u16, columns: u16) -> i32 {
    (row * columns + col + 1) as i32
}

/// Per-tile textures cut from a sprite sheet.
pub struct Tileset {
    tiles: HashMap<i32, Texture2D>,
}

impl Tileset {
    /// Slice a `rows x columns` grid of `tile_size` cells out of encoded PNG
    /// bytes.
    pub fn from_sheet_bytes(
        bytes: &[u8],
        tile_size: u16,
        rows: u16,
        columns: u16,
    ) -> Result<Tileset, TilesetError> {
        let sheet = Image::from_file_with_format(bytes, Some(ImageFormat::Png))?;

        let need_w = columns * tile_size;
        let need_h = rows * tile_size;
        if sheet.width < need_w || sheet.height < need_h {
            return Err(TilesetError::SheetTooSmall {
                width: sheet.width,
                height: sheet.height,
                need_w,
                need_h,
            });
        }

        let mut tiles = HashMap::new();
        for row in 0..rows {
            for col in 0..columns {
                let cell = sheet.sub_image(Rect::new(
                    (col * tile_size) as f32,
                    (row * tile_size) as f32,
                    tile_size as f32,
                    tile_size as f32,
                ));
                let texture = Texture2D::from_image(&cell);
                // pixel art: no smoothing when scaled up
                texture.set_filter(FilterMode::Nearest);
                tiles.insert(cell_id(row, col, columns), texture);
            }
        }

        Ok(Tileset { tiles })
    }

    /// Texture for a tile id, if the sheet has a cell for it.
    pub fn texture(&self, id: i32) -> Option<&Texture2D> {
        self.tiles.get(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::cell_id;

    #[test]
    fn test_cell_ids_are_row_major_from_one() {
        // 3x3 sheet: first row maps to ids 1..=3, last cell to 9
        assert_eq!(cell_id(0, 0, 3), 1);
        assert_eq!(cell_id(0, 2, 3), 3);
        assert_eq!(cell_id(1, 0, 3), 4);
        assert_eq!(cell_id(2, 2, 3), 9);
    }
}

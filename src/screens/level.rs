//! Level screen: drives the simulation and draws the world.

use crate::app::{App, Screen};
use crate::engine::{config, Tile};
use crate::input;
use macroquad::prelude::*;

/// World-to-screen magnification. Tiles are authored at 16 px.
pub const PIXEL_SCALE: f32 = 3.0;

/// Extra rows below the lowest chunk before a fall counts as leaving the
/// world.
const FALL_OUT_MARGIN: i32 = 4;

/// Draw the player's collision box outline.
const DRAW_HITBOX: bool = false;

pub fn update(app: &mut App) {
    let frame = input::poll();
    let Some(session) = app.session.as_mut() else {
        return;
    };

    session.facing = session.facing.after(frame.intent);
    session
        .player
        .step(frame.intent, frame.jump, &session.level, &app.config);

    let (_, y) = session.player.position();
    let floor = session.level.lowest_edge().unwrap_or(0);
    let fell_out = y > (floor + FALL_OUT_MARGIN) as f32;

    if fell_out {
        app.screen = Screen::GameOver;
    }
}

pub fn draw(app: &App) {
    let Some(session) = app.session.as_ref() else {
        return;
    };
    let ts = app.config.tile_size;

    for layer in &session.level.layers {
        for chunk in &layer.chunks {
            for (i, tile) in chunk.data.iter().enumerate() {
                if matches!(tile, Tile::Empty | Tile::Spawn) {
                    continue;
                }
                let i = i as i32;
                let x = (chunk.x + i % chunk.width) as f32 * ts;
                let y = (chunk.y + i / chunk.width) as f32 * ts;
                if let Some(texture) = app.tileset.texture(tile.id()) {
                    blit(texture, x, y);
                }
            }
        }
    }

    let (px, py) = session.player.position();
    if let Some(texture) = app.tileset.texture(session.facing.tile().id()) {
        blit(texture, px * ts, py * ts);
    }

    if DRAW_HITBOX {
        draw_rectangle_lines(
            (px * ts + config::HITBOX_INSET_X_PX) * PIXEL_SCALE,
            (py * ts + config::HITBOX_INSET_Y_PX) * PIXEL_SCALE,
            (ts - config::HITBOX_INSET_X_PX * 2.0) * PIXEL_SCALE,
            (ts - config::HITBOX_INSET_Y_PX * 2.0) * PIXEL_SCALE,
            1.0 * PIXEL_SCALE,
            RED,
        );
    }
}

/// Draw a texture at world pixel coordinates, magnified to screen scale.
fn blit(texture: &Texture2D, x: f32, y: f32) {
    draw_texture_ex(
        texture,
        x * PIXEL_SCALE,
        y * PIXEL_SCALE,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(
                texture.width() * PIXEL_SCALE,
                texture.height() * PIXEL_SCALE,
            )),
            ..Default::default()
        },
    );
}

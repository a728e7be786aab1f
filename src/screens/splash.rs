//! Splash screen: title and main menu.

use crate::app::App;
use crate::ui::Button;
use macroquad::prelude::*;

const TITLE: &str = "Cactus Run";
const TITLE_SIZE: f32 = 48.0;
const BUTTON_W: f32 = 150.0;
const BUTTON_H: f32 = 50.0;

fn menu_buttons() -> (Button, Button) {
    let mx = screen_width() / 2.0;
    let my = screen_height() / 2.0;
    let new_game = Button::new(mx - BUTTON_W / 2.0, my - BUTTON_H / 2.0, BUTTON_W, BUTTON_H, "New Game");
    let exit = Button::new(mx - BUTTON_W / 2.0, my + BUTTON_H, BUTTON_W, BUTTON_H, "Exit");
    (new_game, exit)
}

pub fn update(app: &mut App) {
    let (new_game, exit) = menu_buttons();
    if new_game.clicked() {
        app.start_new_game();
    }
    if exit.clicked() {
        std::process::exit(0);
    }
}

pub fn draw(_app: &App) {
    let mx = screen_width() / 2.0;
    let my = screen_height() / 2.0;

    let dims = measure_text(TITLE, None, TITLE_SIZE as u16, 1.0);
    draw_text(
        TITLE,
        mx - dims.width / 2.0,
        my - 100.0 - dims.height / 2.0,
        TITLE_SIZE,
        WHITE,
    );

    let (new_game, exit) = menu_buttons();
    new_game.draw();
    exit.draw();
}

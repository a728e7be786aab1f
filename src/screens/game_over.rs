//! Game-over overlay on top of the frozen level.

use crate::app::App;
use crate::ui::Button;
use macroquad::prelude::*;

const MESSAGE: &str = "Game Over";
const MESSAGE_SIZE: f32 = 48.0;
const BUTTON_W: f32 = 150.0;
const BUTTON_H: f32 = 50.0;
const BACKDROP: Color = Color::new(0.0, 0.0, 0.0, 0.6);

fn overlay_buttons() -> (Button, Button) {
    let mx = screen_width() / 2.0;
    let my = screen_height() / 2.0;
    let retry = Button::new(mx - BUTTON_W / 2.0, my - BUTTON_H / 2.0, BUTTON_W, BUTTON_H, "Retry");
    let menu = Button::new(mx - BUTTON_W / 2.0, my + BUTTON_H, BUTTON_W, BUTTON_H, "Menu");
    (retry, menu)
}

pub fn update(app: &mut App) {
    let (retry, menu) = overlay_buttons();
    if retry.clicked() {
        app.start_new_game();
    }
    if menu.clicked() {
        app.back_to_menu();
    }
}

pub fn draw(app: &App) {
    // the last state of the world stays visible behind the overlay
    super::level::draw(app);
    draw_rectangle(0.0, 0.0, screen_width(), screen_height(), BACKDROP);

    let mx = screen_width() / 2.0;
    let my = screen_height() / 2.0;
    let dims = measure_text(MESSAGE, None, MESSAGE_SIZE as u16, 1.0);
    draw_text(
        MESSAGE,
        mx - dims.width / 2.0,
        my - 100.0 - dims.height / 2.0,
        MESSAGE_SIZE,
        WHITE,
    );

    let (retry, menu) = overlay_buttons();
    retry.draw();
    menu.draw();
}

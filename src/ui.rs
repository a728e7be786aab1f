//! Menu widgets
//!
//! The splash and game-over screens only need labeled clickable rectangles,
//! drawn immediate-mode every frame.

use macroquad::prelude::*;

const FILL_COLOR: Color = Color::new(0.39, 0.39, 0.78, 1.0);
const BORDER_COLOR: Color = Color::new(0.20, 0.20, 0.59, 1.0);
const LABEL_SIZE: f32 = 20.0;

/// A clickable labeled rectangle.
pub struct Button {
    pub rect: Rect,
    pub label: &'static str,
}

impl Button {
    pub fn new(x: f32, y: f32, w: f32, h: f32, label: &'static str) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
            label,
        }
    }

    /// Point-in-rectangle hit test.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.rect.contains(vec2(x, y))
    }

    /// Whether the button was clicked this frame.
    pub fn clicked(&self) -> bool {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return false;
        }
        let (mx, my) = mouse_position();
        self.contains(mx, my)
    }

    /// Draw background, border and centered label.
    pub fn draw(&self) {
        let r = self.rect;
        draw_rectangle(r.x, r.y, r.w, r.h, FILL_COLOR);
        draw_rectangle_lines(r.x, r.y, r.w, r.h, 2.0, BORDER_COLOR);

        let dims = measure_text(self.label, None, LABEL_SIZE as u16, 1.0);
        draw_text(
            self.label,
            (r.x + (r.w - dims.width) * 0.5).round(),
            (r.y + (r.h + dims.height) * 0.5).round(),
            LABEL_SIZE,
            WHITE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive_of_origin() {
        let button = Button::new(10.0, 20.0, 100.0, 50.0, "New Game");
        assert!(button.contains(10.0, 20.0));
        assert!(button.contains(60.0, 45.0));
        assert!(!button.contains(9.0, 45.0));
        assert!(!button.contains(60.0, 71.0));
    }
}

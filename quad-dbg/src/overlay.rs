use macroquad::prelude::*;

use crate::screenlog::LOG_RING;

const DBG_FONT_SIZE: u16 = 16;
const DBG_BACKDROP: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.12,
    a: 0.5,
};

/// Debug text drawn over the game, line by line.
pub struct Debug {
    text_cursor_x: f32,
    text_cursor_y: f32,
}

impl Debug {
    pub fn new() -> Self {
        Self {
            text_cursor_x: 0.0,
            text_cursor_y: DBG_FONT_SIZE as f32,
        }
    }

    pub fn new_frame(&mut self) {
        self.text_cursor_x = 0.0;
        self.text_cursor_y = DBG_FONT_SIZE as f32;

        set_default_camera();
    }

    pub fn new_dbg_line(&mut self) {
        self.text_cursor_x = 0.0;
        self.text_cursor_y += DBG_FONT_SIZE as f32;
    }

    pub fn put_debug_text(&mut self, text: &str, color: Color) {
        let dims = measure_text(text, None, DBG_FONT_SIZE, 1.0);
        draw_rectangle(
            self.text_cursor_x,
            self.text_cursor_y - dims.offset_y,
            dims.width,
            DBG_FONT_SIZE as f32,
            DBG_BACKDROP,
        );
        draw_text(
            text,
            self.text_cursor_x,
            self.text_cursor_y,
            DBG_FONT_SIZE as f32,
            color,
        );

        self.text_cursor_x += dims.width;
    }

    pub fn put_debug_line(&mut self, text: &str) {
        self.put_debug_text(text, WHITE);
        self.new_dbg_line();
    }

    /// Draws the recent log records, oldest on top.
    pub fn draw_events(&mut self) {
        let Ok(ring) = LOG_RING.lock() else {
            return;
        };

        let now = macroquad::miniquad::date::now();
        for msg in ring.live_lines(now) {
            self.put_debug_text(msg.line.as_str(), msg.color);
            self.new_dbg_line();
        }
    }
}

impl Default for Debug {
    fn default() -> Self {
        Self::new()
    }
}

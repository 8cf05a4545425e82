//! Basic UI widgets

use macroquad::prelude::*;
use super::theme::*;
use super::{Rect, UiContext};

/// Draw a menu button, returns true if clicked.
///
/// The button lights up while the mouse is over it.
pub fn menu_button(ctx: &mut UiContext, rect: Rect, text: &str) -> bool {
    let id = ctx.next_id();
    let hovered = ctx.mouse.inside(&rect);
    if hovered {
        ctx.set_hot(id);
    }

    let bg = if hovered { BUTTON_HOVER } else { BUTTON_BG };
    draw_rounded_rect(rect.x, rect.y, rect.w, rect.h, 6.0, bg);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 2.0, BUTTON_BORDER);
    label_centered(text, &rect, FONT_SIZE_BUTTON, if hovered { WHITE } else { TEXT_COLOR });

    ctx.mouse.clicked(&rect)
}

/// Draw text centred in a rect
pub fn label_centered(text: &str, rect: &Rect, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    // Round to integer pixels for crisp rendering
    let x = (rect.center_x() - dims.width * 0.5).round();
    let y = (rect.center_y() + dims.offset_y * 0.5).round();
    draw_text(text, x, y, font_size, color);
}

/// Horizontal fill bar with a white outline around the filled part
pub fn bar(rect: Rect, fraction: f32, color: Color) {
    let w = (rect.w * fraction.clamp(0.0, 1.0)).floor();
    if w > 0.0 {
        draw_rectangle(rect.x, rect.y, w, rect.h, color);
        draw_rectangle_lines(rect.x, rect.y, w, rect.h, 1.0, BAR_OUTLINE);
    }
}

/// Draw a rounded rectangle (simple approximation using overlapping rects)
fn draw_rounded_rect(x: f32, y: f32, w: f32, h: f32, r: f32, color: Color) {
    // Main body
    draw_rectangle(x + r, y, w - r * 2.0, h, color);
    draw_rectangle(x, y + r, w, h - r * 2.0, color);
    // Corners (circles)
    draw_circle(x + r, y + r, r, color);
    draw_circle(x + w - r, y + r, r, color);
    draw_circle(x + r, y + h - r, r, color);
    draw_circle(x + w - r, y + h - r, r, color);
}

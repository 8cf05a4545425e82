//! Main menu: Begin, Instructions, Exit

use macroquad::prelude::*;
use crate::ui::{self, UiContext, BG_COLOR, FONT_SIZE_TITLE, TITLE_COLOR};
use super::Transition;

const BUTTON_W: f32 = 450.0;
const BUTTON_H: f32 = 74.0;
const BUTTON_SPACING: f32 = 26.0;

/// Title area plus the three buttons, top to bottom
pub fn menu_layout(screen: ui::Rect) -> (ui::Rect, [ui::Rect; 3]) {
    let title = screen.centered_h(screen.h * 0.12, screen.w, FONT_SIZE_TITLE * 1.5);
    let column = screen.centered_h(screen.h * 0.38, BUTTON_W, 0.0);
    let rows = column.stack_v(3, BUTTON_H, BUTTON_SPACING);
    (title, [rows[0], rows[1], rows[2]])
}

/// Draw the menu for one frame
pub fn draw_menu(ctx: &mut UiContext, escape_pressed: bool) -> Transition {
    clear_background(BG_COLOR);

    let screen = ui::Rect::screen(screen_width(), screen_height());
    let (title, [begin, instructions, exit]) = menu_layout(screen);
    ui::label_centered("DUNGEON DOOM", &title, FONT_SIZE_TITLE, TITLE_COLOR);

    let mut transition = Transition::None;
    if ui::menu_button(ctx, begin, "Begin") {
        transition = Transition::Play;
    }
    if ui::menu_button(ctx, instructions, "Instructions") {
        transition = Transition::Instructions;
    }
    if ui::menu_button(ctx, exit, "Exit") || escape_pressed {
        transition = Transition::Exit;
    }
    transition
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_centered_and_disjoint() {
        let screen = ui::Rect::screen(1280.0, 960.0);
        let (title, buttons) = menu_layout(screen);
        assert!(title.bottom() <= buttons[0].y);
        for b in &buttons {
            assert_eq!(b.center_x(), 640.0);
            assert_eq!((b.w, b.h), (BUTTON_W, BUTTON_H));
            assert!(b.bottom() <= 960.0);
        }
        assert!(buttons[0].bottom() <= buttons[1].y);
        assert!(buttons[1].bottom() <= buttons[2].y);
    }
}

//! Instructions: the control reference and a way back

use macroquad::prelude::*;
use crate::input::Action;
use crate::ui::{self, UiContext, BG_COLOR, FONT_SIZE_CONTENT, FONT_SIZE_TITLE, TEXT_COLOR, TEXT_DIM, TITLE_COLOR};
use super::Transition;

const ROW_HEIGHT: f32 = 44.0;

/// Control lines in display order: (keys, what they do)
pub fn control_lines() -> Vec<(String, &'static str)> {
    let moves = [Action::MoveUp, Action::MoveLeft, Action::MoveDown, Action::MoveRight]
        .iter()
        .map(|a| a.key_name())
        .collect::<Vec<_>>()
        .join(" ");
    vec![
        (moves, "Move"),
        (Action::Sprint.key_name().to_string(), Action::Sprint.label()),
        (Action::Attack.key_name().to_string(), Action::Attack.label()),
        (Action::Escape.key_name().to_string(), Action::Escape.label()),
    ]
}

/// Draw the instructions for one frame
pub fn draw_instructions(ctx: &mut UiContext, escape_pressed: bool) -> Transition {
    clear_background(BG_COLOR);

    let screen = ui::Rect::screen(screen_width(), screen_height());
    let title = screen.centered_h(screen.h * 0.08, screen.w, FONT_SIZE_TITLE * 1.5);
    ui::label_centered("Instructions", &title, FONT_SIZE_TITLE, TITLE_COLOR);

    let keys_x = (screen.w * 0.3).round();
    let desc_x = (screen.w * 0.45).round();
    let mut y = title.bottom() + 60.0;
    for (keys, what) in control_lines() {
        draw_text(&keys, keys_x, y, FONT_SIZE_CONTENT, TEXT_COLOR);
        draw_text(what, desc_x, y, FONT_SIZE_CONTENT, TEXT_DIM);
        y += ROW_HEIGHT;
    }

    y += ROW_HEIGHT;
    for line in [
        "Ghosts drift through walls and hurt on contact.",
        "Face a ghost and attack to banish it. Each new ghost is faster.",
        "Health comes back slowly once you stay out of trouble.",
        "Collect as many coins as you can.",
    ] {
        draw_text(line, keys_x, y, FONT_SIZE_CONTENT * 0.8, TEXT_DIM);
        y += ROW_HEIGHT * 0.8;
    }

    let back = screen.centered_h(screen.h * 0.82, 450.0, 74.0);
    if ui::menu_button(ctx, back, "Back") || escape_pressed {
        return Transition::MainMenu;
    }
    Transition::None
}

//! Session drawing
//!
//! Reads the session after its tick and draws the field, the HUD and the
//! end-of-run summary. All functions expect an active `DrawScope`.

use macroquad::prelude::*;
use crate::game::{Aabb, Direction, Ghost, Player, PlayerIntent, Session};
use crate::ui::{self, BAR_OUTLINE, COIN_COLOR, FLOOR_COLOR, FONT_SIZE_CONTENT, FONT_SIZE_HUD,
    GHOST_COLOR, GHOST_LIGHT_COLOR, HEALTH_COLOR, OBSTACLE_COLOR, PLAYER_COLOR, STAMINA_COLOR, TEXT_COLOR};
use super::animation::PLAYER_SPRINT_FRAME_DURATION;
use super::assets::Assets;
use super::camera::DrawScope;

/// Width of a full HUD bar in field units
const BAR_WIDTH: f32 = 200.0;
const BAR_HEIGHT: f32 = 20.0;

// =============================================================================
// Field
// =============================================================================

/// Floor, obstacles, coins, ghosts, then the player on top
pub fn draw_world(scope: &DrawScope, session: &Session, assets: Option<&Assets>) {
    let (w, h) = session.field_size();
    draw_rectangle(0.0, 0.0, w, h, FLOOR_COLOR);

    for obstacle in session.obstacles() {
        let r = scope.to_screen(obstacle);
        draw_rectangle(r.x, r.y, r.w, r.h, OBSTACLE_COLOR);
    }

    for coin in &session.coins {
        let r = scope.to_screen(&coin.bounds());
        match assets {
            Some(a) => draw_texture_ex(
                &a.coin,
                r.x,
                r.y,
                WHITE,
                DrawTextureParams { dest_size: Some(vec2(r.w, r.h)), ..Default::default() },
            ),
            None => draw_circle(r.x + r.w * 0.5, r.y + r.h * 0.5, r.w.min(r.h) * 0.5, COIN_COLOR),
        }
    }

    for ghost in &session.ghosts {
        draw_ghost(scope, ghost, session.elapsed, assets);
    }

    draw_player(scope, &session.player, session.elapsed, assets);
}

fn draw_ghost(scope: &DrawScope, ghost: &Ghost, elapsed: f32, assets: Option<&Assets>) {
    let r = scope.to_screen(&ghost.bounds());
    let Some(assets) = assets else {
        let color = if ghost.overlaps_obstacles { GHOST_LIGHT_COLOR } else { GHOST_COLOR };
        draw_rectangle(r.x, r.y, r.w, r.h, color);
        return;
    };

    let sheet = match (&assets.ghost_light, ghost.overlaps_obstacles) {
        (Some(light), true) => light,
        _ => &assets.ghost,
    };
    let col = sheet.layout.animation().key_frame(elapsed, true);
    sheet.draw_frame(sheet.layout.row(ghost.direction), col, r);
}

fn draw_player(scope: &DrawScope, player: &Player, elapsed: f32, assets: Option<&Assets>) {
    let r = scope.to_screen(&player.bounds());
    let Some(assets) = assets else {
        draw_rectangle(r.x, r.y, r.w, r.h, PLAYER_COLOR);
        if player.is_attacking() {
            let s = swing_marker(player);
            let s = scope.to_screen(&s);
            draw_rectangle(s.x, s.y, s.w, s.h, WHITE);
        }
        return;
    };

    let walk = &assets.player_walk;
    let row = walk.layout.row(player.direction);

    // Stuck in a wall: stand still facing the wall
    if player.overlaps_obstacles {
        walk.draw_frame(row, 0, r);
        return;
    }

    match player.intent {
        PlayerIntent::Attacking => {
            let attack = &assets.player_attack;
            attack.draw_frame(attack.layout.row(player.direction), player.weapon.frame(), r);
        }
        PlayerIntent::Moving { fast } => {
            let mut anim = walk.layout.animation();
            if fast {
                anim = anim.with_duration(PLAYER_SPRINT_FRAME_DURATION);
            }
            walk.draw_frame(row, anim.key_frame(elapsed, true), r);
        }
        PlayerIntent::Idle => walk.draw_frame(row, 0, r),
    }
}

/// Small box on the facing side, shown mid-swing when there is no art
fn swing_marker(player: &Player) -> Aabb {
    let b = player.bounds();
    let t = (b.w.min(b.h) * 0.25).max(2.0);
    match player.direction {
        Direction::Left => Aabb::new(b.x - t, b.y, t, b.h),
        Direction::Right => Aabb::new(b.right(), b.y, t, b.h),
        Direction::Up => Aabb::new(b.x, b.top(), b.w, t),
        Direction::Down => Aabb::new(b.x, b.y - t, b.w, t),
    }
}

// =============================================================================
// HUD
// =============================================================================

/// Health and stamina bars top-left, coins and kills top-right
pub fn draw_hud(session: &Session, assets: Option<&Assets>) {
    let (w, _) = session.field_size();
    let p = &session.player;

    let health = ui::Rect::new(10.0, 20.0, BAR_WIDTH, BAR_HEIGHT);
    let stamina = ui::Rect::new(10.0, 50.0, BAR_WIDTH, BAR_HEIGHT);
    ui::bar(health, p.health_fraction(), HEALTH_COLOR);
    ui::bar(stamina, p.stamina_fraction(), STAMINA_COLOR);
    draw_text(&p.health.to_string(), health.right() + 10.0, health.bottom(), FONT_SIZE_HUD, TEXT_COLOR);

    draw_text("Kills:", w - 220.0, 30.0, FONT_SIZE_HUD, TEXT_COLOR);
    draw_text(&p.kills.to_string(), w - 150.0, 30.0, FONT_SIZE_HUD, TEXT_COLOR);

    coin_icon(w - 220.0, 44.0, 28.0, assets);
    draw_text(&p.coins.to_string(), w - 150.0, 66.0, FONT_SIZE_HUD, TEXT_COLOR);
}

fn coin_icon(x: f32, y: f32, size: f32, assets: Option<&Assets>) {
    match assets {
        Some(a) => draw_texture_ex(
            &a.coin,
            x,
            y,
            WHITE,
            DrawTextureParams { dest_size: Some(vec2(size, size)), ..Default::default() },
        ),
        None => {
            draw_circle(x + size * 0.5, y + size * 0.5, size * 0.5, COIN_COLOR);
            draw_circle_lines(x + size * 0.5, y + size * 0.5, size * 0.5, 1.0, BAR_OUTLINE);
        }
    }
}

// =============================================================================
// Summary
// =============================================================================

/// End-of-run screen: coins and kills on black
pub fn draw_summary(session: &Session, assets: Option<&Assets>) {
    let (w, h) = session.field_size();
    let (cx, cy) = (w * 0.5, h * 0.5);
    let p = &session.player;

    draw_rectangle(0.0, 0.0, w, h, BLACK);
    draw_text("You have accomplished:", cx - 160.0, cy - 50.0, FONT_SIZE_CONTENT, TEXT_COLOR);

    coin_icon(cx - 50.0, cy - 22.0, 32.0, assets);
    draw_text(&p.coins.to_string(), cx, cy, FONT_SIZE_CONTENT, TEXT_COLOR);

    draw_text("Kills:", cx - 50.0, cy + 50.0, FONT_SIZE_CONTENT, TEXT_COLOR);
    draw_text(&p.kills.to_string(), cx + 20.0, cy + 50.0, FONT_SIZE_CONTENT, TEXT_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swing_marker_on_facing_side() {
        let mut p = Player::new(100.0, 100.0, 40.0, 40.0, 100, 400);
        p.direction = Direction::Left;
        assert!(swing_marker(&p).right() <= p.x);
        p.direction = Direction::Right;
        assert!(swing_marker(&p).x >= p.bounds().right());
        p.direction = Direction::Up;
        assert!(swing_marker(&p).y >= p.bounds().top());
        p.direction = Direction::Down;
        assert!(swing_marker(&p).top() <= p.y);
    }
}

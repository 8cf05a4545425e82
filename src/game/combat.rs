//! Combat & economy rules
//!
//! Turns the frame's collision report into health, kill, coin and stamina
//! changes. Time since the last hit is tracked in seconds; regeneration and
//! stamina use frame counters owned by the session.

use crate::config::RulesConfig;
use super::components::{Coin, Direction, Ghost, Player};

/// Result of the contact-damage step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContactOutcome {
    /// Damage dealt this frame
    pub damage: Option<i32>,
    /// One point of health was regenerated this frame
    pub healed: bool,
}

/// Contact damage and health regeneration.
///
/// `contact_damage` is the damage rating of the ghost touching the player
/// (None when no ghost does). `regen_frames` counts frames since the last
/// regeneration tick and is reset when one happens.
pub fn apply_contact_damage(
    player: &mut Player,
    contact_damage: Option<i32>,
    regen_frames: &mut u32,
    dt: f32,
    rules: &RulesConfig,
) -> ContactOutcome {
    let mut outcome = ContactOutcome::default();

    player.time_since_attacked += dt;
    player.overlaps_enemies = contact_damage.is_some();

    // Regeneration slows down the longer the player stays untouched
    if player.time_since_attacked >= rules.regen_delay_secs && player.health < player.max_health {
        let modulus = (rules.regen_base - player.time_since_attacked.floor() as i32).max(1) as u32;
        if *regen_frames % modulus == 0 {
            player.set_health(player.health + 1);
            *regen_frames = 0;
            outcome.healed = true;
        }
    }

    if player.time_since_attacked >= rules.damage_interval_secs {
        if let Some(damage) = contact_damage {
            player.set_health(player.health - damage);
            player.time_since_attacked = 0.0;
            outcome.damage = Some(damage);
        }
    }

    outcome
}

/// True if `ghost` sits in the half-plane the player is facing
pub fn in_facing_half_plane(player: &Player, ghost: &Ghost) -> bool {
    match player.direction {
        Direction::Left => ghost.x < player.x,
        Direction::Right => ghost.x > player.x,
        Direction::Down => ghost.y < player.y,
        Direction::Up => ghost.y > player.y,
    }
}

/// Ghosts killed this frame.
///
/// `contacts` are the indices of ghosts touching the player. A touching ghost
/// dies when the player is mid-swing and facing it.
pub fn melee_kills(player: &Player, ghosts: &[Ghost], contacts: &[usize]) -> Vec<usize> {
    if !player.is_attacking() {
        return Vec::new();
    }
    contacts
        .iter()
        .copied()
        .filter(|&i| ghosts.get(i).is_some_and(|g| in_facing_half_plane(player, g)))
        .collect()
}

/// Remove the picked-up coins and credit them. Returns the number collected.
///
/// `contacts` must be ascending indices into `coins` (as the resolver reports them).
pub fn collect_coins(player: &mut Player, coins: &mut Vec<Coin>, contacts: &[usize]) -> u32 {
    player.overlaps_coins = !contacts.is_empty();
    for &i in contacts.iter().rev() {
        coins.remove(i);
    }
    let collected = contacts.len() as u32;
    player.coins += collected;
    collected
}

/// Refill stamina once the player has stopped sprinting for long enough.
pub fn regenerate_stamina(player: &mut Player, frames_since_sprint: u32, rules: &RulesConfig) -> bool {
    if frames_since_sprint > rules.stamina_regen_delay_frames && player.stamina < player.max_stamina {
        player.set_stamina(player.stamina + 1);
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::components::PlayerIntent;

    fn player_at(x: f32, y: f32) -> Player {
        Player::new(x, y, 20.0, 20.0, 100, 400)
    }

    #[test]
    fn test_damage_floors_at_zero() {
        let rules = RulesConfig::default();
        let mut p = player_at(0.0, 0.0);
        p.health = 5;
        p.time_since_attacked = 1.5;
        let mut frames = 1;

        let out = apply_contact_damage(&mut p, Some(10), &mut frames, 0.016, &rules);
        assert_eq!(out.damage, Some(10));
        assert_eq!(p.health, 0);
        assert_eq!(p.time_since_attacked, 0.0);
    }

    #[test]
    fn test_damage_waits_for_interval() {
        let rules = RulesConfig::default();
        let mut p = player_at(0.0, 0.0);
        p.time_since_attacked = 0.5;
        let mut frames = 1;

        let out = apply_contact_damage(&mut p, Some(10), &mut frames, 0.016, &rules);
        assert_eq!(out.damage, None);
        assert_eq!(p.health, 100);
        assert!(p.overlaps_enemies);
        assert!((p.time_since_attacked - 0.516).abs() < 1e-5);
    }

    #[test]
    fn test_no_regeneration_above_cap() {
        let rules = RulesConfig::default();
        let mut p = player_at(0.0, 0.0);
        let mut frames = 0;
        for _ in 0..600 {
            frames += 1;
            apply_contact_damage(&mut p, None, &mut frames, 1.0 / 60.0, &rules);
            assert_eq!(p.health, 100);
        }
        assert!(p.time_since_attacked > 3.0);
    }

    #[test]
    fn test_regeneration_after_delay() {
        let rules = RulesConfig::default();
        let mut p = player_at(0.0, 0.0);
        p.health = 50;
        p.time_since_attacked = 3.0;
        // floor(3.x) = 3 -> modulus 17
        let mut frames = 17;
        let out = apply_contact_damage(&mut p, None, &mut frames, 0.01, &rules);
        assert!(out.healed);
        assert_eq!(p.health, 51);
        assert_eq!(frames, 0);

        let mut frames = 5;
        let out = apply_contact_damage(&mut p, None, &mut frames, 0.01, &rules);
        assert!(!out.healed);
        assert_eq!(p.health, 51);
    }

    #[test]
    fn test_regeneration_modulus_never_zero() {
        let rules = RulesConfig::default();
        let mut p = player_at(0.0, 0.0);
        p.health = 10;
        p.time_since_attacked = 25.0;
        let mut frames = 3;
        let out = apply_contact_damage(&mut p, None, &mut frames, 0.01, &rules);
        assert!(out.healed);
        assert_eq!(p.health, 11);
    }

    #[test]
    fn test_no_regeneration_before_delay() {
        let rules = RulesConfig::default();
        let mut p = player_at(0.0, 0.0);
        p.health = 50;
        p.time_since_attacked = 2.0;
        let mut frames = 0;
        let out = apply_contact_damage(&mut p, None, &mut frames, 0.01, &rules);
        assert!(!out.healed);
        assert_eq!(p.health, 50);
    }

    #[test]
    fn test_half_plane_per_direction() {
        let mut p = player_at(100.0, 100.0);
        let left = Ghost::new(90.0, 100.0, 20.0, 20.0, 70.0, 10);
        let right = Ghost::new(110.0, 100.0, 20.0, 20.0, 70.0, 10);
        let below = Ghost::new(100.0, 90.0, 20.0, 20.0, 70.0, 10);
        let above = Ghost::new(100.0, 110.0, 20.0, 20.0, 70.0, 10);

        p.direction = Direction::Left;
        assert!(in_facing_half_plane(&p, &left));
        assert!(!in_facing_half_plane(&p, &right));

        p.direction = Direction::Right;
        assert!(in_facing_half_plane(&p, &right));
        assert!(!in_facing_half_plane(&p, &left));

        p.direction = Direction::Down;
        assert!(in_facing_half_plane(&p, &below));
        assert!(!in_facing_half_plane(&p, &above));

        p.direction = Direction::Up;
        assert!(in_facing_half_plane(&p, &above));
        assert!(!in_facing_half_plane(&p, &below));
    }

    #[test]
    fn test_melee_requires_attack() {
        let mut p = player_at(100.0, 100.0);
        p.direction = Direction::Left;
        let ghosts = vec![Ghost::new(90.0, 100.0, 20.0, 20.0, 70.0, 10)];

        assert!(melee_kills(&p, &ghosts, &[0]).is_empty());
        p.intent = PlayerIntent::Attacking;
        assert_eq!(melee_kills(&p, &ghosts, &[0]), vec![0]);
    }

    #[test]
    fn test_collect_coins() {
        let mut p = player_at(0.0, 0.0);
        let mut coins = vec![
            Coin::new(0.0, 0.0, 5.0, 5.0),
            Coin::new(100.0, 0.0, 5.0, 5.0),
            Coin::new(5.0, 5.0, 5.0, 5.0),
        ];
        let n = collect_coins(&mut p, &mut coins, &[0, 2]);
        assert_eq!(n, 2);
        assert_eq!(p.coins, 2);
        assert_eq!(coins, vec![Coin::new(100.0, 0.0, 5.0, 5.0)]);
        assert!(p.overlaps_coins);
    }

    #[test]
    fn test_stamina_regen_delay() {
        let rules = RulesConfig::default();
        let mut p = player_at(0.0, 0.0);
        p.stamina = 10;
        assert!(!regenerate_stamina(&mut p, 100, &rules));
        assert_eq!(p.stamina, 10);
        assert!(regenerate_stamina(&mut p, 101, &rules));
        assert_eq!(p.stamina, 11);

        p.stamina = 400;
        assert!(!regenerate_stamina(&mut p, 500, &rules));
        assert_eq!(p.stamina, 400);
    }
}

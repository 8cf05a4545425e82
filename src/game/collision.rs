//! Collision System
//!
//! Brute-force AABB overlap scans, run once per frame. Entity counts are
//! tiny (a handful of ghosts and coins plus the map's obstacle layer) so
//! there is no spatial partitioning.
//!
//! The resolver only reports overlaps. Health, positions and entity lists
//! are changed by the combat rules and the session.

use super::aabb::Aabb;
use super::components::{Coin, Ghost};

/// Everything the rules need to know about this frame's overlaps
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    /// Player touches at least one obstacle
    pub player_in_obstacle: bool,
    /// Per ghost (same order as the ghost list): ghost touches an obstacle
    pub ghost_in_obstacle: Vec<bool>,
    /// Indices of ghosts touching the player, in list order
    pub enemy_contacts: Vec<usize>,
    /// Damage of the touching ghost. When several touch the player, the last
    /// one in list order wins.
    pub contact_damage: Option<i32>,
    /// Indices of coins touching the player, in list order
    pub coin_contacts: Vec<usize>,
}

impl CollisionReport {
    pub fn player_in_enemy(&self) -> bool {
        !self.enemy_contacts.is_empty()
    }

    pub fn player_on_coin(&self) -> bool {
        !self.coin_contacts.is_empty()
    }
}

/// Obstacle pass: does the player, and does each ghost, touch any obstacle?
pub fn scan_obstacles(player: &Aabb, ghosts: &[Ghost], obstacles: &[Aabb]) -> (bool, Vec<bool>) {
    let mut player_hit = false;
    let mut ghost_hits = vec![false; ghosts.len()];

    for obstacle in obstacles {
        if player.overlaps(obstacle) {
            player_hit = true;
        }
        for (hit, ghost) in ghost_hits.iter_mut().zip(ghosts) {
            if ghost.bounds().overlaps(obstacle) {
                *hit = true;
            }
        }
    }

    (player_hit, ghost_hits)
}

/// Enemy pass: which ghosts touch the player, and the damage to apply.
pub fn scan_enemies(player: &Aabb, ghosts: &[Ghost]) -> (Vec<usize>, Option<i32>) {
    let mut contacts = Vec::new();
    let mut damage = None;

    for (i, ghost) in ghosts.iter().enumerate() {
        if player.overlaps(&ghost.bounds()) {
            contacts.push(i);
            damage = Some(ghost.damage);
        }
    }

    (contacts, damage)
}

/// Pickup pass: which coins touch the player
pub fn scan_coins(player: &Aabb, coins: &[Coin]) -> Vec<usize> {
    coins
        .iter()
        .enumerate()
        .filter(|(_, coin)| player.overlaps(&coin.bounds()))
        .map(|(i, _)| i)
        .collect()
}

/// Run all three passes for one frame
pub fn resolve(player: &Aabb, ghosts: &[Ghost], coins: &[Coin], obstacles: &[Aabb]) -> CollisionReport {
    let (player_in_obstacle, ghost_in_obstacle) = scan_obstacles(player, ghosts, obstacles);
    let (enemy_contacts, contact_damage) = scan_enemies(player, ghosts);
    let coin_contacts = scan_coins(player, coins);

    CollisionReport {
        player_in_obstacle,
        ghost_in_obstacle,
        enemy_contacts,
        contact_damage,
        coin_contacts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ghost_at(x: f32, y: f32, damage: i32) -> Ghost {
        Ghost::new(x, y, 10.0, 10.0, 70.0, damage)
    }

    #[test]
    fn test_empty_world() {
        let player = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let report = resolve(&player, &[], &[], &[]);
        assert_eq!(report, CollisionReport::default());
        assert!(!report.player_in_enemy());
        assert!(!report.player_on_coin());
    }

    #[test]
    fn test_obstacle_flags() {
        let player = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let ghosts = vec![ghost_at(100.0, 100.0, 10), ghost_at(500.0, 500.0, 10)];
        let obstacles = vec![Aabb::new(5.0, 5.0, 2.0, 2.0), Aabb::new(105.0, 95.0, 20.0, 20.0)];

        let report = resolve(&player, &ghosts, &[], &obstacles);
        assert!(report.player_in_obstacle);
        assert_eq!(report.ghost_in_obstacle, vec![true, false]);
    }

    #[test]
    fn test_edge_contact_is_not_obstacle_hit() {
        let player = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let obstacles = vec![Aabb::new(10.0, 0.0, 10.0, 10.0)];
        let report = resolve(&player, &[], &[], &obstacles);
        assert!(!report.player_in_obstacle);
    }

    #[test]
    fn test_last_overlapping_enemy_sets_damage() {
        let player = Aabb::new(0.0, 0.0, 20.0, 20.0);
        let ghosts = vec![ghost_at(5.0, 5.0, 10), ghost_at(200.0, 0.0, 99), ghost_at(8.0, 8.0, 25)];

        let report = resolve(&player, &ghosts, &[], &[]);
        assert_eq!(report.enemy_contacts, vec![0, 2]);
        assert_eq!(report.contact_damage, Some(25));
    }

    #[test]
    fn test_coin_contacts() {
        let player = Aabb::new(0.0, 0.0, 20.0, 20.0);
        let coins = vec![
            Coin::new(5.0, 5.0, 4.0, 4.0),
            Coin::new(50.0, 50.0, 4.0, 4.0),
            Coin::new(18.0, 18.0, 4.0, 4.0),
        ];
        let report = resolve(&player, &[], &coins, &[]);
        assert_eq!(report.coin_contacts, vec![0, 2]);
        assert!(report.player_on_coin());
    }
}

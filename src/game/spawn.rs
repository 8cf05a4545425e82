//! Spawn manager
//!
//! Keeps the ghost and coin populations going. Every kill brings in a
//! replacement ghost that is one step faster than the last; coins drop in
//! on a timer.
//!
//! Ghosts appear on the left or right edge only: x is either 0 or the
//! play-field width, never in between.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::config::{CoinConfig, GhostConfig};
use super::components::{Coin, Ghost};

pub struct Spawner {
    rng: StdRng,
    /// Play field size
    width: f32,
    height: f32,
    /// Speed of the most recently spawned ghost (ratchets upward)
    ghost_speed: f32,
    ghosts: GhostConfig,
    coins: CoinConfig,
}

impl Spawner {
    pub fn new(width: f32, height: f32, ghosts: GhostConfig, coins: CoinConfig) -> Self {
        Self::with_rng(StdRng::from_entropy(), width, height, ghosts, coins)
    }

    /// Deterministic spawner for tests and replays
    pub fn seeded(seed: u64, width: f32, height: f32, ghosts: GhostConfig, coins: CoinConfig) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), width, height, ghosts, coins)
    }

    fn with_rng(rng: StdRng, width: f32, height: f32, ghosts: GhostConfig, coins: CoinConfig) -> Self {
        let ghost_speed = ghosts.initial_speed;
        Self { rng, width, height, ghost_speed, ghosts, coins }
    }

    /// Speed the next replacement ghost will be based on
    pub fn ghost_speed(&self) -> f32 {
        self.ghost_speed
    }

    /// Opening population: ghosts at the initial speed
    pub fn initial_ghosts(&mut self) -> Vec<Ghost> {
        (0..self.ghosts.initial_count)
            .map(|_| self.ghost_at_speed(self.ghosts.initial_speed))
            .collect()
    }

    /// Opening coins, inset by the initial margin
    pub fn initial_coins(&mut self) -> Vec<Coin> {
        let margin = self.coins.initial_margin;
        (0..self.coins.initial_count).map(|_| self.coin_with_margin(margin)).collect()
    }

    /// Replacement ghost after a kill: one unit faster, up to the cap
    pub fn spawn_ghost(&mut self) -> Ghost {
        self.ghost_speed = (self.ghost_speed + 1.0).min(self.ghosts.speed_cap);
        self.ghost_at_speed(self.ghost_speed)
    }

    /// Periodic coin, inset by the spawn margin
    pub fn spawn_coin(&mut self) -> Coin {
        let margin = self.coins.spawn_margin;
        self.coin_with_margin(margin)
    }

    fn ghost_at_speed(&mut self, speed: f32) -> Ghost {
        let x = if self.rng.gen_bool(0.5) { self.width } else { 0.0 };
        let y = (self.rng.gen::<f32>() * self.height).round();
        let size = self.ghosts.size;
        Ghost::new(x, y, size.w, size.h, speed, self.ghosts.damage)
    }

    fn coin_with_margin(&mut self, margin: f32) -> Coin {
        let x = (margin + self.rng.gen::<f32>() * (self.width - 2.0 * margin)).trunc();
        let y = (margin + self.rng.gen::<f32>() * (self.height - 2.0 * margin)).trunc();
        let size = self.coins.size;
        Coin::new(x, y, size.w, size.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawner(seed: u64) -> Spawner {
        Spawner::seeded(seed, 1280.0, 960.0, GhostConfig::default(), CoinConfig::default())
    }

    #[test]
    fn test_initial_population() {
        let mut s = spawner(1);
        let ghosts = s.initial_ghosts();
        let coins = s.initial_coins();
        assert_eq!(ghosts.len(), 7);
        assert_eq!(coins.len(), 10);
        assert!(ghosts.iter().all(|g| g.base_speed == 70.0 && g.damage == 10));
    }

    #[test]
    fn test_ghosts_spawn_on_side_edges() {
        let mut s = spawner(7);
        for _ in 0..50 {
            let g = s.spawn_ghost();
            assert!(g.x == 0.0 || g.x == 1280.0, "x = {}", g.x);
            assert!((0.0..=960.0).contains(&g.y));
            assert_eq!(g.y, g.y.round());
        }
    }

    #[test]
    fn test_ghost_speed_ratchets_and_caps() {
        let mut s = spawner(3);
        assert_eq!(s.spawn_ghost().base_speed, 71.0);
        assert_eq!(s.spawn_ghost().base_speed, 72.0);
        for _ in 0..100 {
            s.spawn_ghost();
        }
        assert_eq!(s.ghost_speed(), 100.0);
        assert_eq!(s.spawn_ghost().base_speed, 100.0);
    }

    #[test]
    fn test_coins_respect_margins() {
        let mut s = spawner(11);
        for coin in s.initial_coins() {
            assert!(coin.x >= 30.0 && coin.x <= 1280.0 - 30.0);
            assert!(coin.y >= 30.0 && coin.y <= 960.0 - 30.0);
        }
        for _ in 0..100 {
            let coin = s.spawn_coin();
            assert!(coin.x >= 15.0 && coin.x <= 1280.0 - 15.0);
            assert!(coin.y >= 15.0 && coin.y <= 960.0 - 15.0);
        }
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let a: Vec<_> = spawner(42).initial_coins();
        let b: Vec<_> = spawner(42).initial_coins();
        assert_eq!(a, b);
    }
}

//! Play session
//!
//! One run from entering the play screen until the death summary times out
//! or the player quits. The session owns every entity and runs the systems in
//! a fixed order once per frame:
//!
//! 1. frame counters
//! 2. stamina regeneration
//! 3. collision scan (obstacles, enemy contact damage, kills, coin pickups)
//! 4. periodic coin spawn
//! 5. input to intent
//! 6. motion: player, obstacle push-back, bounds clamp, weapon swing, ghosts
//!
//! Drawing happens afterwards, in the play screen, from the session's state.

use crate::config::GameConfig;
use super::aabb::Aabb;
use super::chase;
use super::collision::{self, CollisionReport};
use super::combat;
use super::components::{Coin, Direction, Ghost, Player};
use super::event::{CoinEvent, DamageEvent, DeathEvent, Events, KillEvent, SpawnEvent};
use super::intent::{self, InputSnapshot, MoveParams};
use super::spawn::Spawner;
use super::weapon::{SwingProgress, Weapon};

/// Where the session stands after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Player alive, game running
    Running,
    /// Player gone, summary on screen
    Dead,
    /// Summary timed out: back to the main menu
    Finished,
}

pub struct Session {
    pub player: Player,
    pub ghosts: Vec<Ghost>,
    pub coins: Vec<Coin>,
    /// Static collision layer, read-only for the whole run
    obstacles: Vec<Aabb>,
    spawner: Spawner,
    config: GameConfig,
    /// Events raised during the last tick
    pub events: Events,
    /// Current swing state, for the attack animation
    pub swing: SwingProgress,

    // Frame counters
    coin_frames: u32,
    regen_frames: u32,
    stamina_frames: u32,
    death_frames: u32,

    /// Seconds since the run started (drives looping animations)
    pub elapsed: f32,
}

impl Session {
    /// New run with an entropy-seeded spawner
    pub fn new(config: &GameConfig, obstacles: Vec<Aabb>) -> Self {
        let spawner = Spawner::new(
            config.window.width,
            config.window.height,
            config.ghosts.clone(),
            config.coins.clone(),
        );
        Self::with_spawner(config, obstacles, spawner)
    }

    /// New run with a caller-supplied spawner (seeded in tests)
    pub fn with_spawner(config: &GameConfig, obstacles: Vec<Aabb>, mut spawner: Spawner) -> Self {
        let pc = &config.player;
        let x = config.window.width / 2.0 + pc.spawn_offset.0;
        let y = config.window.height / 2.0 + pc.spawn_offset.1;
        let player = Player::new(x, y, pc.size.w, pc.size.h, pc.max_health, pc.max_stamina);

        let ghosts = spawner.initial_ghosts();
        let coins = spawner.initial_coins();

        log::info!(
            "session started: {} ghosts, {} coins, {} obstacles",
            ghosts.len(),
            coins.len(),
            obstacles.len()
        );

        Self {
            player,
            ghosts,
            coins,
            obstacles,
            spawner,
            config: config.clone(),
            events: Events::new(),
            swing: SwingProgress::Idle,
            coin_frames: 0,
            regen_frames: 0,
            stamina_frames: 0,
            death_frames: 0,
            elapsed: 0.0,
        }
    }

    pub fn obstacles(&self) -> &[Aabb] {
        &self.obstacles
    }

    /// Play field size (width, height)
    pub fn field_size(&self) -> (f32, f32) {
        (self.config.window.width, self.config.window.height)
    }

    /// Frames the death summary has been showing
    pub fn death_frames(&self) -> u32 {
        self.death_frames
    }

    /// Frames since the last periodic coin
    pub fn coin_frames(&self) -> u32 {
        self.coin_frames
    }

    /// Speed the next replacement ghost is based on
    pub fn ghost_speed(&self) -> f32 {
        self.spawner.ghost_speed()
    }

    /// Advance one frame
    pub fn tick(&mut self, input: &InputSnapshot, dt: f32) -> SessionStatus {
        self.coin_frames += 1;
        self.regen_frames += 1;
        self.stamina_frames += 1;
        self.elapsed += dt;

        if !self.player.alive {
            self.death_frames += 1;
            return if self.death_frames >= self.config.rules.death_screen_frames {
                SessionStatus::Finished
            } else {
                SessionStatus::Dead
            };
        }

        combat::regenerate_stamina(&mut self.player, self.stamina_frames, &self.config.rules);

        let report = collision::resolve(&self.player.bounds(), &self.ghosts, &self.coins, &self.obstacles);
        self.apply_obstacle_flags(&report);
        self.apply_contact(&report, dt);
        self.apply_kills(&report);
        self.apply_pickups(&report);

        let params = MoveParams {
            base_speed: self.config.player.base_speed,
            sprint_multiplier: self.config.player.sprint_multiplier,
        };
        let outcome = intent::apply_intent(&mut self.player, input, params);
        if outcome.sprinted {
            self.stamina_frames = 0;
        }

        self.move_player(dt);
        self.swing = Weapon::update(&mut self.player, dt);
        chase::chase_all(&mut self.ghosts, &self.player, dt);

        if outcome.ended {
            self.events.death.send(DeathEvent {
                quit: input.escape,
                coins: self.player.coins,
                kills: self.player.kills,
            });
            return SessionStatus::Dead;
        }
        SessionStatus::Running
    }

    fn apply_obstacle_flags(&mut self, report: &CollisionReport) {
        self.player.overlaps_obstacles = report.player_in_obstacle;
        for (ghost, &hit) in self.ghosts.iter_mut().zip(&report.ghost_in_obstacle) {
            ghost.overlaps_obstacles = hit;
        }
    }

    fn apply_contact(&mut self, report: &CollisionReport, dt: f32) {
        let outcome = combat::apply_contact_damage(
            &mut self.player,
            report.contact_damage,
            &mut self.regen_frames,
            dt,
            &self.config.rules,
        );
        if let Some(amount) = outcome.damage {
            self.events.damage.send(DamageEvent { amount, health_after: self.player.health });
        }
    }

    fn apply_kills(&mut self, report: &CollisionReport) {
        let kills = combat::melee_kills(&self.player, &self.ghosts, &report.enemy_contacts);
        for &i in kills.iter().rev() {
            let ghost = self.ghosts.remove(i);
            self.player.kills += 1;
            self.events.kill.send(KillEvent {
                x: ghost.x,
                y: ghost.y,
                facing: self.player.direction,
                total_kills: self.player.kills,
            });
        }
        for _ in &kills {
            let ghost = self.spawner.spawn_ghost();
            self.events.spawn.send(SpawnEvent::Ghost { x: ghost.x, y: ghost.y, speed: ghost.base_speed });
            self.ghosts.push(ghost);
        }
    }

    fn apply_pickups(&mut self, report: &CollisionReport) {
        let count = combat::collect_coins(&mut self.player, &mut self.coins, &report.coin_contacts);
        if count > 0 {
            self.events.coin_collected.send(CoinEvent { count, total_coins: self.player.coins });
        }

        if self.coin_frames >= self.config.coins.spawn_interval_frames {
            let coin = self.spawner.spawn_coin();
            self.events.spawn.send(SpawnEvent::Coin { x: coin.x, y: coin.y });
            self.coins.push(coin);
            self.coin_frames = 0;
        }
    }

    /// Integrate, back out of obstacles, keep inside the field
    fn move_player(&mut self, dt: f32) {
        self.player.integrate(dt);

        if self.player.overlaps_obstacles {
            let push = self.config.rules.obstacle_pushback;
            match self.player.direction {
                Direction::Left => self.player.x += push,
                Direction::Right => self.player.x -= push,
                Direction::Up => self.player.y -= push,
                Direction::Down => self.player.y += push,
            }
        }

        let (width, height) = self.field_size();
        let (left, bottom, right, top) = self.config.player.bounds_inset;
        let max_x = width - self.player.width - right;
        let max_y = height - self.player.height - top;
        self.player.x = self.player.x.max(left).min(max_x);
        self.player.y = self.player.y.max(bottom).min(max_y);
    }
}

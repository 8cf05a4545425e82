//! Event System
//!
//! The session records what happened during a tick (hits, kills, pickups,
//! spawns, the end of the run) in per-type queues. The play screen drains
//! them after each tick for logging; tests inspect them directly.

use super::components::Direction;

/// A queue for events of a single type.
/// Events are collected during the frame and drained after the tick.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Iterate over events without clearing
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.events.iter()
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// All session events
#[derive(Debug, Default)]
pub struct Events {
    /// Contact damage taken by the player
    pub damage: EventQueue<DamageEvent>,
    /// Ghost killed by the player
    pub kill: EventQueue<KillEvent>,
    /// Coins picked up
    pub coin_collected: EventQueue<CoinEvent>,
    /// Ghost or coin added to the field
    pub spawn: EventQueue<SpawnEvent>,
    /// The run ended (death or quit)
    pub death: EventQueue<DeathEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all event queues
    pub fn clear_all(&mut self) {
        self.damage.clear();
        self.kill.clear();
        self.coin_collected.clear();
        self.spawn.clear();
        self.death.clear();
    }

    /// Log and discard everything queued this frame
    pub fn flush_to_log(&mut self) {
        for e in self.damage.drain() {
            log::debug!("player hit for {} (health {})", e.amount, e.health_after);
        }
        for e in self.kill.drain() {
            log::debug!("ghost killed facing {:?} at ({:.0}, {:.0}), kills {}", e.facing, e.x, e.y, e.total_kills);
        }
        for e in self.coin_collected.drain() {
            log::debug!("picked up {} coin(s), total {}", e.count, e.total_coins);
        }
        for e in self.spawn.drain() {
            match e {
                SpawnEvent::Ghost { x, y, speed } => {
                    log::debug!("ghost spawned at ({:.0}, {:.0}) speed {}", x, y, speed)
                }
                SpawnEvent::Coin { x, y } => log::debug!("coin spawned at ({:.0}, {:.0})", x, y),
            }
        }
        for e in self.death.drain() {
            log::info!(
                "run over ({}): {} coins, {} kills",
                if e.quit { "quit" } else { "died" },
                e.coins,
                e.kills
            );
        }
    }
}

// =============================================================================
// Event Types
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageEvent {
    pub amount: i32,
    pub health_after: i32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KillEvent {
    /// Where the ghost died
    pub x: f32,
    pub y: f32,
    /// Player facing at the time of the kill
    pub facing: Direction,
    pub total_kills: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoinEvent {
    pub count: u32,
    pub total_coins: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnEvent {
    Ghost { x: f32, y: f32, speed: f32 },
    Coin { x: f32, y: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeathEvent {
    /// Left through Escape rather than running out of health
    pub quit: bool,
    pub coins: u32,
    pub kills: u32,
}

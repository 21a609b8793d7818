//! Health, invincibility window and respawn timer.
//!
//! Damage is applied by collision reactions through [`Health::take_damage`];
//! the health system only advances the timers. While the invincibility timer
//! is above zero, damage is ignored.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Health {
    /// Current health, always within `[0, max_health]`.
    pub health: f32,
    pub max_health: f32,
    /// Seconds of invincibility left, within `[0, invincibility_duration]`.
    pub invincibility_timer: f32,
    pub invincibility_duration: f32,
    /// Mirrors `invincibility_timer > 0` after every health system pass.
    pub invincible: bool,
    /// Seconds left before a dead entity may respawn.
    pub respawn_timer: f32,
    pub respawn_duration: f32,
}

impl Health {
    pub fn new(max_health: f32, invincibility_duration: f32) -> Self {
        let max_health = max_health.max(0.0);
        Self {
            health: max_health,
            max_health,
            invincibility_timer: 0.0,
            invincibility_duration: invincibility_duration.max(0.0),
            invincible: false,
            respawn_timer: 0.0,
            respawn_duration: 0.0,
        }
    }

    pub fn with_respawn(mut self, respawn_duration: f32) -> Self {
        self.respawn_duration = respawn_duration.max(0.0);
        self
    }

    /// Health as a fraction of max health in `[0, 1]`.
    pub fn percent(&self) -> f32 {
        if self.max_health <= 0.0 {
            return 0.0;
        }
        (self.health / self.max_health).clamp(0.0, 1.0)
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    /// Apply damage unless invincible. On a hit, the invincibility window is
    /// armed. Returns whether the damage landed.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        if self.invincible || self.invincibility_timer > 0.0 || amount <= 0.0 {
            return false;
        }
        self.health = (self.health - amount).clamp(0.0, self.max_health);
        self.grant_invincibility();
        true
    }

    pub fn heal_full(&mut self) {
        self.health = self.max_health;
    }

    /// Start a fresh invincibility window.
    pub fn grant_invincibility(&mut self) {
        self.invincibility_timer = self.invincibility_duration;
        self.invincible = self.invincibility_timer > 0.0;
    }

    pub fn arm_respawn(&mut self) {
        self.respawn_timer = self.respawn_duration;
    }

    /// Advance both timers by `dt` and refresh the `invincible` flag.
    pub fn tick(&mut self, dt: f32) {
        if self.invincibility_timer > 0.0 {
            self.invincibility_timer =
                (self.invincibility_timer - dt).clamp(0.0, self.invincibility_duration);
        }
        self.invincible = self.invincibility_timer > 0.0;

        if self.respawn_timer > 0.0 {
            self.respawn_timer = (self.respawn_timer - dt).clamp(0.0, self.respawn_duration);
        }
    }
}

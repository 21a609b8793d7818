//! Player ship state.
//!
//! [`Player`] holds the directional and shoot intent written by the input
//! system, the shooting cadence, upgrade levels, score counters and the
//! respawn state machine driven by
//! [`crate::systems::playercontrol::player_control_system`].

use bevy_ecs::prelude::Component;

/// Highest level any upgrade can reach.
pub const MAX_UPGRADE_LEVEL: u8 = 4;

/// Control state of a player ship.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PlayerState {
    /// Has health and accepts input.
    #[default]
    Alive,
    /// Health reached zero this frame; the ship was hidden and reset.
    DyingReset,
    /// Hidden, waiting for the respawn timer.
    RespawnWait,
    /// A life was spent and the ship was restored this frame.
    Respawned,
    /// No lives left. Terminal.
    OutOfLives,
}

#[derive(Component, Clone, Debug, PartialEq)]
pub struct Player {
    // Directional intent, 0 or 1.
    pub up: u8,
    pub left: u8,
    pub down: u8,
    pub right: u8,
    pub shoot: bool,
    /// Cooldown in `[0, 1]`; a shot is possible at 0.
    pub shoot_timer: f32,
    pub shots_per_second: f32,
    pub up_fire_rate: u8,
    pub up_bullet_damage: u8,
    pub up_speed: u8,
    /// Bullets fired so far.
    pub shots_fired: u32,
    pub lives: u32,
    /// Set while waiting to respawn.
    pub revive: bool,
    /// Whole seconds survived.
    pub time_alive: u32,
    /// Sub-second remainder of `time_alive`.
    pub alive_clock: f32,
    pub state: PlayerState,
}

impl Player {
    pub fn new(lives: u32, shots_per_second: f32) -> Self {
        Self {
            up: 0,
            left: 0,
            down: 0,
            right: 0,
            shoot: false,
            shoot_timer: 0.0,
            shots_per_second,
            up_fire_rate: 0,
            up_bullet_damage: 0,
            up_speed: 0,
            shots_fired: 0,
            lives,
            revive: false,
            time_alive: 0,
            alive_clock: 0.0,
            state: PlayerState::Alive,
        }
    }

    pub fn clear_intent(&mut self) {
        self.up = 0;
        self.left = 0;
        self.down = 0;
        self.right = 0;
        self.shoot = false;
    }

    pub fn reset_upgrades(&mut self) {
        self.up_fire_rate = 0;
        self.up_bullet_damage = 0;
        self.up_speed = 0;
    }

    /// Raise an upgrade level by one, saturating at [`MAX_UPGRADE_LEVEL`].
    pub fn upgrade(level: &mut u8) {
        *level = (*level + 1).min(MAX_UPGRADE_LEVEL);
    }

    /// Upgrade level as a fraction of the maximum.
    pub fn level_fraction(level: u8) -> f32 {
        f32::from(level.min(MAX_UPGRADE_LEVEL)) / f32::from(MAX_UPGRADE_LEVEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upgrades_saturate() {
        let mut p = Player::new(3, 5.0);
        for _ in 0..10 {
            Player::upgrade(&mut p.up_speed);
        }
        assert_eq!(p.up_speed, MAX_UPGRADE_LEVEL);
        p.reset_upgrades();
        assert_eq!(p.up_speed, 0);
    }

    #[test]
    fn level_fraction_spans_unit_interval() {
        assert_eq!(Player::level_fraction(0), 0.0);
        assert_eq!(Player::level_fraction(2), 0.5);
        assert_eq!(Player::level_fraction(9), 1.0);
    }

    #[test]
    fn clear_intent_drops_all_flags() {
        let mut p = Player::new(1, 5.0);
        p.up = 1;
        p.right = 1;
        p.shoot = true;
        p.clear_intent();
        assert_eq!((p.up, p.left, p.down, p.right, p.shoot), (0, 0, 0, 0, false));
    }
}

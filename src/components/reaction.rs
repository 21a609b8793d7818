//! Contact reactions carried by colliders.
//!
//! Instead of one handler object per entity, a collider stores a
//! [`CollisionReaction`] tag. The collision system dispatches on the tag
//! through [`crate::systems::reactions::react`] with the phase of the contact
//! and the other entity.

use crate::components::sprite::Tint;

/// Transition of a contact between two colliders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CollisionPhase {
    /// The pair started overlapping this frame.
    Enter,
    /// The pair overlapped last frame and still does.
    While,
    /// The pair overlapped last frame and no longer does.
    Exit,
}

/// Power-up effect applied to the player that picks it up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PowerUpKind {
    /// Restore health to maximum.
    Health,
    /// One more fire-rate level.
    FireRate,
    /// One more speed level.
    Speed,
    /// One more bullet-damage level (wider shot pattern).
    BulletDamage,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 4] = [
        PowerUpKind::Health,
        PowerUpKind::FireRate,
        PowerUpKind::Speed,
        PowerUpKind::BulletDamage,
    ];

    /// Tint of the power-up's base sprite.
    pub fn tint(self) -> Tint {
        match self {
            PowerUpKind::Health => Tint::RED,
            PowerUpKind::FireRate => Tint::YELLOW,
            PowerUpKind::Speed => Tint::CYAN,
            PowerUpKind::BulletDamage => Tint::ORANGE,
        }
    }
}

/// What an entity does when its collider touches another one.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum CollisionReaction {
    /// No reaction; the entity may still be the target of the other side's reaction.
    #[default]
    Inert,
    /// Player projectile: damages hazards and is consumed on hit.
    PlayerBullet { damage: f32 },
    /// Damages players on contact and shatters when the damage lands.
    Hazard { damage: f32 },
    /// Collectable upgrade, consumed by the first player touching it.
    PowerUp(PowerUpKind),
}

impl CollisionReaction {
    pub fn is_hazard(&self) -> bool {
        matches!(self, CollisionReaction::Hazard { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_power_up_has_a_distinct_tint() {
        let tints: Vec<Tint> = PowerUpKind::ALL.iter().map(|k| k.tint()).collect();
        for (i, a) in tints.iter().enumerate() {
            for b in tints.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn default_reaction_is_inert() {
        assert_eq!(CollisionReaction::default(), CollisionReaction::Inert);
        assert!(CollisionReaction::Hazard { damage: 1.0 }.is_hazard());
        assert!(!CollisionReaction::PowerUp(PowerUpKind::Speed).is_hazard());
    }
}

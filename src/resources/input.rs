//! Per-frame input resource.
//!
//! The host polls its devices and writes the logical key set the simulation
//! cares about into [`InputState`] before each step. The simulation never
//! talks to a keyboard; it only reads this resource.
use bevy_ecs::prelude::*;

/// Logical keys the simulation reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    Up,
    Left,
    Down,
    Right,
    Shoot,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Boolean key state for one logical action.
pub struct BoolState {
    /// Whether the key is currently held.
    pub active: bool,
    /// Whether the key went down since the last frame.
    pub just_pressed: bool,
    /// Whether the key went up since the last frame.
    pub just_released: bool,
}

impl BoolState {
    fn set(&mut self, pressed: bool) {
        if pressed && !self.active {
            self.just_pressed = true;
        }
        if !pressed && self.active {
            self.just_released = true;
        }
        self.active = pressed;
    }
}

/// Resource capturing the per-frame state of the movement and shoot keys.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    pub up: BoolState,
    pub left: BoolState,
    pub down: BoolState,
    pub right: BoolState,
    pub shoot: BoolState,
}

impl InputState {
    pub fn key(&self, action: InputAction) -> &BoolState {
        match action {
            InputAction::Up => &self.up,
            InputAction::Left => &self.left,
            InputAction::Down => &self.down,
            InputAction::Right => &self.right,
            InputAction::Shoot => &self.shoot,
        }
    }

    fn key_mut(&mut self, action: InputAction) -> &mut BoolState {
        match action {
            InputAction::Up => &mut self.up,
            InputAction::Left => &mut self.left,
            InputAction::Down => &mut self.down,
            InputAction::Right => &mut self.right,
            InputAction::Shoot => &mut self.shoot,
        }
    }

    /// Record the current press state of `action`.
    pub fn set(&mut self, action: InputAction, pressed: bool) {
        self.key_mut(action).set(pressed);
    }

    pub fn press(&mut self, action: InputAction) {
        self.set(action, true);
    }

    pub fn release(&mut self, action: InputAction) {
        self.set(action, false);
    }

    pub fn is_active(&self, action: InputAction) -> bool {
        self.key(action).active
    }

    /// Clear the edge flags; called after every step.
    pub fn end_frame(&mut self) {
        for key in [
            &mut self.up,
            &mut self.left,
            &mut self.down,
            &mut self.right,
            &mut self.shoot,
        ] {
            key.just_pressed = false;
            key.just_released = false;
        }
    }
}

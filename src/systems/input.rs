//! Input collaborator to player intent.
use bevy_ecs::prelude::*;

use crate::components::lifecycle::PendingDestroy;
use crate::components::player::Player;
use crate::resources::input::InputState;

/// Copy the held movement and shoot keys into every player's intent flags.
pub fn player_input_system(
    mut query: Query<&mut Player, Without<PendingDestroy>>,
    input: Res<InputState>,
) {
    for mut player in query.iter_mut() {
        player.up = u8::from(input.up.active);
        player.left = u8::from(input.left.active);
        player.down = u8::from(input.down.active);
        player.right = u8::from(input.right.active);
        player.shoot = input.shoot.active;
    }
}

//! Audio forwarding systems.
//!
//! Systems write [`AudioCmd`] messages; these two systems rotate the message
//! buffers and push each command onto the channel held by [`AudioBridge`].
use bevy_ecs::prelude::*;

use crate::events::audio::AudioCmd;
use crate::resources::audio::AudioBridge;

/// Forward every new [`AudioCmd`] to the host's receiver.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // Ignore send errors when the host has dropped its receiver.
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

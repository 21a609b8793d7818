//! Bridge between the simulation and the host's audio thread.
//!
//! Use [`setup_audio`] once during initialization. It inserts the
//! [`AudioBridge`] and the `Messages<AudioCmd>` resource and hands back the
//! receiving end of the channel. Call [`shutdown_audio`] during teardown.

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::events::audio::AudioCmd;

/// Sending half of the audio channel.
///
/// Systems do not use the sender directly; they write [`AudioCmd`] messages
/// and [`crate::systems::audio::forward_audio_cmds`] forwards them.
#[derive(Resource)]
pub struct AudioBridge {
    pub tx_cmd: Sender<AudioCmd>,
}

/// Create the command channel and register bridge resources.
///
/// Returns the receiver the host's audio backend should drain.
pub fn setup_audio(world: &mut World) -> Receiver<AudioCmd> {
    let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();
    world.insert_resource(AudioBridge { tx_cmd });
    world.insert_resource(Messages::<AudioCmd>::default());
    rx_cmd
}

/// Tell the receiver the simulation is going away and drop the bridge.
pub fn shutdown_audio(world: &mut World) {
    if let Some(bridge) = world.remove_resource::<AudioBridge>() {
        // The host may already have dropped its receiver.
        let _ = bridge.tx_cmd.send(AudioCmd::Shutdown);
    }
}

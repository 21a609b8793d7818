//! Audio commands sent from the simulation to the host's audio backend.
use bevy_ecs::message::Message;

use crate::resources::assets::AssetHandle;

/// Commands sent *to* the audio collaborator.
///
/// The simulation never plays sound itself. Systems write these as messages;
/// [`crate::systems::audio::forward_audio_cmds`] pushes them onto the channel
/// the host drains.
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioCmd {
    /// Fire-and-forget sound effect.
    PlayFx { cue: AssetHandle, volume: f32 },
    /// The simulation is shutting down; the receiver may stop listening.
    Shutdown,
}

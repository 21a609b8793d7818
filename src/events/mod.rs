//! Messages exchanged between systems and with external collaborators.
//!
//! - [`audio`] – sound cues forwarded to the host
//! - [`collision`] – contact transitions recorded by the collision pass
pub mod audio;
pub mod collision;

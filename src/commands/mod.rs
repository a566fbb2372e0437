//! Bot commands.

mod access;
mod ip;
mod mods;
mod ping;
mod status;

use crate::{Data, SloorError};

/// Convenient type alias for [poise::Command].
pub type Command = poise::Command<Data, SloorError>;

/// Lists all the implemented commands
pub fn list() -> Vec<Command> {
    vec![
        ping::ping(),
        ip::ip(),
        mods::mods(),
        status::status(),
        access::access(),
    ]
}

//! SloorBot, the community bot for the Sloor Minecraft server.
//!
//! Slash commands for the server address, a paginated mod list, a live
//! server-status embed, and a button-gated channel role.

mod commands;
mod data;
mod error;
mod events;
mod log;
mod mcstatus;
mod pagination;
mod setup;
mod ui;

/// Every serenity type used by this crate goes through this alias.
pub use poise::serenity_prelude as serenity;

pub use data::Data;
pub use error::{ConfigError, SloorError, UserError};
pub use setup::Config;

/// Convenient type alias, only this [poise::Context] type is used.
pub type Context<'a> = poise::Context<'a, Data, SloorError>;

#[tokio::main]
async fn main() -> Result<(), SloorError> {
    let config = Config::read()?;

    // The guard flushes file logs on drop, keep it until shutdown.
    let _guard = log::install_tracing(&config);

    let mut client = setup::client(config).await?;
    client.start().await?;

    Ok(())
}

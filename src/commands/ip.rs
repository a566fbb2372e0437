//! Implements the `/ip` command.

use tracing::instrument;

use crate::Context;
use crate::SloorError;

/// Get the server address.
#[instrument(skip(ctx))]
#[poise::command(slash_command)]
pub async fn ip(ctx: Context<'_>) -> Result<(), SloorError> {
    let address = &ctx.data().server_address;
    ctx.reply(format!("`{address}`")).await?;
    Ok(())
}

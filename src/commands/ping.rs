//! Implements the `/ping` command.

use tracing::instrument;

use crate::Context;
use crate::SloorError;

/// Check that the bot is alive.
#[instrument(skip(ctx))]
#[poise::command(slash_command)]
pub async fn ping(ctx: Context<'_>) -> Result<(), SloorError> {
    ctx.reply("Pong!").await?;
    Ok(())
}

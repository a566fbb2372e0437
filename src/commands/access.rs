//! Implements the `/access` command.
//!
//! Posts the persistent access-gate message in the invoking channel: a
//! single success-styled button that grants the configured role. Button
//! presses are handled globally in [events](crate::events), so the
//! message keeps working across bot restarts.

use poise::CreateReply;
use tracing::instrument;

use crate::events::ACCESS_BUTTON_ID;
use crate::serenity;
use crate::Context;
use crate::SloorError;

/// Post the access-gate message for this channel. Admin only.
#[instrument(skip(ctx))]
#[poise::command(
    slash_command,
    guild_only,
    required_permissions = "ADMINISTRATOR",
    default_member_permissions = "ADMINISTRATOR"
)]
pub async fn access(ctx: Context<'_>) -> Result<(), SloorError> {
    let data = ctx.data();

    let button = serenity::CreateButton::new(ACCESS_BUTTON_ID)
        .emoji('✅')
        .label(&data.access_button_label)
        .style(serenity::ButtonStyle::Success);
    let gate = serenity::CreateMessage::new()
        .content(format!(
            "Click the checkmark to get access to the {} text channel!",
            data.access_channel
        ))
        .components(vec![serenity::CreateActionRow::Buttons(vec![button])]);

    ctx.channel_id().send_message(ctx, gate).await?;

    // The gate message itself is the visible output, keep the command
    // reply out of the channel.
    ctx.send(
        CreateReply::default()
            .content("Access prompt posted.")
            .ephemeral(true),
    )
    .await?;

    Ok(())
}

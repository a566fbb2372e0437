//! Implements the `/mods` command.
//!
//! The bot replies with one page of the mod list and previous/next
//! buttons. Only the invoking user can turn pages, and the buttons are
//! retired after a configurable idle window.

use std::time::Instant;

use poise::CreateReply;
use tracing::instrument;

use crate::pagination::{Direction, Navigation, PageSession};
use crate::serenity;
use crate::ui;
use crate::Context;
use crate::SloorError;

/// View all the mods on the server.
#[instrument(skip(ctx))]
#[poise::command(slash_command)]
pub async fn mods(ctx: Context<'_>) -> Result<(), SloorError> {
    let data = ctx.data();
    let lines = data.mods.lines();

    let mut session = PageSession::open(
        lines.len(),
        data.page_size,
        ctx.author().id,
        data.idle_timeout,
        Instant::now(),
    )?;

    // Button ids are scoped to this interaction so concurrent sessions
    // (even from the same user) never see each other's presses.
    let ctx_id = ctx.id();
    let prev_id = format!("{ctx_id}:prev");
    let next_id = format!("{ctx_id}:next");

    let reply = CreateReply::default()
        .embed(ui::mod_list_embed(&lines, &session))
        .components(vec![ui::nav_row(&prev_id, &next_id, &session)]);
    let handle = ctx.send(reply).await?;

    loop {
        let remaining = session.remaining(Instant::now());
        if remaining.is_zero() {
            break;
        }

        let press = serenity::ComponentInteractionCollector::new(ctx)
            .filter(move |press| press.data.custom_id.starts_with(&ctx_id.to_string()))
            .timeout(remaining)
            .await;
        let Some(press) = press else {
            break;
        };

        let direction = if press.data.custom_id == prev_id {
            Direction::Previous
        } else if press.data.custom_id == next_id {
            Direction::Next
        } else {
            continue;
        };

        match session.navigate(press.user.id, direction, Instant::now()) {
            Navigation::Turned => {
                let page = serenity::CreateInteractionResponseMessage::new()
                    .embed(ui::mod_list_embed(&lines, &session))
                    .components(vec![ui::nav_row(&prev_id, &next_id, &session)]);
                press
                    .create_response(
                        ctx.serenity_context(),
                        serenity::CreateInteractionResponse::UpdateMessage(page),
                    )
                    .await?;
            }
            // Boundary presses can only happen through stale views, the
            // live buttons are disabled there. Just acknowledge.
            Navigation::Unmoved => {
                press
                    .create_response(
                        ctx.serenity_context(),
                        serenity::CreateInteractionResponse::Acknowledge,
                    )
                    .await?;
            }
            Navigation::Denied => {
                let denial = serenity::CreateInteractionResponseMessage::new()
                    .content("Only the member who opened this list can turn its pages.")
                    .ephemeral(true);
                press
                    .create_response(
                        ctx.serenity_context(),
                        serenity::CreateInteractionResponse::Message(denial),
                    )
                    .await?;
            }
            Navigation::Expired => break,
        }
    }

    session.expire();

    // Best effort: the message may have been deleted while we waited.
    let retired = CreateReply::default()
        .embed(ui::mod_list_embed(&lines, &session))
        .components(vec![]);
    if let Err(error) = handle.edit(ctx, retired).await {
        tracing::debug!("Could not retire pagination controls: {error}");
    }

    Ok(())
}

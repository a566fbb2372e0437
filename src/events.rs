//! Global gateway event handling.
//!
//! Commands get their interactions routed by poise; the only thing left
//! for us is the access-gate button, whose presses can arrive at any
//! time after `/access` posted it.

use crate::data::Data;
use crate::serenity;
use crate::SloorError;

/// Custom id of the access-gate button.
pub const ACCESS_BUTTON_ID: &str = "access_grant";

/// Dispatch one gateway event.
pub async fn handle(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, SloorError>,
    data: &Data,
) -> Result<(), SloorError> {
    if let serenity::FullEvent::InteractionCreate {
        interaction: serenity::Interaction::Component(component),
    } = event
    {
        if component.data.custom_id == ACCESS_BUTTON_ID {
            grant_access(ctx, component, data).await?;
        }
    }

    Ok(())
}

/// Grant the configured role to whoever pressed the gate button.
///
/// Failures are answered ephemerally and logged. They never bubble out
/// of the event loop as hard errors.
async fn grant_access(
    ctx: &serenity::Context,
    component: &serenity::ComponentInteraction,
    data: &Data,
) -> Result<(), SloorError> {
    let Some(role) = data.access_role else {
        tracing::warn!("Access button pressed but no role is configured.");
        return respond_ephemeral(ctx, component, "The access role isn't set up yet.").await;
    };

    let Some(member) = &component.member else {
        return respond_ephemeral(ctx, component, "This button only works inside the server.")
            .await;
    };

    if let Err(error) = member.add_role(&ctx.http, role).await {
        tracing::error!("Could not grant {role} to {}: {error}", member.user.name);
        return respond_ephemeral(
            ctx,
            component,
            "Couldn't assign the role. Poke an admin about my permissions.",
        )
        .await;
    }

    tracing::info!("Granted {role} to {}.", member.user.name);
    respond_ephemeral(
        ctx,
        component,
        format!("You now have access to {}!", data.access_channel),
    )
    .await
}

/// Answer a component interaction with an ephemeral message.
async fn respond_ephemeral(
    ctx: &serenity::Context,
    component: &serenity::ComponentInteraction,
    content: impl Into<String>,
) -> Result<(), SloorError> {
    let message = serenity::CreateInteractionResponseMessage::new()
        .content(content)
        .ephemeral(true);
    component
        .create_response(
            &ctx.http,
            serenity::CreateInteractionResponse::Message(message),
        )
        .await?;
    Ok(())
}

//! Embed and component composition for the bot's views.

use std::time::Duration;

use serenity::ButtonStyle;
use serenity::Colour;
use serenity::CreateActionRow;
use serenity::CreateButton;
use serenity::CreateEmbed;
use serenity::CreateEmbedFooter;
use serenity::Timestamp;

use crate::mcstatus::ServerStatus;
use crate::pagination::PageSession;
use crate::serenity;

/// Embed colour for healthy responses.
pub const SUCCESS_COLOUR: Colour = Colour(0x57F287);
/// Embed colour for failures.
pub const ERROR_COLOUR: Colour = Colour(0xED4245);

/// The mod-list page a session currently points at.
pub fn mod_list_embed(lines: &[String], session: &PageSession) -> CreateEmbed {
    let (start, end) = session.window();
    let description = if start == end {
        "No mods listed.".to_string()
    } else {
        lines[start..end].join("\n")
    };

    CreateEmbed::new()
        .colour(SUCCESS_COLOUR)
        .title("Server Mod List")
        .description(description)
        .footer(CreateEmbedFooter::new(session.footer()))
        .timestamp(Timestamp::now())
}

/// Previous/next buttons, disabled at the respective list boundary.
pub fn nav_row(prev_id: &str, next_id: &str, session: &PageSession) -> CreateActionRow {
    CreateActionRow::Buttons(vec![
        CreateButton::new(prev_id)
            .emoji('⬅')
            .style(ButtonStyle::Secondary)
            .disabled(!session.has_previous()),
        CreateButton::new(next_id)
            .emoji('➡')
            .style(ButtonStyle::Secondary)
            .disabled(!session.has_next()),
    ])
}

/// Status embed for a server that answered the probe.
pub fn online_embed(
    address: &str,
    status: &ServerStatus,
    latency: Duration,
    server_type: &str,
    mods_preview: String,
) -> CreateEmbed {
    let players = status
        .players
        .as_ref()
        .map_or_else(|| "?".to_string(), |p| format!("{}/{}", p.online, p.max));
    let version = status
        .version
        .as_ref()
        .and_then(|v| v.name_clean.clone())
        .unwrap_or_else(|| "Unknown".to_string());
    let motd = status
        .motd
        .as_ref()
        .and_then(|m| m.clean.clone())
        .unwrap_or_else(|| "No MOTD provided.".to_string());

    CreateEmbed::new()
        .colour(SUCCESS_COLOUR)
        .title(format!("{address} is Online"))
        .description(motd)
        .field("Players", players, true)
        .field("Version", version, true)
        .field("Ping", format!("{}ms", latency.as_millis()), true)
        .field("Server Type", server_type.to_string(), true)
        .field("Mods", mods_preview, true)
        .footer(CreateEmbedFooter::new("SloorBot Server Monitor"))
        .timestamp(Timestamp::now())
}

/// Status embed for a server that could not be reached.
pub fn offline_embed(address: &str) -> CreateEmbed {
    CreateEmbed::new()
        .colour(ERROR_COLOUR)
        .title(format!("{address} is Offline"))
        .description("The server could not be reached.")
        .timestamp(Timestamp::now())
}

//! Implements the `/status` command.
//!
//! The bot probes the mcstatus.io API and replies with an embed showing
//! player count, version, latency, and a short mod preview. Probe
//! failures of any kind render as the offline embed, never as an error.

use std::time::Instant;

use itertools::Itertools;
use poise::CreateReply;
use tracing::instrument;

use crate::data::GetData;
use crate::mcstatus;
use crate::pagination::page_window;
use crate::ui;
use crate::Context;
use crate::SloorError;

/// Check the Minecraft server status.
#[instrument(skip(ctx))]
#[poise::command(slash_command)]
pub async fn status(ctx: Context<'_>) -> Result<(), SloorError> {
    let data = ctx.data();
    let address = data.server_address.clone();

    // The probe can take a while, let Discord know we're on it.
    ctx.defer().await?;

    let http = ctx.http_client().await;
    let started = Instant::now();

    let embed = match mcstatus::fetch_status(&http, &address).await {
        Ok(status) if status.online => {
            let latency = started.elapsed();
            ui::online_embed(
                &address,
                &status,
                latency,
                &data.server_type,
                mods_preview(&data.mods.lines(), data.status_mods_shown),
            )
        }
        Ok(_) => ui::offline_embed(&address),
        Err(error) => {
            tracing::error!("Status probe for {address} failed: {error}");
            ui::offline_embed(&address)
        }
    };

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// First page of the mod list, truncated rather than paginated.
fn mods_preview(lines: &[String], shown: usize) -> String {
    let (start, end) = page_window(lines.len(), shown.max(1), 0);
    if start == end {
        return "None".to_string();
    }
    lines[start..end].iter().join("\n")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn preview_truncates_to_the_first_window() {
        let lines: Vec<String> = (1..=15).map(|n| format!("mod-{n}")).collect();

        let preview = mods_preview(&lines, 10);
        assert_eq!(preview.lines().count(), 10);
        assert!(preview.starts_with("mod-1\n"));
        assert!(preview.ends_with("mod-10"));
    }

    #[test]
    fn short_lists_are_shown_whole() {
        let lines = vec!["solo".to_string()];
        assert_eq!(mods_preview(&lines, 10), "solo");
    }

    #[test]
    fn empty_lists_have_a_placeholder() {
        assert_eq!(mods_preview(&[], 10), "None");
    }
}

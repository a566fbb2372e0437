//! Defines and implements bot startup.

mod config;
mod framework;

use crate::data::HttpKey;
use crate::data::ModList;
use crate::serenity;
use crate::SloorError;

pub use config::Config;

/// Constructs a [serenity::Client] with an initialized [reqwest::Client].
///
/// The mod list is loaded here, before the gateway connects, so a broken
/// modlist file aborts startup instead of surfacing mid-command.
pub(super) async fn client(config: Config) -> Result<serenity::Client, SloorError> {
    // Get discord token from config file
    let token = config.token()?.clone();

    let mods = ModList::load(config.modlist_path())?;
    tracing::info!("Loaded {} mods from {}.", mods.len(), config.modlist_path());

    // Intents we wish to use
    // See https://discord.com/developers/docs/topics/gateway#gateway-intents
    let intents = serenity::GatewayIntents::non_privileged();

    let client = serenity::ClientBuilder::new(token, intents)
        .framework(framework::framework(config, mods))
        .type_map_insert::<HttpKey>(reqwest::Client::new())
        .await?;

    Ok(client)
}

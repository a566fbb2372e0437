//! This module contains everything relating to [Data].

mod mod_list;

use std::collections::HashSet;
use std::time::Duration;

use reqwest::Client;
use serenity::RoleId;
use serenity::UserId;

use crate::serenity;
use crate::Config;
use crate::Context;

pub use mod_list::ModEntry;
pub use mod_list::ModList;

/// The data kept between shards.
///
/// Everything here is immutable for the process lifetime; sessions that
/// do mutate (pagination) live on the command task that created them.
#[derive(Debug)]
pub struct Data {
    /// List of users to send bug notifications
    pub notify_list: HashSet<UserId>,
    /// The mod list, loaded once at startup.
    pub mods: ModList,
    /// Address of the Minecraft server.
    pub server_address: String,
    /// Shown verbatim in the "Server Type" status field.
    pub server_type: String,
    /// Mods listed on the status embed before cutting off.
    pub status_mods_shown: usize,
    /// Role granted by the access-gate button, if configured.
    pub access_role: Option<RoleId>,
    /// Channel label mentioned in the access-gate message.
    pub access_channel: String,
    /// Label on the access-gate button.
    pub access_button_label: String,
    /// Items per page in `/mods`.
    pub page_size: usize,
    /// Idle window before a paginated view stops accepting navigation.
    pub idle_timeout: Duration,
}

impl Data {
    /// Pull everything commands need out of the startup inputs.
    pub fn new(config: Config, mods: ModList, notify_list: HashSet<UserId>) -> Self {
        Self {
            notify_list,
            mods,
            server_address: config.server_address().to_string(),
            server_type: config.server_type().to_string(),
            status_mods_shown: config.status_mods_shown(),
            access_role: config.access_role(),
            access_channel: config.access_channel().to_string(),
            access_button_label: config.access_button_label().to_string(),
            page_size: config.page_size(),
            idle_timeout: config.idle_timeout(),
        }
    }
}

/// Key to store a [Client] in a [TypeMapKey](serenity::prelude::TypeMapKey)
pub struct HttpKey;
impl serenity::prelude::TypeMapKey for HttpKey {
    type Value = Client;
}

/// Is able to get a [Client].
pub trait GetData {
    /// Returns the shared [Client].
    async fn http_client(&self) -> Client;
}

impl GetData for Context<'_> {
    async fn http_client(&self) -> Client {
        self.serenity_context()
            .data
            .read()
            .await
            .get::<HttpKey>()
            // Client internally uses an Arc, so this is cheap to clone
            .cloned()
            .expect("Expected http client")
    }
}

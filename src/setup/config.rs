//! Configuration for running this bot.

use std::collections::HashSet;
use std::marker::PhantomData;
use std::time::Duration;

use poise::Framework;
use serde::Deserialize;
use serde::Serialize;
use serenity::GuildId;
use serenity::RoleId;
use serenity::UserId;

use crate::error::ConfigError;
use crate::serenity;

/// The path to the config file
const CONFIG_PATH: &str = "config.toml";

/// Settings read from [CONFIG_PATH] that modify bot behavior.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Token needed to use a bot account.
    discord_token: String,

    /// See [LoggingConfig]
    logging: LoggingConfig,

    /// See [MinecraftConfig]
    minecraft: MinecraftConfig,

    /// See [AccessConfig]
    access: AccessConfig,

    /// See [PaginationConfig]
    pagination: PaginationConfig,

    /// Useful developer specific configs.
    dev_utils: DevConfig,
}

impl Config {
    /// Tries to read [CONFIG_PATH] to extract a [Config].
    /// If a file doesn't exist, create the default config file and return error.
    /// If a file exists but is empty, re-write the default values and return error.
    /// If a file exists but is incomplete or invalid, show error and don't change files.
    /// If a file exists and is complete, read file to create a config.
    /// If file existence is indeterminate (e.g. missing permissions), return error.
    pub fn read() -> Result<Config, ConfigError> {
        let file = std::fs::read_to_string(CONFIG_PATH);

        match file {
            // Config file found
            Ok(content) => {
                // Write default values to file if it's empty.
                if content.trim().is_empty() {
                    write_file(Config::default())?;
                    Err(ConfigError::InvalidConfig {
                        reason: format!("Empty config file! Rewriting {CONFIG_PATH} ..."),
                    })
                } else {
                    // If deserialization fails, return error describing the mistake.
                    let to_toml = toml::Deserializer::new(&content);
                    let result: Result<Config, _> = serde_path_to_error::deserialize(to_toml);

                    let config = result.map_err(|error| ConfigError::InvalidConfig {
                        reason: error.to_string(),
                    })?;
                    config.validate()?;
                    Ok(config)
                }
            }
            // File not found or other filesystem error
            Err(file_error) => {
                match file_error.kind() {
                    // If file doesn't exist, create default config file.
                    std::io::ErrorKind::NotFound => {
                        let action = format!("Creating {CONFIG_PATH}...");
                        write_file(Config::default())?;
                        Err(ConfigError::MissingConfig { action_msg: action })
                    }
                    // Otherwise we can't tell what's wrong with the file, don't touch it.
                    _ => Err(ConfigError::IoError(file_error)),
                }
            }
        }
    }

    /// Reject values no amount of runtime clamping can make sense of.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.pagination.page_size == 0 {
            return Err(ConfigError::InvalidConfig {
                reason: "pagination.page_size must be at least 1".to_string(),
            });
        }
        if self.pagination.idle_timeout_secs == 0 {
            return Err(ConfigError::InvalidConfig {
                reason: "pagination.idle_timeout_secs must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Basic sanity check for if a token was given.
    pub fn token(&self) -> Result<&String, ConfigError> {
        let default_token = Config::default().discord_token;
        let given_token = &self.discord_token;

        let is_empty = given_token.is_empty();
        let contains_default = given_token.contains(&default_token);

        if !is_empty && !contains_default {
            Ok(&self.discord_token)
        } else {
            Err(ConfigError::InvalidConfig {
                reason: "Missing discord token".to_string(),
            })
        }
    }

    /// Construct a bug notification notify list based on the config.
    /// Wrapper for [NotifyConfig::notify_list]
    pub fn notify_list<U, E>(&self, fw: &Framework<U, E>) -> HashSet<UserId> {
        self.dev_utils.notifications.notify_list(fw)
    }

    /// Getter for log_dir.
    pub fn log_dir(&self) -> &str {
        &self.logging.log_dir
    }

    /// Is debug mode enabled for console logs
    pub fn console_debug(&self) -> bool {
        self.logging.console_debug
    }

    /// Is file logging enabled.
    pub fn logs_enabled(&self) -> bool {
        self.logging.logs_enabled
    }

    pub fn dev_guild(&self) -> Option<GuildId> {
        self.dev_utils.dev_guild
    }

    /// Address of the Minecraft server, e.g. `mc.sloorjuice.com`.
    pub fn server_address(&self) -> &str {
        &self.minecraft.address
    }

    /// Path of the HTML file the mod list is scraped from.
    pub fn modlist_path(&self) -> &str {
        &self.minecraft.modlist_path
    }

    /// Server flavor shown on the status embed.
    pub fn server_type(&self) -> &str {
        &self.minecraft.server_type
    }

    /// How many mods the status embed lists before cutting off.
    pub fn status_mods_shown(&self) -> usize {
        self.minecraft.status_mods_shown
    }

    /// Role granted by the access-gate button, if configured.
    pub fn access_role(&self) -> Option<RoleId> {
        self.access.role_id
    }

    /// Channel label mentioned in the access-gate message.
    pub fn access_channel(&self) -> &str {
        &self.access.channel
    }

    /// Label on the access-gate button.
    pub fn access_button_label(&self) -> &str {
        &self.access.button_label
    }

    /// Items per page in paginated lists. Validated to be nonzero.
    pub fn page_size(&self) -> usize {
        self.pagination.page_size
    }

    /// Idle window before a paginated view stops accepting navigation.
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.pagination.idle_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            discord_token: "put_token_here".to_string(),

            logging: LoggingConfig {
                console_debug: false,
                logs_enabled: true,
                log_dir: "logs".to_string(),
            },

            minecraft: MinecraftConfig {
                address: "mc.sloorjuice.com".to_string(),
                modlist_path: "modlist.html".to_string(),
                server_type: "fabric".to_string(),
                status_mods_shown: 10,
            },

            access: AccessConfig {
                role_id: None,
                channel: "#420".to_string(),
                button_label: "I am 420 friendly".to_string(),
            },

            pagination: PaginationConfig {
                page_size: 20,
                idle_timeout_secs: 60,
            },

            dev_utils: DevConfig {
                dev_guild: None,
                notifications: NotifyConfig {
                    enabled: false,
                    add_owners: true,
                    userids: vec![],
                },
            },
        }
    }
}

/// Configs for log output.
#[derive(Debug, Serialize, Deserialize)]
struct LoggingConfig {
    /// Print debug traces to console?
    console_debug: bool,
    /// Enable writing to log file?
    logs_enabled: bool,
    /// Directory to store log files
    log_dir: String,
}

/// Configs describing the Minecraft server this bot fronts.
#[derive(Debug, Serialize, Deserialize)]
struct MinecraftConfig {
    /// Server address, also used for status lookups.
    address: String,
    /// HTML file the mod list is read from at startup.
    modlist_path: String,
    /// Shown verbatim in the "Server Type" status field.
    server_type: String,
    /// Mods listed on the status embed before cutting off.
    status_mods_shown: usize,
}

/// Configs for the role-gated channel.
#[derive(Debug, Serialize, Deserialize)]
struct AccessConfig {
    /// Role granted when the button is clicked. Empty disables the gate.
    #[serde(serialize_with = "serialize_opt", deserialize_with = "deserialize_opt")]
    role_id: Option<RoleId>,
    /// Channel label used in the gate message, e.g. `#420`.
    channel: String,
    /// Label on the gate button.
    button_label: String,
}

/// Configs for paginated list views.
#[derive(Debug, Serialize, Deserialize)]
struct PaginationConfig {
    /// Items per page.
    page_size: usize,
    /// Seconds of inactivity before navigation buttons are retired.
    idle_timeout_secs: u64,
}

/// Optional configs to enable developer-specific behavior.
#[derive(Debug, Serialize, Deserialize)]
struct DevConfig {
    /// Optional guild to automatically update commands quickly.
    #[serde(serialize_with = "serialize_opt", deserialize_with = "deserialize_opt")]
    dev_guild: Option<GuildId>,
    /// See [NotifyConfig]
    notifications: NotifyConfig,
}

/// Configs for notification behavior when encountering unexpected errors.
#[derive(Debug, Serialize, Deserialize)]
struct NotifyConfig {
    /// Enable this behavior or not. (bot sends a private message)
    enabled: bool,
    /// Whether to automatically add owners to the notify list.
    add_owners: bool,
    /// Additional users to add to the notify list.
    userids: Vec<UserId>,
}

impl NotifyConfig {
    /// Construct a bug notification notify list based on the config.
    fn notify_list<U, E>(&self, fw: &Framework<U, E>) -> HashSet<UserId> {
        let mut notify_list = HashSet::new();

        // If disabled, don't add anyone to the list.
        if !self.enabled {
            return notify_list;
        }

        // Add bot owners if enabled
        if self.add_owners {
            let owners = &fw.options().owners;
            for userid in owners {
                notify_list.insert(*userid);
            }
        }

        // Add users in config
        for userid in &self.userids {
            notify_list.insert(*userid);
        }

        notify_list
    }
}

/// Write the given config to [CONFIG_PATH].
fn write_file(config: Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(&config).expect("config serialization can't fail");
    std::fs::write(CONFIG_PATH, content).map_err(ConfigError::IoError)
}

/// Snowflake ids are stored as strings in the config file so an unset
/// value can be the empty string instead of a magic number.
fn serialize_opt<T, S>(val: &Option<T>, ser: S) -> Result<S::Ok, S::Error>
where
    T: serde::Serialize,
    S: serde::Serializer,
{
    match val {
        Some(v) => v.serialize(ser),
        None => ser.serialize_str(""),
    }
}

fn deserialize_opt<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: From<u64>,
{
    deserializer.deserialize_str(OptIdVisitor(PhantomData))
}

struct OptIdVisitor<T>(PhantomData<T>);

impl<T: From<u64>> serde::de::Visitor<'_> for OptIdVisitor<T> {
    type Value = Option<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a snowflake id or an empty string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        match v {
            "" => Ok(None),
            _ => {
                let num: u64 = v.parse().map_err(|_| E::custom("not u64"))?;
                if num == 0 {
                    return Err(E::custom("snowflake ids are nonzero"));
                }
                Ok(Some(T::from(num)))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_config_roundtrips_through_toml() {
        let content = toml::to_string_pretty(&Config::default()).unwrap();
        let parsed: Config = toml::from_str(&content).unwrap();

        assert_eq!(parsed.page_size(), 20);
        assert_eq!(parsed.idle_timeout(), Duration::from_secs(60));
        assert_eq!(parsed.server_address(), "mc.sloorjuice.com");
        assert_eq!(parsed.status_mods_shown(), 10);
        assert!(parsed.access_role().is_none());
        assert!(parsed.dev_guild().is_none());
    }

    #[test]
    fn placeholder_token_fails_the_sanity_check() {
        let config = Config::default();
        assert!(config.token().is_err());
    }

    #[test]
    fn zero_page_size_fails_validation() {
        let mut config = Config::default();
        config.pagination.page_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn snowflake_fields_parse_from_strings() {
        let mut content = toml::to_string_pretty(&Config::default()).unwrap();
        content = content.replace("role_id = \"\"", "role_id = \"1427323738147524689\"");

        let parsed: Config = toml::from_str(&content).unwrap();
        assert_eq!(
            parsed.access_role(),
            Some(RoleId::new(1427323738147524689))
        );
    }
}

//! Error types for the bot.
//!
//! [UserError] covers everything a member can trigger through normal
//! (mis)use; those are answered with an ephemeral reply and logged at
//! debug. Everything else in [SloorError] is unexpected and handled by
//! [handle_framework_error](crate::log::handle_framework_error).

use std::time::Duration;

use thiserror::Error;

use crate::serenity;

/// Top-level error type for every command and event handler.
#[derive(Error, Debug)]
pub enum SloorError {
    #[error(transparent)]
    UserError(#[from] UserError),

    #[error(transparent)]
    ConfigError(#[from] ConfigError),

    #[error("Discord API error: {0}")]
    Serenity(#[from] serenity::Error),

    #[error("Status request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Could not decode status response: {reason}")]
    StatusDecode {
        /// Path and cause reported by the deserializer.
        reason: String,
    },

    #[error("Could not read mod list from '{path}': {source}")]
    ModList {
        path: String,
        source: std::io::Error,
    },

    #[error("Page size must be at least 1.")]
    InvalidPageSize,

    #[error("Command panicked: {payload:?}")]
    Panic { payload: Option<String> },

    #[error("A command check failed: {reason:?}")]
    CheckFailed { reason: Option<String> },

    #[error("Command structure mismatch: {description}")]
    CommandStructureMismatch { description: String },
}

/// Errors caused by a user and answered to that user.
#[derive(Error, Debug)]
pub enum UserError {
    #[error("This command only works in a server.")]
    GuildOnly,

    #[error("Only the bot owner can use this command.")]
    NotOwner,

    #[error("Slow down! Try again in {}s.", remaining_cooldown.as_secs())]
    OnCooldown { remaining_cooldown: Duration },

    #[error("You're missing permissions for that: {missing_permissions}")]
    MissingUserPermissions {
        missing_permissions: serenity::Permissions,
    },

    #[error("I'm missing permissions for that: {missing_permissions}")]
    MissingBotPermissions {
        missing_permissions: serenity::Permissions,
    },

    #[error("Could not parse arguments: {input:?}")]
    BadArgs { input: Option<String> },

    #[error("This command needs a subcommand: {subcmds}")]
    MissingSubcommand { subcmds: String },
}

/// Errors while reading or validating `config.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No config file found. {action_msg}")]
    MissingConfig {
        /// What was done about it, e.g. "Creating config.toml...".
        action_msg: String,
    },

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("Filesystem error: {0}")]
    IoError(#[from] std::io::Error),
}

//! Notification preference enums.
//!
//! This module defines the per-channel and user-wide notification scope
//! settings. Both are closed enums so that every consuming `match` stays
//! exhaustive when a new preference value is added.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing a preference from its string form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrefParseError {
    #[error("Unknown channel notification preference: {0}")]
    UnknownChannelPref(String),

    #[error("Unknown global notification preference: {0}")]
    UnknownGlobalPref(String),
}

/// Per-channel notification scope setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChannelNotificationPref {
    /// Suppress every notification from this channel.
    Nothing,
    /// Notify for every message in this channel.
    Everything,
    /// Notify for direct messages and direct mentions only.
    Mentions,
    /// No channel-level override; defer to the global preference.
    #[default]
    Default,
}

impl ChannelNotificationPref {
    /// Returns the database string representation.
    pub fn as_db_str(&self) -> &'static str {
        match self {
            ChannelNotificationPref::Nothing => "nothing",
            ChannelNotificationPref::Everything => "everything",
            ChannelNotificationPref::Mentions => "mentions",
            ChannelNotificationPref::Default => "default",
        }
    }

    /// Parses a channel preference from a database string.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "nothing" => Some(ChannelNotificationPref::Nothing),
            "everything" => Some(ChannelNotificationPref::Everything),
            "mentions" => Some(ChannelNotificationPref::Mentions),
            "default" => Some(ChannelNotificationPref::Default),
            _ => None,
        }
    }
}

impl std::fmt::Display for ChannelNotificationPref {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_db_str())
    }
}

impl FromStr for ChannelNotificationPref {
    type Err = PrefParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_db_str(s).ok_or_else(|| PrefParseError::UnknownChannelPref(s.to_string()))
    }
}

/// User-wide fallback notification scope, applied when the channel
/// preference is [`ChannelNotificationPref::Default`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GlobalNotificationPref {
    /// Notify for all activity.
    #[default]
    All,
    /// Notify for direct mentions only.
    Mentions,
    /// Notify for direct messages only.
    Dms,
    /// Notify when a message contains a configured highlight word.
    HighlightWords,
    /// Never notify.
    Never,
}

impl GlobalNotificationPref {
    /// Returns the database string representation.
    pub fn as_db_str(&self) -> &'static str {
        match self {
            GlobalNotificationPref::All => "all",
            GlobalNotificationPref::Mentions => "mentions",
            GlobalNotificationPref::Dms => "dms",
            GlobalNotificationPref::HighlightWords => "highlight_words",
            GlobalNotificationPref::Never => "never",
        }
    }

    /// Parses a global preference from a database string.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "all" => Some(GlobalNotificationPref::All),
            "mentions" => Some(GlobalNotificationPref::Mentions),
            "dms" => Some(GlobalNotificationPref::Dms),
            "highlight_words" => Some(GlobalNotificationPref::HighlightWords),
            "never" => Some(GlobalNotificationPref::Never),
            _ => None,
        }
    }
}

impl std::fmt::Display for GlobalNotificationPref {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_db_str())
    }
}

impl FromStr for GlobalNotificationPref {
    type Err = PrefParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_db_str(s).ok_or_else(|| PrefParseError::UnknownGlobalPref(s.to_string()))
    }
}

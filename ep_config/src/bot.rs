use std::path::PathBuf;

use ep_core::Id;
use serde::{Deserialize, Serialize};

use crate::shared::Config;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BotConfig {
    pub prefix: String,
    #[serde(rename = "logChannelID", skip_serializing_if = "Option::is_none")]
    pub log_channel_id: Option<ChannelSetting>,
    pub ledger_file: PathBuf,
    /// `None` disables the keep-alive web server
    pub keep_alive_port: Option<u16>,
    pub roles: RoleNames,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            prefix: "!".into(),
            log_channel_id: None,
            ledger_file: PathBuf::from("ep_data.json"),
            keep_alive_port: Some(3000),
            roles: RoleNames::default(),
        }
    }
}

impl Config for BotConfig {
    const KEY: &'static str = "config.json";
}

/// Role names gating each command. Matched by exact name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoleNames {
    pub event_permission: String,
    pub verified: String,
    pub ep_edit_permission: String,
}

impl Default for RoleNames {
    fn default() -> Self {
        Self {
            event_permission: "Event Permission".into(),
            verified: "Verified".into(),
            ep_edit_permission: "EP Edit Permission".into(),
        }
    }
}

/// Channel ids are often pasted as strings since they overflow JS numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChannelSetting {
    Number(u64),
    Text(String),
}

/// Where `log` summaries go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogChannel {
    /// Nothing configured, post where the command was used
    Origin,
    Channel(Id),
    /// Configured but not a usable id
    Invalid(String),
}

impl BotConfig {
    pub fn log_channel(&self) -> LogChannel {
        match &self.log_channel_id {
            None | Some(ChannelSetting::Number(0)) => LogChannel::Origin,
            Some(ChannelSetting::Number(id)) => LogChannel::Channel(Id(*id)),
            Some(ChannelSetting::Text(s)) if s.trim().is_empty() => LogChannel::Origin,
            Some(ChannelSetting::Text(s)) => match s.parse::<Id>() {
                Ok(id) => LogChannel::Channel(id),
                Err(_) => LogChannel::Invalid(s.clone()),
            },
        }
    }
}

pub struct ConfigKey;

impl serenity::prelude::TypeMapKey for ConfigKey {
    type Value = std::sync::Arc<BotConfig>;
}

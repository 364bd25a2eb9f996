#[macro_use]
extern crate log;
extern crate ep_core;
extern crate serde;
extern crate serde_json;
extern crate serenity;

pub mod bot;
pub mod shared;

pub use bot::{BotConfig, ChannelSetting, ConfigKey, LogChannel, RoleNames};
pub use shared::{load_config, load_config_or_default, Config, ConfigError};

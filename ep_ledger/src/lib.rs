#[macro_use]
extern crate log;
extern crate ep_config;
extern crate ep_core;
extern crate serde_json;
extern crate serenity;
extern crate tokio;

pub mod json;
pub mod memory;
pub mod module;
pub mod shared;

pub use json::JsonLedger;
pub use memory::MemoryLedger;
pub use shared::{shared, LedgerError, LedgerKey, LedgerStore, SharedLedger};

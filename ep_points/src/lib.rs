#[macro_use]
extern crate log;
extern crate chrono;
extern crate ep_config;
extern crate ep_core;
extern crate ep_ledger;
extern crate ep_permission;
extern crate serenity;

pub mod commands;
pub mod error;
pub mod event;
pub mod event_handler;
pub mod module;
pub mod parse;

pub use commands::{dispatch, Command};
pub use error::{CommandError, CommandResult};
pub use event::{Attendee, EventRecord, EventType};

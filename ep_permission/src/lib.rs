#[macro_use]
extern crate log;
extern crate ep_config;
extern crate ep_core;

pub mod shared;

pub use shared::{check_permission, has_role, Permission, PermissionError};

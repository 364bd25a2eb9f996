extern crate serenity;
extern crate thiserror;

pub mod chat;
pub mod event_handler;
pub mod shared;

pub use shared::Id;

/// What a crate plugs into the client at startup.
///
/// `ep_main` walks every declaration in order, so a module may read typemap
/// entries inserted by the modules declared before it.
pub struct ModuleDeclaration {
    pub module_name: &'static str,
    pub register_typemap:
        fn(
            &mut serenity::prelude::TypeMap,
        ) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()> + '_ + Send>>,
    pub register_event_handler:
        fn(
            &mut crate::event_handler::EventHandlerManager,
        ) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()> + '_ + Send>>,
    pub register_intent: fn(
        serenity::model::gateway::GatewayIntents,
    ) -> serenity::model::gateway::GatewayIntents,
}

/// How a failed command surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Answered to the author of the command
    Reply(String),
    /// Sent in the channel the command came from
    Message(String),
    /// Only logged
    Error(String),
    Both { msg: String, err: String },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Error::Reply(_) | Error::Message(_) => Ok(()),
            Error::Error(s) => write!(f, "{}", s),
            Error::Both { err, .. } => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// The text shown in the chat, if any.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Error::Reply(msg) | Error::Message(msg) | Error::Both { msg, .. } => Some(msg),
            Error::Error(_) => None,
        }
    }
}

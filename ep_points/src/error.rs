use ep_core::chat::TransportError;
use ep_ledger::LedgerError;
use ep_permission::PermissionError;

use crate::event::EventType;

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Permission(#[from] PermissionError),
    #[error("unknown event type `{0}`")]
    UnknownEventType(String),
    #[error("no attendee mentioned")]
    MissingAttendees,
    #[error("no mentioned user has an `N EP` annotation")]
    NoEpValues,
    #[error("expected exactly one mentioned user")]
    MissingQueryTarget,
    #[error("no user mentioned")]
    MissingEditTarget,
    #[error("invalid EP value `{0}`")]
    InvalidNumber(String),
    #[error("log channel `{0}` cannot be used")]
    ChannelResolution(String),
    #[error("failed to {action}: {source}")]
    Transport {
        action: &'static str,
        #[source]
        source: TransportError,
    },
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl CommandError {
    /// `map_err` helper for transport calls.
    pub fn transport(action: &'static str) -> impl FnOnce(TransportError) -> Self {
        move |source| CommandError::Transport { action, source }
    }
}

impl From<CommandError> for ep_core::Error {
    fn from(e: CommandError) -> Self {
        use ep_core::Error;
        match e {
            CommandError::Permission(PermissionError::MissingRole(role)) => Error::Reply(format!(
                "❌ You need the **{}** role to use this command.",
                role
            )),
            CommandError::Permission(err) => Error::Both {
                msg: "❌ An unexpected error occurred while checking your roles.".into(),
                err: err.to_string(),
            },
            CommandError::UnknownEventType(given) => Error::Message(format!(
                "Invalid event: **{}**. Valid events: ```{}```",
                given,
                EventType::valid_names()
            )),
            CommandError::MissingAttendees => Error::Message(
                "Please mention at least one attendee with their EP (e.g., @player 3 EP).".into(),
            ),
            CommandError::NoEpValues => Error::Message(
                "Could not find EP values for any mentioned user. The format must be: `@user # EP`"
                    .into(),
            ),
            CommandError::MissingQueryTarget => {
                Error::Message("Please mention exactly one user to check their EP.".into())
            }
            CommandError::MissingEditTarget => Error::Message(
                "Please mention the user whose EP you want to set (e.g., @player 10).".into(),
            ),
            CommandError::InvalidNumber(_) => Error::Message(
                "❌ Invalid number. Please provide a numeric EP value after the mention.".into(),
            ),
            CommandError::ChannelResolution(_) => Error::Message(
                "❌ Error: The configured log channel ID is invalid or I lack permissions to send messages there."
                    .into(),
            ),
            CommandError::Transport { action, source } => Error::Both {
                msg: format!("❌ An unexpected error occurred while trying to {}.", action),
                err: format!("failed to {}: {}", action, source),
            },
            CommandError::Ledger(LedgerError::NonFinite { user }) => Error::Message(format!(
                "❌ That would put <@{}> over the largest EP total I can store.",
                user
            )),
            CommandError::Ledger(err) => Error::Both {
                msg: "❌ The EP change could not be saved.".into(),
                err: err.to_string(),
            },
        }
    }
}

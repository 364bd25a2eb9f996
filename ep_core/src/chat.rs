//! The slice of the chat platform the commands need.
//!
//! One [`ChatContext`] wraps one inbound message. The serenity backed
//! implementation lives next to the event handler in `ep_points`.

use crate::Id;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl From<serenity::Error> for TransportError {
    fn from(e: serenity::Error) -> Self {
        Self(e.to_string())
    }
}

/// A channel that could be looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelInfo {
    pub id: Id,
    /// Text based and the bot may post in it
    pub sendable: bool,
}

impl ChannelInfo {
    pub fn sendable(id: Id) -> Self {
        Self { id, sendable: true }
    }
}

#[serenity::async_trait]
pub trait ChatContext: Send + Sync {
    fn author(&self) -> Id;

    /// Raw message body, mentions included in their `<@id>` form.
    fn content(&self) -> &str;

    fn origin_channel(&self) -> Id;

    fn mentioned_users(&self) -> Vec<Id>;

    /// Names of the roles the author holds in the guild.
    async fn sender_roles(&self) -> Result<Vec<String>, TransportError>;

    /// `Ok(None)` when the channel does not exist.
    async fn fetch_channel(&self, id: Id) -> Result<Option<ChannelInfo>, TransportError>;

    async fn send_message(&self, channel: Id, content: &str) -> Result<(), TransportError>;

    async fn reply(&self, content: &str) -> Result<(), TransportError>;
}

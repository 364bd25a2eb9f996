#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use ep_core::chat::{ChannelInfo, ChatContext, TransportError};
use ep_core::Id;
use ep_ledger::{LedgerStore, MemoryLedger, SharedLedger};

pub const AUTHOR: Id = Id(100);
pub const ORIGIN: Id = Id(200);
pub const LOG_CHANNEL: Id = Id(300);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Message { channel: Id, content: String },
    Reply(String),
}

/// Chat double recording everything the bot says.
pub struct FakeChat {
    pub content: String,
    pub roles: Result<Vec<String>, TransportError>,
    pub channels: HashMap<Id, ChannelInfo>,
    pub fail_sends: bool,
    pub fail_fetch: bool,
    pub sent: Mutex<Vec<Sent>>,
}

impl FakeChat {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_owned(),
            roles: Ok(Vec::new()),
            channels: HashMap::from([
                (ORIGIN, ChannelInfo::sendable(ORIGIN)),
                (LOG_CHANNEL, ChannelInfo::sendable(LOG_CHANNEL)),
            ]),
            fail_sends: false,
            fail_fetch: false,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn with_roles(mut self, roles: &[&str]) -> Self {
        self.roles = Ok(roles.iter().map(|r| r.to_string()).collect());
        self
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn messages_in(&self, channel: Id) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Message { channel: c, content } if c == channel => Some(content),
                _ => None,
            })
            .collect()
    }

    pub fn replies(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Reply(content) => Some(content),
                _ => None,
            })
            .collect()
    }
}

#[serenity::async_trait]
impl ChatContext for FakeChat {
    fn author(&self) -> Id {
        AUTHOR
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn origin_channel(&self) -> Id {
        ORIGIN
    }

    /// Distinct users in order of first appearance, like the gateway does.
    fn mentioned_users(&self) -> Vec<Id> {
        let mut users = Vec::new();
        for (at, _) in self.content.match_indices("<@") {
            let rest = &self.content[at..];
            let Some(end) = rest.find('>') else { continue };
            if let Some(id) = ep_points::parse::parse_mention(&rest[..=end]) {
                if !users.contains(&id) {
                    users.push(id);
                }
            }
        }
        users
    }

    async fn sender_roles(&self) -> Result<Vec<String>, TransportError> {
        self.roles.clone()
    }

    async fn fetch_channel(&self, id: Id) -> Result<Option<ChannelInfo>, TransportError> {
        if self.fail_fetch {
            return Err(TransportError("connection reset".into()));
        }
        Ok(self.channels.get(&id).copied())
    }

    async fn send_message(&self, channel: Id, content: &str) -> Result<(), TransportError> {
        if self.fail_sends {
            return Err(TransportError("missing access".into()));
        }
        self.sent.lock().unwrap().push(Sent::Message {
            channel,
            content: content.to_owned(),
        });
        Ok(())
    }

    async fn reply(&self, content: &str) -> Result<(), TransportError> {
        self.sent.lock().unwrap().push(Sent::Reply(content.to_owned()));
        Ok(())
    }
}

pub fn empty_ledger() -> SharedLedger {
    ep_ledger::shared(MemoryLedger::new())
}

pub fn ledger_with(entries: &[(&str, f64)]) -> SharedLedger {
    ep_ledger::shared(MemoryLedger::with_entries(entries.iter().copied()))
}

pub async fn points(ledger: &SharedLedger, user: u64) -> Option<f64> {
    ledger.read().await.entries().get(&user.to_string()).copied()
}

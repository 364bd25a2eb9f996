use ep_core::chat::{ChannelInfo, ChatContext, TransportError};
use ep_core::Id;
use serenity::{
    client::Context,
    model::{
        channel::{Channel, ChannelType, Message},
        id::ChannelId,
    },
};

pub struct PointEventHandler;

#[serenity::async_trait]
impl serenity::client::EventHandler for PointEventHandler {
    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot || msg.guild_id.is_none() {
            return;
        }
        let (config, ledger) = {
            let lock = ctx.data.read().await;
            (
                lock.get::<ep_config::ConfigKey>().cloned(),
                lock.get::<ep_ledger::LedgerKey>().cloned(),
            )
        };
        let (Some(config), Some(ledger)) = (config, ledger) else {
            error!("Typemap not initialized");
            return;
        };
        let chat = SerenityChat::new(&ctx, &msg);
        crate::commands::dispatch(&chat, &ledger, &config).await;
    }
}

/// [`ChatContext`] over a gateway message.
pub struct SerenityChat<'a> {
    ctx: &'a Context,
    msg: &'a Message,
}

impl<'a> SerenityChat<'a> {
    pub fn new(ctx: &'a Context, msg: &'a Message) -> Self {
        Self { ctx, msg }
    }

    fn channel_id(id: Id) -> Option<ChannelId> {
        (id.0 != 0).then(|| ChannelId::new(id.0))
    }
}

#[serenity::async_trait]
impl ChatContext for SerenityChat<'_> {
    fn author(&self) -> Id {
        self.msg.author.id.into()
    }

    fn content(&self) -> &str {
        &self.msg.content
    }

    fn origin_channel(&self) -> Id {
        self.msg.channel_id.into()
    }

    fn mentioned_users(&self) -> Vec<Id> {
        self.msg.mentions.iter().map(|u| u.id.into()).collect()
    }

    async fn sender_roles(&self) -> Result<Vec<String>, TransportError> {
        let Some(guild_id) = self.msg.guild_id else {
            return Ok(Vec::new());
        };
        let role_ids = match &self.msg.member {
            Some(member) => member.roles.clone(),
            None => guild_id.member(self.ctx, self.msg.author.id).await?.roles,
        };

        let cached: Option<Vec<String>> = self.ctx.cache.guild(guild_id).map(|guild| {
            role_ids
                .iter()
                .filter_map(|id| guild.roles.get(id))
                .map(|role| role.name.clone())
                .collect()
        });
        if let Some(names) = cached {
            return Ok(names);
        }

        let roles = guild_id.roles(&self.ctx.http).await?;
        Ok(role_ids
            .iter()
            .filter_map(|id| roles.get(id))
            .map(|role| role.name.clone())
            .collect())
    }

    async fn fetch_channel(&self, id: Id) -> Result<Option<ChannelInfo>, TransportError> {
        let Some(channel_id) = Self::channel_id(id) else {
            return Ok(None);
        };
        let channel = channel_id.to_channel(self.ctx).await?;
        let sendable = match channel {
            Channel::Guild(channel) => {
                let text_based = matches!(
                    channel.kind,
                    ChannelType::Text
                        | ChannelType::News
                        | ChannelType::Voice
                        | ChannelType::PublicThread
                        | ChannelType::PrivateThread
                        | ChannelType::NewsThread
                );
                let bot_id = self.ctx.cache.current_user().id;
                // Without the guild in cache the send itself will tell.
                let allowed = channel
                    .permissions_for_user(&self.ctx.cache, bot_id)
                    .map(|p| p.send_messages())
                    .unwrap_or(true);
                text_based && allowed
            }
            Channel::Private(_) => true,
            _ => false,
        };
        Ok(Some(ChannelInfo { id, sendable }))
    }

    async fn send_message(&self, channel: Id, content: &str) -> Result<(), TransportError> {
        let Some(channel_id) = Self::channel_id(channel) else {
            return Err(TransportError(format!("invalid channel id {}", channel)));
        };
        channel_id.say(&self.ctx.http, content).await?;
        Ok(())
    }

    async fn reply(&self, content: &str) -> Result<(), TransportError> {
        self.msg.reply(self.ctx, content).await?;
        Ok(())
    }
}

use serenity::{
    client::{Context, EventHandler},
    model::{channel::Message, gateway::Ready},
};

/// Forwards every event to each registered handler, in registration order.
///
/// Only the events the bot subscribes to are forwarded.
#[derive(Default)]
pub struct EventHandlerManager {
    inners: Vec<Box<dyn EventHandler>>,
}

impl EventHandlerManager {
    pub fn new() -> Self {
        Self { inners: Vec::new() }
    }

    pub fn push(&mut self, handler: impl EventHandler + 'static) {
        self.inners.push(Box::new(handler));
    }

    pub fn len(&self) -> usize {
        self.inners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inners.is_empty()
    }
}

#[serenity::async_trait]
impl EventHandler for EventHandlerManager {
    async fn ready(&self, ctx: Context, bot: Ready) {
        for handler in &self.inners {
            handler.ready(ctx.clone(), bot.clone()).await;
        }
    }

    async fn message(&self, ctx: Context, new_message: Message) {
        for handler in &self.inners {
            handler.message(ctx.clone(), new_message.clone()).await;
        }
    }
}

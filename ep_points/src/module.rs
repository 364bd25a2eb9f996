pub static MODULE_DECLARATION: ep_core::ModuleDeclaration = ep_core::ModuleDeclaration {
    module_name: "Points",
    register_typemap: |t| Box::pin(register_typemap(t)),
    register_event_handler: |e| Box::pin(register_event_handler(e)),
    register_intent,
};

async fn register_typemap(_: &mut serenity::prelude::TypeMap) {}

async fn register_event_handler(eh: &mut ep_core::event_handler::EventHandlerManager) {
    eh.push(crate::event_handler::PointEventHandler);
}

fn register_intent(
    intent: serenity::model::gateway::GatewayIntents,
) -> serenity::model::gateway::GatewayIntents {
    use serenity::model::gateway::GatewayIntents as I;
    intent | I::GUILDS | I::GUILD_MESSAGES | I::MESSAGE_CONTENT
}

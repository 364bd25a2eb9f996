pub static MODULE_DECLARATION: ep_core::ModuleDeclaration = ep_core::ModuleDeclaration {
    module_name: "Ledger",
    register_typemap: |t| Box::pin(register_typemap(t)),
    register_event_handler: |e| Box::pin(register_event_handler(e)),
    register_intent,
};

async fn register_typemap(tm: &mut serenity::prelude::TypeMap) {
    let path = match tm.get::<ep_config::ConfigKey>() {
        Some(config) => config.ledger_file.clone(),
        None => {
            warn!("Config not in typemap, using the default ledger file");
            ep_config::BotConfig::default().ledger_file
        }
    };
    let ledger = crate::json::JsonLedger::load(path);
    info!(
        "Loaded {} ledger entries from `{}`",
        crate::shared::LedgerStore::entries(&ledger).len(),
        ledger.path().display()
    );
    tm.insert::<crate::shared::LedgerKey>(crate::shared::shared(ledger));
}

async fn register_event_handler(_: &mut ep_core::event_handler::EventHandlerManager) {}

fn register_intent(
    intent: serenity::model::gateway::GatewayIntents,
) -> serenity::model::gateway::GatewayIntents {
    intent
}

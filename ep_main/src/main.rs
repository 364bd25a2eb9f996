use serenity::client::EventHandler;

extern crate ep_config;
extern crate ep_core;
extern crate ep_ledger;
extern crate ep_points;
extern crate ep_webserver;

extern crate serenity;
#[macro_use]
extern crate log;
extern crate chrono;
extern crate dotenv;
extern crate fern;
extern crate tokio;

/// Loaded in order, later modules may read what earlier ones inserted.
const MODULES: &[&ep_core::ModuleDeclaration] = &[
    &ep_ledger::module::MODULE_DECLARATION,
    &ep_points::module::MODULE_DECLARATION,
];

const TOKEN_VAR: &str = "DISCORD_TOKEN";

struct EpEventHandler;

#[serenity::async_trait]
impl EventHandler for EpEventHandler {
    async fn ready(&self, ctx: serenity::client::Context, data_about_bot: serenity::model::gateway::Ready) {
        info!("Logged in as {}!", data_about_bot.user.name);
        ctx.set_activity(Some(serenity::gateway::ActivityData::playing(
            "Logging events",
        )));
    }
}

fn logger_setup() -> Result<(), Box<dyn std::error::Error>> {
    let colors = fern::colors::ColoredLevelConfig::new()
        .error(fern::colors::Color::Red)
        .warn(fern::colors::Color::Yellow)
        .info(fern::colors::Color::Blue)
        .debug(fern::colors::Color::Magenta)
        .trace(fern::colors::Color::BrightWhite);

    Ok(fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[\x1b[1;37m%H:%M:%S\x1b[0m]"),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .level_for("serenity", log::LevelFilter::Warn)
        .level_for("tracing", log::LevelFilter::Warn)
        .level_for("rustls", log::LevelFilter::Warn)
        .level_for("hyper", log::LevelFilter::Warn)
        .level_for("h2", log::LevelFilter::Warn)
        .level_for("reqwest", log::LevelFilter::Warn)
        .level_for("tungstenite", log::LevelFilter::Warn)
        .level_for("rocket", log::LevelFilter::Warn)
        .chain(std::io::stdout())
        .apply()?)
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    if let Err(e) = logger_setup() {
        eprintln!("Error when setting up logger: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = bot_launch().await {
        error!("Error when launching bot: {}", e);
        std::process::exit(1);
    }
}

async fn bot_launch() -> Result<(), Box<dyn std::error::Error>> {
    let config: ep_config::BotConfig =
        ep_config::load_config_or_default(std::path::Path::new("."))?;
    let token = std::env::var(TOKEN_VAR).map_err(|_| {
        format!(
            "Please use `{}` environement variable(or .env) with your bot's TOKEN",
            TOKEN_VAR
        )
    })?;
    let keep_alive = config.keep_alive_port;

    let mut type_map = serenity::prelude::TypeMap::new();
    type_map.insert::<ep_config::ConfigKey>(std::sync::Arc::new(config));

    let mut event_handler = ep_core::event_handler::EventHandlerManager::new();
    event_handler.push(EpEventHandler);

    let mut intents = serenity::model::gateway::GatewayIntents::empty();
    for module in MODULES {
        debug!("Registering module `{}`", module.module_name);
        (module.register_typemap)(&mut type_map).await;
        (module.register_event_handler)(&mut event_handler).await;
        intents = (module.register_intent)(intents);
    }

    let mut client = serenity::Client::builder(token, intents)
        .event_handler(event_handler)
        .type_map(type_map)
        .await?;

    if let Some(port) = keep_alive {
        tokio::spawn(ep_webserver::run_keep_alive(port));
    }

    info!("Starting Client");
    client.start().await?;
    Ok(())
}

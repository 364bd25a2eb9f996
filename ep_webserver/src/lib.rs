//! Keep-alive endpoint for hosts that idle processes without HTTP traffic.

#[macro_use]
extern crate log;
extern crate rocket;

use rocket::{get, routes, Build, Rocket};

pub const RUNNING: &str = "Bot is Running!";

#[get("/")]
fn index() -> &'static str {
    RUNNING
}

pub fn build(port: u16) -> Rocket<Build> {
    let config = rocket::Config {
        port,
        address: std::net::Ipv4Addr::UNSPECIFIED.into(),
        log_level: rocket::config::LogLevel::Critical,
        shutdown: rocket::config::Shutdown {
            ctrlc: false,
            ..Default::default()
        },
        ..rocket::Config::default()
    };
    rocket::custom(config).mount("/", routes![index])
}

/// Serve until the process exits.
pub async fn run_keep_alive(port: u16) {
    info!("Keep-alive server listening on port {}", port);
    if let Err(e) = build(port).launch().await {
        error!("Keep-alive server stopped: {}", e);
    }
}

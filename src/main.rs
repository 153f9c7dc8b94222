use dotenvy::dotenv;
mod application;
mod domain;
mod infrastructure;
mod utils;
use crate::infrastructure::discord_bot::run_bot;
use crate::infrastructure::health::spawn_health_server;
use crate::infrastructure::settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    utils::setup_logging();

    // anyhow reports a returned error on stderr; no extra log line here
    let settings = Settings::from_env()?;

    let health = spawn_health_server(settings.http_port).await?;

    let result = run_bot(settings).await;
    health.abort();
    result
}

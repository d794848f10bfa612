extern crate alloc;

use serenity::prelude::{Client, GatewayIntents};
use anyhow::Context;

use std::sync::Arc;

use utility::*;
use databases::*;
use handler::Handler;

mod handler;
mod utility;
mod databases;
mod commands;


#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        Logger::err_long("Shutting down", &format!("{:#}", err));
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {

    // setup
    let settings = Settings::from_env()?;
    let database = Database::open(settings.database_path())
        .with_context(|| format!("failed to open database {}", settings.database_path()))?;
    Logger::info_long("Connected to database", settings.database_path());
    let store: Arc<dyn PrebanStore> = Arc::new(PrebansDB::new(database));
    let handler = Handler::new(settings.clone(), store);

    // start client
    let intents = GatewayIntents::GUILDS                    |
                  GatewayIntents::GUILD_MEMBERS             |
                  GatewayIntents::GUILD_MODERATION          |
                  GatewayIntents::GUILD_MESSAGES            |
                  GatewayIntents::DIRECT_MESSAGES           |
                  GatewayIntents::MESSAGE_CONTENT;
    let mut client = Client::builder(&settings.token, intents)
        .event_handler(handler)
        .await
        .context("failed to create client")?;
    client.start().await.context("client stopped")?;
    Ok(())
}

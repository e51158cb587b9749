use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use twilight_gateway::{EventTypeFlags, Intents, Shard, ShardId, StreamExt as _};
use twilight_http::Client;
use twilight_model::gateway::event::Event;

use rustls::crypto::ring::default_provider;
use sqlx::postgres::PgPoolOptions;

use sb_api::SponsorBlockClient;
use sb_commands::{commands, handle_interaction};
use sb_core::{Config, Context};
use sb_database::Database;
use sb_utils::audit::{AuditLog, ChannelAuditLog, TracingAuditLog};
use sb_utils::permissions::VipRoles;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    let config = Config::from_env()?;

    // Create a single shared HTTP Client
    let http = Arc::new(Client::new(config.discord_token.clone()));

    let db_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;
    let db = Database::new(db_pool);
    db.migrate().await?;
    info!("PostgreSQL connection established.");

    let audit: Arc<dyn AuditLog> = match config.audit_channel_id {
        Some(channel_id) => Arc::new(ChannelAuditLog::new(Arc::clone(&http), channel_id)),
        None => {
            info!("AUDIT_CHANNEL_ID not set, audit records go to the log");
            Arc::new(TracingAuditLog)
        }
    };

    let ctx = Context::new(
        Arc::clone(&http),
        Arc::new(SponsorBlockClient::with_base_url(
            &config.vip_user_id,
            &config.api_url,
        )),
        Arc::new(db),
        audit,
        VipRoles::new(config.vip_roles.iter().copied()),
    );

    // Interactions arrive regardless of intents
    let intents = Intents::GUILDS;
    let mut shard = Shard::new(ShardId::new(0, 1), config.discord_token, intents);

    info!("sb-bot is connecting...");

    while let Some(item) = shard.next_event(EventTypeFlags::all()).await {
        let event = match item {
            Ok(event) => event,
            Err(source) => {
                error!(?source, "gateway event stream error");
                continue;
            }
        };

        match event {
            Event::Ready(ready) => {
                info!(user = %ready.user.name, "sb-bot is ready");
                let definitions = commands()?;
                if let Err(source) = http
                    .interaction(ready.application.id)
                    .set_global_commands(&definitions)
                    .await
                {
                    error!(?source, "failed to register application commands");
                }
            }
            Event::InteractionCreate(interaction) => {
                let ctx = ctx.clone();
                tokio::spawn(async move {
                    if let Err(source) = handle_interaction(ctx, interaction).await {
                        error!(?source, "interaction handling failed");
                    }
                });
            }
            _ => {} // Ignore unused events
        }
    }

    Ok(()) // Return Success, shutdown cleanly
}

use async_trait::async_trait;
use twilight_model::id::{Id, marker::UserMarker};

use crate::Database;

/// Mapping between Discord users and their public moderation-system IDs.
#[async_trait]
pub trait IdStore: Send + Sync {
    /// Discord user linked to a public ID.
    async fn resolve_actor_id(&self, public_id: &str) -> anyhow::Result<Option<Id<UserMarker>>>;

    /// Public ID linked to a Discord user.
    async fn resolve_public_id(&self, actor_id: Id<UserMarker>) -> anyhow::Result<Option<String>>;
}

#[async_trait]
impl IdStore for Database {
    async fn resolve_actor_id(&self, public_id: &str) -> anyhow::Result<Option<Id<UserMarker>>> {
        let discord_id: Option<i64> = sqlx::query_scalar(
            "SELECT discord_id FROM sbid_map WHERE public_id = $1 ORDER BY discord_id LIMIT 1",
        )
        .bind(public_id)
        .fetch_optional(self.pool())
        .await?;

        Ok(discord_id
            .and_then(|raw| u64::try_from(raw).ok())
            .and_then(Id::new_checked))
    }

    async fn resolve_public_id(&self, actor_id: Id<UserMarker>) -> anyhow::Result<Option<String>> {
        let discord_id = i64::try_from(actor_id.get())?;
        let public_id = sqlx::query_scalar("SELECT public_id FROM sbid_map WHERE discord_id = $1")
            .bind(discord_id)
            .fetch_optional(self.pool())
            .await?;

        Ok(public_id)
    }
}

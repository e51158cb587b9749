//! Audit trail for mutating VIP actions.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use twilight_http::Client;
use twilight_model::{
    channel::message::AllowedMentions,
    id::{Id, marker::ChannelMarker},
};

use crate::interaction::Invoker;

/// Destination for audit records.
#[async_trait]
pub trait AuditLog: Send + Sync {
    /// Record that `actor` ran `action` against `target`.
    async fn record(&self, actor: &Invoker, action: &str, target: &str) -> anyhow::Result<()>;
}

/// Render an audit record as a single channel line.
pub fn audit_line(actor: &Invoker, action: &str, target: &str) -> String {
    format!(
        "**{action}** by {} ({}) on `{}`",
        actor.mention(),
        actor.name.replace('@', "@\u{200B}"),
        target.replace('`', "'")
    )
}

/// Posts audit records to a Discord channel.
pub struct ChannelAuditLog {
    http: Arc<Client>,
    channel_id: Id<ChannelMarker>,
}

impl ChannelAuditLog {
    pub fn new(http: Arc<Client>, channel_id: Id<ChannelMarker>) -> Self {
        Self { http, channel_id }
    }
}

#[async_trait]
impl AuditLog for ChannelAuditLog {
    async fn record(&self, actor: &Invoker, action: &str, target: &str) -> anyhow::Result<()> {
        let line = audit_line(actor, action, target);
        let no_pings = AllowedMentions::default();

        self.http
            .create_message(self.channel_id)
            .content(&line)
            .allowed_mentions(Some(&no_pings))
            .await?;

        Ok(())
    }
}

/// Writes audit records to the tracing log.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingAuditLog;

#[async_trait]
impl AuditLog for TracingAuditLog {
    async fn record(&self, actor: &Invoker, action: &str, target: &str) -> anyhow::Result<()> {
        info!(
            actor_id = actor.id.get(),
            actor_name = %actor.name,
            action,
            target,
            "vip action"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor() -> Invoker {
        Invoker {
            id: Id::new(1234),
            name: "@everyone".to_owned(),
            roles: vec![],
        }
    }

    #[test]
    fn audit_line_names_actor_action_and_target() {
        let line = audit_line(&actor(), "purge", "dQw4w9WgXcQ");
        assert_eq!(
            line,
            "**purge** by <@1234> (@\u{200B}everyone) on `dQw4w9WgXcQ`"
        );
    }

    #[test]
    fn audit_line_keeps_target_inside_code_span() {
        let line = audit_line(&actor(), "unwarn", "a`b");
        assert!(line.ends_with("on `a'b`"));
    }

    #[tokio::test]
    async fn tracing_audit_log_never_fails() {
        let log = TracingAuditLog;
        assert!(log.record(&actor(), "downvote", "uuid").await.is_ok());
    }
}

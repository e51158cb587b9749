//! `/vip` moderation commands.
//!
//! Every invocation is gated on the VIP role set before anything else runs.
//! Mutating actions write an audit record before the upstream call is made.

pub mod lock;
pub mod options;
pub mod schema;

use std::future::Future;

use tracing::{error, info, warn};
use twilight_model::{
    application::interaction::application_command::CommandDataOption,
    http::interaction::InteractionResponse,
};

use sb_api::{ApiError, ApiResponse, Vote, format_result};
use sb_core::Context;
use sb_utils::interaction::Invoker;
use sb_utils::response::{
    INVALID_LOCK_REASON, INVALID_OPTIONS, INVALID_VIDEO_ID, NO_STORED_ID, NOT_FOUND, NOT_VIP,
    ephemeral_embeds, ephemeral_message, ephemeral_silent_message, public_message,
};

use self::lock::{lock_category_components, lock_embed, resolve_lock_video_id};
pub use self::options::{OptionsError, SubCommand, VipCommand};

/// A collaborator call failed.
///
/// Carries no detail; the cause is logged where it happens.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("api error")]
pub struct UpstreamError;

/// What a sub-command produced before response composition.
enum Outcome {
    /// Upstream result to summarize in a channel-visible message.
    Generic(ApiResponse),
    /// Fully composed response.
    Reply(InteractionResponse),
}

/// Run a `vip` invocation and compose its response.
///
/// Authorization and validation failures become ephemeral responses.
/// Collaborator failures surface as [`UpstreamError`] for the caller to report.
pub async fn run(
    ctx: &Context,
    invoker: Option<&Invoker>,
    options: &[CommandDataOption],
) -> Result<InteractionResponse, UpstreamError> {
    let Some(actor) = invoker.filter(|member| ctx.vip_roles.authorize(Some(*member))) else {
        info!(
            invoker_id = invoker.map(|invoker| invoker.id.get()),
            "vip command denied"
        );
        return Ok(ephemeral_message(NOT_VIP));
    };

    let command = match VipCommand::parse(options) {
        Ok(command) => command,
        Err(source) => {
            warn!(?source, "unparseable vip command");
            return Ok(ephemeral_message(INVALID_OPTIONS));
        }
    };

    let sub_command = command.sub_command();
    match execute(ctx, actor, command).await? {
        Outcome::Generic(result) => Ok(public_message(format!(
            "{} {}",
            sub_command.name(),
            format_result(&result)
        ))),
        Outcome::Reply(response) => Ok(response),
    }
}

async fn execute(
    ctx: &Context,
    actor: &Invoker,
    command: VipCommand,
) -> Result<Outcome, UpstreamError> {
    let api = ctx.api.as_ref();

    let outcome = match command {
        VipCommand::Category { uuid, category } => {
            let uuid = uuid.unwrap_or_default();
            let category = category.unwrap_or_default();
            let result = upstream("category", api.change_category(&uuid, &category)).await?;
            Outcome::Generic(result)
        }
        VipCommand::Cache { video_id } => {
            let video_id = video_id.unwrap_or_default();
            Outcome::Generic(upstream("cache", api.clear_cache(&video_id)).await?)
        }
        VipCommand::Purge { video_id } => {
            let video_id = video_id.unwrap_or_default();
            audit(ctx, actor, SubCommand::Purge, &video_id).await?;
            Outcome::Generic(upstream("purge", api.purge_segments(&video_id)).await?)
        }
        VipCommand::Downvote { uuid } => {
            let uuid = uuid.unwrap_or_default();
            audit(ctx, actor, SubCommand::Downvote, &uuid).await?;
            let result = upstream("downvote", api.vote_on_segment(&uuid, Vote::Downvote)).await?;
            Outcome::Generic(result)
        }
        VipCommand::Undovote { uuid } => {
            let uuid = uuid.unwrap_or_default();
            audit(ctx, actor, SubCommand::Undovote, &uuid).await?;
            let result = upstream("undovote", api.vote_on_segment(&uuid, Vote::Undo)).await?;
            Outcome::Generic(result)
        }
        VipCommand::AddVip { user, video_id } => {
            let public_id = ctx.ids.resolve_public_id(user).await.map_err(|source| {
                error!(?source, user_id = user.get(), "public id lookup failed");
                UpstreamError
            })?;
            let Some(public_id) = public_id else {
                return Ok(Outcome::Reply(ephemeral_message(NO_STORED_ID)));
            };

            audit(ctx, actor, SubCommand::AddVip, &public_id).await?;
            let result = upstream("addvip", api.add_temp_vip(&public_id, &video_id)).await?;
            Outcome::Generic(result)
        }
        VipCommand::Lookup { public_id } => {
            let actor_id = ctx.ids.resolve_actor_id(&public_id).await.map_err(|source| {
                error!(?source, "actor id lookup failed");
                UpstreamError
            })?;
            let content = match actor_id {
                Some(actor_id) => format!("<@{}>", actor_id.get()),
                None => NOT_FOUND.to_owned(),
            };
            Outcome::Reply(ephemeral_silent_message(content))
        }
        VipCommand::Unwarn { public_id } => {
            audit(ctx, actor, SubCommand::Unwarn, &public_id).await?;
            Outcome::Generic(upstream("unwarn", api.delete_warning(&public_id)).await?)
        }
        VipCommand::Lock { video_id, reason } => {
            let Some(video_id) = resolve_lock_video_id(video_id.as_deref()) else {
                return Ok(Outcome::Reply(ephemeral_message(INVALID_VIDEO_ID)));
            };
            let embed = match lock_embed(&video_id, reason.as_deref()) {
                Ok(embed) => embed,
                Err(source) => {
                    warn!(?source, "lock embed rejected");
                    return Ok(Outcome::Reply(ephemeral_message(INVALID_LOCK_REASON)));
                }
            };
            Outcome::Reply(ephemeral_embeds(vec![embed], lock_category_components()))
        }
        VipCommand::BanStatus { public_id } => {
            let status = upstream("banstatus", api.ban_status(&public_id)).await?;
            let content = if status.banned {
                "🔨 Banned"
            } else {
                "Not Banned"
            };
            Outcome::Reply(ephemeral_message(content))
        }
    };

    Ok(outcome)
}

/// Write the audit record for a mutating action.
async fn audit(
    ctx: &Context,
    actor: &Invoker,
    sub_command: SubCommand,
    target: &str,
) -> Result<(), UpstreamError> {
    ctx.audit
        .record(actor, sub_command.name(), target)
        .await
        .map_err(|source| {
            error!(?source, action = sub_command.name(), "audit log write failed");
            UpstreamError
        })
}

/// Await an upstream call, logging and erasing any failure.
async fn upstream<T>(
    action: &'static str,
    call: impl Future<Output = Result<T, ApiError>>,
) -> Result<T, UpstreamError> {
    call.await.map_err(|source| {
        error!(?source, action, "upstream call failed");
        UpstreamError
    })
}

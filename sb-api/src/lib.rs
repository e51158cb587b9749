//! Upstream moderation API collaborator.

mod client;
mod format;

use async_trait::async_trait;
use serde::Deserialize;

pub use client::{DEFAULT_API_URL, SponsorBlockClient};
pub use format::format_result;

/// Raw result of a successful upstream call.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

/// Ban state of a public user ID.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
pub struct BanStatus {
    pub banned: bool,
}

/// Vote value sent for a segment.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Vote {
    Downvote,
    Undo,
}

impl Vote {
    /// Numeric vote type understood by the upstream API.
    pub fn value(self) -> u8 {
        match self {
            Self::Downvote => 0,
            Self::Undo => 20,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("undecodable response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Privileged operations against the moderation backend.
#[async_trait]
pub trait ModerationApi: Send + Sync {
    async fn change_category(&self, uuid: &str, category: &str)
    -> Result<ApiResponse, ApiError>;

    async fn clear_cache(&self, video_id: &str) -> Result<ApiResponse, ApiError>;

    async fn purge_segments(&self, video_id: &str) -> Result<ApiResponse, ApiError>;

    async fn vote_on_segment(&self, uuid: &str, vote: Vote) -> Result<ApiResponse, ApiError>;

    async fn add_temp_vip(&self, public_id: &str, video_id: &str)
    -> Result<ApiResponse, ApiError>;

    async fn delete_warning(&self, public_id: &str) -> Result<ApiResponse, ApiError>;

    async fn ban_status(&self, public_id: &str) -> Result<BanStatus, ApiError>;
}

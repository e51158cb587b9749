use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::json;
use tracing::debug;

use crate::{ApiError, ApiResponse, BanStatus, ModerationApi, Vote};

/// Public moderation API instance.
pub const DEFAULT_API_URL: &str = "https://sponsor.ajay.app";

/// HTTP client for the SponsorBlock moderation API.
///
/// Privileged calls are authorized with the configured private VIP user ID.
pub struct SponsorBlockClient {
    client: Client,
    base_url: String,
    vip_user_id: String,
}

impl SponsorBlockClient {
    pub fn new(vip_user_id: &str) -> Self {
        Self::with_base_url(vip_user_id, DEFAULT_API_URL)
    }

    /// Create a client against a custom base URL.
    pub fn with_base_url(vip_user_id: &str, base_url: &str) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: base_url.trim_end_matches('/').to_owned(),
            vip_user_id: vip_user_id.to_owned(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<ApiResponse, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(ApiResponse {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl ModerationApi for SponsorBlockClient {
    async fn change_category(
        &self,
        uuid: &str,
        category: &str,
    ) -> Result<ApiResponse, ApiError> {
        debug!(uuid, category, "changing segment category");
        let request = self.client.post(self.url("/api/voteOnSponsorTime")).query(&[
            ("UUID", uuid),
            ("userID", self.vip_user_id.as_str()),
            ("category", category),
        ]);
        self.send(request).await
    }

    async fn clear_cache(&self, video_id: &str) -> Result<ApiResponse, ApiError> {
        debug!(video_id, "clearing video cache");
        let request = self
            .client
            .post(self.url("/api/clearCache"))
            .query(&[("userID", self.vip_user_id.as_str()), ("videoID", video_id)]);
        self.send(request).await
    }

    async fn purge_segments(&self, video_id: &str) -> Result<ApiResponse, ApiError> {
        debug!(video_id, "purging video segments");
        let request = self
            .client
            .post(self.url("/api/purgeAllSegments"))
            .json(&json!({
                "videoID": video_id,
                "userID": self.vip_user_id,
            }));
        self.send(request).await
    }

    async fn vote_on_segment(&self, uuid: &str, vote: Vote) -> Result<ApiResponse, ApiError> {
        debug!(uuid, ?vote, "voting on segment");
        let vote_type = vote.value().to_string();
        let request = self.client.post(self.url("/api/voteOnSponsorTime")).query(&[
            ("UUID", uuid),
            ("userID", self.vip_user_id.as_str()),
            ("type", vote_type.as_str()),
        ]);
        self.send(request).await
    }

    async fn add_temp_vip(
        &self,
        public_id: &str,
        video_id: &str,
    ) -> Result<ApiResponse, ApiError> {
        debug!(public_id, video_id, "granting temporary vip");
        let request = self.client.post(self.url("/api/addUserAsTempVIP")).query(&[
            ("userID", public_id),
            ("adminUserID", self.vip_user_id.as_str()),
            ("channelVideoID", video_id),
            ("enabled", "true"),
        ]);
        self.send(request).await
    }

    async fn delete_warning(&self, public_id: &str) -> Result<ApiResponse, ApiError> {
        debug!(public_id, "removing warning");
        let request = self.client.post(self.url("/api/warnUser")).json(&json!({
            "issuerUserID": self.vip_user_id,
            "userID": public_id,
            "enabled": false,
        }));
        self.send(request).await
    }

    async fn ban_status(&self, public_id: &str) -> Result<BanStatus, ApiError> {
        let request = self
            .client
            .get(self.url("/api/userInfo"))
            .query(&[("publicUserID", public_id), ("values", r#"["banned"]"#)]);
        let response = self.send(request).await?;
        Ok(serde_json::from_str(&response.body)?)
    }
}

use std::sync::Arc;

use twilight_http::Client;

use sb_api::ModerationApi;
use sb_database::ids::IdStore;
use sb_utils::{audit::AuditLog, permissions::VipRoles};

/// Environment-driven runtime configuration.
pub mod config;

pub use config::Config;

/// Shared application context passed into command handlers.
///
/// Cheap to clone because it only stores reference-counted shared state.
#[derive(Clone)]
pub struct Context {
    pub http: Arc<Client>,
    pub api: Arc<dyn ModerationApi>,
    pub ids: Arc<dyn IdStore>,
    pub audit: Arc<dyn AuditLog>,
    pub vip_roles: Arc<VipRoles>,
}

impl Context {
    /// Create a new application context.
    pub fn new(
        http: Arc<Client>,
        api: Arc<dyn ModerationApi>,
        ids: Arc<dyn IdStore>,
        audit: Arc<dyn AuditLog>,
        vip_roles: VipRoles,
    ) -> Self {
        Self {
            http,
            api,
            ids,
            audit,
            vip_roles: Arc::new(vip_roles),
        }
    }
}

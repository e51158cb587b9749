use anyhow::{Context as _, anyhow};
use twilight_model::id::{
    Id,
    marker::{ChannelMarker, RoleMarker},
};

use sb_api::DEFAULT_API_URL;

#[derive(Clone, Debug)]
pub struct Config {
    pub discord_token: String,
    pub database_url: String,
    pub vip_roles: Vec<Id<RoleMarker>>,
    pub vip_user_id: String,
    pub api_url: String,
    pub audit_channel_id: Option<Id<ChannelMarker>>,
}

impl Config {
    /// Load configuration from the process environment, reading `.env` first.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .with_context(|| format!("missing required environment variable {key}"))
        };

        let vip_roles = parse_id_list(&required("VIP_ROLE_IDS")?)
            .context("VIP_ROLE_IDS must be a comma-separated list of role IDs")?;

        let audit_channel_id = lookup("AUDIT_CHANNEL_ID")
            .filter(|value| !value.trim().is_empty())
            .map(|raw| parse_id(&raw).context("AUDIT_CHANNEL_ID must be a channel ID"))
            .transpose()?;

        let api_url = lookup("SB_API_URL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_owned());

        Ok(Self {
            discord_token: required("DISCORD_TOKEN")?,
            database_url: required("DATABASE_URL")?,
            vip_roles,
            vip_user_id: required("SB_VIP_USER_ID")?,
            api_url,
            audit_channel_id,
        })
    }
}

fn parse_id<T>(raw: &str) -> anyhow::Result<Id<T>> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .and_then(Id::new_checked)
        .ok_or_else(|| anyhow!("invalid snowflake `{}`", raw.trim()))
}

fn parse_id_list<T>(raw: &str) -> anyhow::Result<Vec<Id<T>>> {
    raw.split(',')
        .filter(|entry| !entry.trim().is_empty())
        .map(parse_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    const BASE: [(&str, &str); 4] = [
        ("DISCORD_TOKEN", "token"),
        ("DATABASE_URL", "postgres://localhost/sb"),
        ("VIP_ROLE_IDS", "111, 222,,"),
        ("SB_VIP_USER_ID", "vip-key"),
    ];

    #[test]
    fn loads_required_values_and_defaults() {
        let config = Config::from_lookup(lookup(&BASE)).unwrap();
        assert_eq!(config.vip_roles, vec![Id::new(111), Id::new(222)]);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.audit_channel_id.is_none());
    }

    #[test]
    fn reads_optional_overrides() {
        let mut pairs = BASE.to_vec();
        pairs.push(("AUDIT_CHANNEL_ID", "333"));
        pairs.push(("SB_API_URL", "http://localhost:8080"));

        let config = Config::from_lookup(lookup(&pairs)).unwrap();
        assert_eq!(config.audit_channel_id, Some(Id::new(333)));
        assert_eq!(config.api_url, "http://localhost:8080");
    }

    #[test]
    fn rejects_missing_or_malformed_values() {
        let missing: Vec<_> = BASE
            .iter()
            .copied()
            .filter(|(key, _)| *key != "SB_VIP_USER_ID")
            .collect();
        assert!(Config::from_lookup(lookup(&missing)).is_err());

        let mut bad_role = BASE.to_vec();
        bad_role[2] = ("VIP_ROLE_IDS", "111,abc");
        assert!(Config::from_lookup(lookup(&bad_role)).is_err());

        let mut zero_channel = BASE.to_vec();
        zero_channel.push(("AUDIT_CHANNEL_ID", "0"));
        assert!(Config::from_lookup(lookup(&zero_channel)).is_err());
    }
}

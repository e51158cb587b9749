//! Interaction response envelopes and the fixed failure messages.

use twilight_model::{
    channel::message::{AllowedMentions, MessageFlags, component::Component, embed::Embed},
    http::interaction::{InteractionResponse, InteractionResponseType},
};
use twilight_util::builder::InteractionResponseDataBuilder;

pub const NOT_VIP: &str = "Sorry, you need to be a VIP to use this command";
pub const INVALID_VIDEO_ID: &str = "Sorry, that doesn't appear to be a valid video ID";
pub const INVALID_OPTIONS: &str = "Sorry, that command is missing a required option";
pub const INVALID_LOCK_REASON: &str = "Sorry, that lock reason is too long";
pub const API_ERROR: &str = "Sorry, the SponsorBlock API returned an error";
pub const NOT_FOUND: &str = "Not found";
pub const NO_STORED_ID: &str =
    "Sorry, there don't seem to be any set userIDs for this Discord user";
pub const VIDEO_ID_NOT_FOUND: &str =
    "Sorry there doesn't seem to be any video links in this message";

fn channel_message(data: InteractionResponseDataBuilder) -> InteractionResponse {
    InteractionResponse {
        kind: InteractionResponseType::ChannelMessageWithSource,
        data: Some(data.build()),
    }
}

/// Plain text response visible to the whole channel.
pub fn public_message(content: impl Into<String>) -> InteractionResponse {
    channel_message(InteractionResponseDataBuilder::new().content(content))
}

/// Plain text response visible only to the invoker.
pub fn ephemeral_message(content: impl Into<String>) -> InteractionResponse {
    channel_message(
        InteractionResponseDataBuilder::new()
            .content(content)
            .flags(MessageFlags::EPHEMERAL),
    )
}

/// Ephemeral text response that never pings anyone it mentions.
pub fn ephemeral_silent_message(content: impl Into<String>) -> InteractionResponse {
    channel_message(
        InteractionResponseDataBuilder::new()
            .content(content)
            .allowed_mentions(AllowedMentions::default())
            .flags(MessageFlags::EPHEMERAL),
    )
}

/// Ephemeral text response with interactive components attached.
pub fn ephemeral_message_with_components(
    content: impl Into<String>,
    components: Vec<Component>,
) -> InteractionResponse {
    channel_message(
        InteractionResponseDataBuilder::new()
            .content(content)
            .components(components)
            .flags(MessageFlags::EPHEMERAL),
    )
}

/// Ephemeral embed response with interactive components attached.
pub fn ephemeral_embeds(embeds: Vec<Embed>, components: Vec<Component>) -> InteractionResponse {
    channel_message(
        InteractionResponseDataBuilder::new()
            .embeds(embeds)
            .components(components)
            .flags(MessageFlags::EPHEMERAL),
    )
}

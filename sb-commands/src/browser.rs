//! "Open in sb.ltn.fi" message command.

use twilight_model::{
    application::{
        command::{Command, CommandType},
        interaction::application_command::CommandData,
    },
    http::interaction::InteractionResponse,
};
use twilight_util::builder::command::CommandBuilder;

use sb_utils::components::segment_components;
use sb_utils::embed::video_page_url;
use sb_utils::parse::extract_video_id;
use sb_utils::response::{VIDEO_ID_NOT_FOUND, ephemeral_message, ephemeral_message_with_components};

pub const COMMAND_NAME: &str = "Open in sb.ltn.fi";

/// Message context-menu command definition.
pub fn command() -> Command {
    CommandBuilder::new(COMMAND_NAME, "", CommandType::Message).build()
}

/// Link the video referenced by the targeted message.
pub fn run(data: &CommandData) -> InteractionResponse {
    let text = target_message_text(data).unwrap_or_default();
    open_in_browser(&text)
}

/// Message content, or the first embed title when the content is empty.
fn target_message_text(data: &CommandData) -> Option<String> {
    let messages = &data.resolved.as_ref()?.messages;
    let message = match data.target_id {
        Some(target_id) => messages.get(&target_id.cast())?,
        None => messages.values().next()?,
    };

    if !message.content.is_empty() {
        return Some(message.content.clone());
    }

    message.embeds.first().and_then(|embed| embed.title.clone())
}

fn open_in_browser(text: &str) -> InteractionResponse {
    match extract_video_id(text) {
        Some(video_id) => ephemeral_message_with_components(
            video_page_url(&video_id),
            segment_components(&video_id, true),
        ),
        None => ephemeral_message(VIDEO_ID_NOT_FOUND),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use twilight_model::channel::message::MessageFlags;

    use super::*;

    fn message(id: &str, content: &str, embed_title: Option<&str>) -> Value {
        let embeds: Vec<Value> = embed_title
            .map(|title| json!({ "type": "rich", "title": title }))
            .into_iter()
            .collect();

        json!({
            "id": id,
            "channel_id": "3001",
            "type": 0,
            "author": {
                "id": "4001",
                "username": "submissions",
                "discriminator": "0",
                "avatar": null
            },
            "content": content,
            "embeds": embeds,
            "attachments": [],
            "mentions": [],
            "mention_roles": [],
            "mention_everyone": false,
            "pinned": false,
            "tts": false,
            "edited_timestamp": null,
            "timestamp": "2024-06-01T00:00:00.000000+00:00"
        })
    }

    fn command_data(target_id: &str, messages: Value) -> CommandData {
        serde_json::from_value(json!({
            "id": "2001",
            "name": COMMAND_NAME,
            "type": 3,
            "target_id": target_id,
            "resolved": { "messages": messages }
        }))
        .unwrap()
    }

    #[test]
    fn falls_back_to_embed_title_of_targeted_message() {
        let data = command_data(
            "1001",
            json!({
                "1001": message("1001", "", Some("New submission https://youtu.be/dQw4w9WgXcQ")),
                "1002": message("1002", "https://www.youtube.com/watch?v=jNQXAC9IVRw", None),
            }),
        );

        let response = run(&data).data.unwrap();
        assert_eq!(
            response.content.as_deref(),
            Some("https://sb.ltn.fi/video/dQw4w9WgXcQ/")
        );
        assert_eq!(response.flags, Some(MessageFlags::EPHEMERAL));
    }

    #[test]
    fn message_content_wins_over_embed_title() {
        let data = command_data(
            "1002",
            json!({
                "1002": message(
                    "1002",
                    "https://www.youtube.com/watch?v=jNQXAC9IVRw",
                    Some("https://youtu.be/dQw4w9WgXcQ"),
                ),
            }),
        );

        let response = run(&data).data.unwrap();
        assert_eq!(
            response.content.as_deref(),
            Some("https://sb.ltn.fi/video/jNQXAC9IVRw/")
        );
    }

    #[test]
    fn missing_target_message_reports_no_link() {
        let data = command_data("1009", json!({}));

        let response = run(&data).data.unwrap();
        assert_eq!(response.content.as_deref(), Some(VIDEO_ID_NOT_FOUND));
    }

    #[test]
    fn links_video_found_in_text() {
        let data = open_in_browser("new submission on https://www.youtube.com/watch?v=dQw4w9WgXcQ")
            .data
            .unwrap();
        assert_eq!(
            data.content.as_deref(),
            Some("https://sb.ltn.fi/video/dQw4w9WgXcQ/")
        );
        assert_eq!(data.flags, Some(MessageFlags::EPHEMERAL));
        assert_eq!(data.components.map(|rows| rows.len()), Some(1));
    }

    #[test]
    fn reports_missing_video_link() {
        let data = open_in_browser("no links here").data.unwrap();
        assert_eq!(data.content.as_deref(), Some(VIDEO_ID_NOT_FOUND));
        assert_eq!(data.flags, Some(MessageFlags::EPHEMERAL));
    }

    #[test]
    fn defines_message_command() {
        let command = command();
        assert_eq!(command.name, COMMAND_NAME);
        assert_eq!(command.kind, CommandType::Message);
    }
}

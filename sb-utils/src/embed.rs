use twilight_model::channel::message::embed::Embed;
use twilight_util::builder::embed::{EmbedBuilder, EmbedFieldBuilder};

use crate::components::SB_BROWSER_URL;

/// Default embed color used across the bot UI.
pub const DEFAULT_EMBED_COLOR: u32 = 0xff_00_00;

/// Segment browser page for a video.
pub fn video_page_url(video_id: &str) -> String {
    format!("{SB_BROWSER_URL}/video/{video_id}/")
}

/// Build a standard embed with consistent styling.
///
/// Fields are rendered full-width in the given order. Fails when the result
/// would exceed Discord's embed limits.
pub fn build_embed(
    title: &str,
    description: impl Into<String>,
    fields: &[(&str, &str)],
) -> anyhow::Result<Embed> {
    let builder = fields.iter().fold(
        EmbedBuilder::new()
            .title(title)
            .color(DEFAULT_EMBED_COLOR)
            .description(description),
        |builder, (name, value)| builder.field(EmbedFieldBuilder::new(*name, *value)),
    );

    Ok(builder.validate()?.build())
}

use twilight_model::channel::message::{component::Component, embed::Embed};

use sb_utils::components::category_buttons;
use sb_utils::embed::{build_embed, video_page_url};
use sb_utils::parse::extract_video_id;

/// Segment categories known to the moderation backend.
pub const CATEGORIES: [&str; 12] = [
    "sponsor",
    "selfpromo",
    "interaction",
    "intro",
    "outro",
    "preview",
    "hook",
    "music_offtopic",
    "filler",
    "poi_highlight",
    "exclusive_access",
    "chapter",
];

/// Custom ID prefix of the category buttons; the follow-up handler keys on it.
pub const LOCK_CUSTOM_ID_PREFIX: &str = "lock:";

/// Longest raw input accepted when no video ID can be extracted from it.
pub const MAX_RAW_VIDEO_ID_LENGTH: usize = 100;

/// Resolve the video a lock request targets.
///
/// A link or ID found in the text wins; otherwise the trimmed raw input is
/// used as-is. Blank or over-long input resolves to nothing.
pub fn resolve_lock_video_id(raw: Option<&str>) -> Option<String> {
    let raw = raw.map(str::trim).filter(|value| !value.is_empty())?;
    match extract_video_id(raw) {
        Some(video_id) => Some(video_id),
        None if raw.chars().count() <= MAX_RAW_VIDEO_ID_LENGTH => Some(raw.to_owned()),
        None => None,
    }
}

/// Confirmation embed shown before categories are locked.
pub fn lock_embed(video_id: &str, reason: Option<&str>) -> anyhow::Result<Embed> {
    let description = format!(
        "Video: [{video_id}]({})\nPick the categories to lock.",
        video_page_url(video_id)
    );

    match reason {
        Some(reason) => build_embed("Lock categories", description, &[("Reason", reason)]),
        None => build_embed("Lock categories", description, &[]),
    }
}

/// One button per category.
pub fn lock_category_components() -> Vec<Component> {
    category_buttons(LOCK_CUSTOM_ID_PREFIX, &CATEGORIES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_in_text_takes_precedence() {
        assert_eq!(
            resolve_lock_video_id(Some("check this https://youtu.be/dQw4w9WgXcQ please"))
                .as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn falls_back_to_trimmed_raw_input() {
        assert_eq!(
            resolve_lock_video_id(Some("  not-a-link ")).as_deref(),
            Some("not-a-link")
        );
    }

    #[test]
    fn blank_input_resolves_to_nothing() {
        assert_eq!(resolve_lock_video_id(None), None);
        assert_eq!(resolve_lock_video_id(Some("   \t")), None);
    }

    #[test]
    fn over_long_raw_input_resolves_to_nothing() {
        let at_limit = "x".repeat(MAX_RAW_VIDEO_ID_LENGTH);
        assert_eq!(resolve_lock_video_id(Some(&at_limit)), Some(at_limit.clone()));

        let too_long = "x".repeat(MAX_RAW_VIDEO_ID_LENGTH + 1);
        assert_eq!(resolve_lock_video_id(Some(&too_long)), None);
    }

    #[test]
    fn longest_raw_video_id_still_fits_the_embed() {
        let video_id = "x".repeat(MAX_RAW_VIDEO_ID_LENGTH);
        assert!(lock_embed(&video_id, None).is_ok());
    }

    #[test]
    fn reason_field_only_when_given() {
        let with_reason = lock_embed("dQw4w9WgXcQ", Some("spam")).unwrap();
        assert_eq!(with_reason.fields.len(), 1);
        assert_eq!(with_reason.fields[0].value, "spam");
        assert!(
            with_reason
                .description
                .as_deref()
                .is_some_and(|text| text.contains("https://sb.ltn.fi/video/dQw4w9WgXcQ/"))
        );

        let without_reason = lock_embed("dQw4w9WgXcQ", None).unwrap();
        assert!(without_reason.fields.is_empty());
    }

    #[test]
    fn every_category_gets_a_button() {
        let button_count: usize = lock_category_components()
            .iter()
            .map(|row| match row {
                Component::ActionRow(row) => row.components.len(),
                _ => 0,
            })
            .sum();
        assert_eq!(button_count, CATEGORIES.len());
    }
}

//! Button and action-row builders shared by command responses.
//!
//! Every builder is pure: it returns a fresh component tree and never touches
//! Discord. Custom IDs produced here are handled by follow-up interactions.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Serialize, Serializer, ser::SerializeTuple};
use twilight_model::channel::message::{
    EmojiReactionType,
    component::{ActionRow, Button, ButtonStyle, Component},
};

/// Base URL of the external segment browser.
pub const SB_BROWSER_URL: &str = "https://sb.ltn.fi";

/// Number of segments shown on one search page.
pub const SEARCH_PAGE_SIZE: usize = 10;

/// Characters left untouched by JavaScript's `encodeURI`.
const URI_RESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'#');

/// A segment proposed for submission through the automod triage flow.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProposedSegment {
    #[serde(serialize_with = "serialize_seconds")]
    pub segment: [f64; 2],
    pub category: String,
    #[serde(rename = "actionType")]
    pub action_type: String,
}

/// Whole seconds are written without a fraction, the way browsers print them.
fn serialize_seconds<S>(segment: &[f64; 2], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

    let mut tuple = serializer.serialize_tuple(segment.len())?;
    for &seconds in segment {
        if seconds.fract() == 0.0 && seconds.abs() <= MAX_SAFE_INTEGER {
            tuple.serialize_element(&(seconds as i64))?;
        } else {
            tuple.serialize_element(&seconds)?;
        }
    }
    tuple.end()
}

/// Pagination state of a segment search result.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SearchPage {
    /// Zero-based page currently displayed.
    pub page: usize,
    pub segment_count: usize,
}

fn row(components: Vec<Component>) -> Component {
    Component::ActionRow(ActionRow {
        id: None,
        components,
    })
}

fn link_button(label: &str, url: String) -> Component {
    Component::Button(Button {
        id: None,
        custom_id: None,
        disabled: false,
        emoji: None,
        label: Some(label.to_owned()),
        style: ButtonStyle::Link,
        url: Some(url),
        sku_id: None,
    })
}

fn action_button(
    label: &str,
    custom_id: &str,
    style: ButtonStyle,
    emoji: Option<&str>,
    disabled: bool,
) -> Component {
    Component::Button(Button {
        id: None,
        custom_id: Some(custom_id.to_owned()),
        disabled,
        emoji: emoji.map(|name| EmojiReactionType::Unicode {
            name: name.to_owned(),
        }),
        label: Some(label.to_owned()),
        style,
        url: None,
        sku_id: None,
    })
}

/// Browser link for a user, plus a last-submission lookup unless hidden.
pub fn user_components(public_id: &str, hide_lookup_button: bool) -> Vec<Component> {
    let mut buttons = vec![link_button(
        "Open in Browser",
        format!("{SB_BROWSER_URL}/userid/{public_id}/"),
    )];

    if !hide_lookup_button {
        buttons.push(action_button(
            "Lookup Last Submission",
            "lookupsegment",
            ButtonStyle::Primary,
            None,
            false,
        ));
    }

    vec![row(buttons)]
}

/// Video link, plus a user lookup when the message is not ephemeral.
pub fn segment_components(video_id: &str, ephemeral: bool) -> Vec<Component> {
    let mut buttons = vec![link_button(
        "Open Video",
        format!("{SB_BROWSER_URL}/video/{video_id}/"),
    )];

    if !ephemeral {
        buttons.push(action_button(
            "Lookup User",
            "lookupuser",
            ButtonStyle::Primary,
            None,
            false,
        ));
    }

    vec![row(buttons)]
}

/// Previous/next buttons for a segment search.
///
/// Returns no rows when the results fit on a single page.
pub fn search_segments_components(search: SearchPage) -> Vec<Component> {
    let page_count = search.segment_count.div_ceil(SEARCH_PAGE_SIZE);
    let Some(last_page) = page_count.checked_sub(1).filter(|last| *last > 0) else {
        return vec![];
    };

    vec![row(vec![
        action_button(
            "Previous page",
            "searchsegments_prev",
            ButtonStyle::Secondary,
            Some("◀️"),
            search.page == 0,
        ),
        action_button(
            "Next page",
            "searchsegments_next",
            ButtonStyle::Secondary,
            Some("▶️"),
            search.page >= last_page,
        ),
    ])]
}

/// Build the `#segments=` submission link for a video.
pub fn automod_submit_url(
    video_id: &str,
    segments: &[ProposedSegment],
) -> serde_json::Result<String> {
    let raw = format!(
        "https://www.youtube.com/watch?v={video_id}#segments={}",
        serde_json::to_string(segments)?
    );
    Ok(utf8_percent_encode(&raw, URI_RESERVED).to_string())
}

/// Automod triage row: submit link followed by done/skip/reject.
pub fn automod_components(
    video_id: &str,
    segments: &[ProposedSegment],
) -> serde_json::Result<Vec<Component>> {
    let submit_url = automod_submit_url(video_id, segments)?;

    Ok(vec![row(vec![
        link_button("Submit All", submit_url),
        action_button("Done", "automod_done", ButtonStyle::Success, Some("✅"), false),
        action_button("Skip", "automod_skip", ButtonStyle::Secondary, Some("♻️"), false),
        action_button("Reject", "automod_reject", ButtonStyle::Danger, Some("👎"), false),
    ])])
}

/// Classification triage rows.
///
/// Unlocked entries get a leading vote button on the first row.
pub fn classify_components(locked: bool) -> Vec<Component> {
    let mut decisions = vec![
        action_button("Done", "classify_done", ButtonStyle::Success, Some("✅"), false),
        action_button("Skip", "classify_skip", ButtonStyle::Secondary, Some("♻️"), false),
        action_button("Reject", "classify_reject", ButtonStyle::Danger, Some("👎"), false),
    ];

    if !locked {
        decisions.insert(
            0,
            action_button(
                "Vote with sb-slash",
                "classify_vip",
                ButtonStyle::Primary,
                Some("👑"),
                false,
            ),
        );
    }

    let housekeeping = vec![
        action_button("Ignore", "classify_ignore", ButtonStyle::Danger, Some("🗑️"), false),
        action_button("Flag", "classify_flag", ButtonStyle::Secondary, Some("🚩"), false),
    ];

    vec![row(decisions), row(housekeeping)]
}

/// Lay buttons out in as many rows of up to five as needed.
pub fn button_rows(buttons: Vec<Component>) -> Vec<Component> {
    buttons.chunks(5).map(|chunk| row(chunk.to_vec())).collect()
}

/// One secondary button per category, carrying `{prefix}{category}` as its ID.
pub fn category_buttons(prefix: &str, categories: &[&str]) -> Vec<Component> {
    let buttons = categories
        .iter()
        .map(|category| {
            action_button(
                category,
                &format!("{prefix}{category}"),
                ButtonStyle::Secondary,
                None,
                false,
            )
        })
        .collect();

    button_rows(buttons)
}

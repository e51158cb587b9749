use url::Url;

const VIDEO_ID_LEN: usize = 11;

/// Whether `raw` has the shape of a YouTube video ID.
pub fn is_video_id(raw: &str) -> bool {
    raw.len() == VIDEO_ID_LEN
        && raw
            .bytes()
            .all(|byte| byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_')
}

/// Find the first YouTube video ID in free-form text.
///
/// Links anywhere in the text are recognised. A bare ID is only accepted when
/// it is the entire trimmed input, so ordinary words are never mistaken for IDs.
pub fn extract_video_id(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if is_video_id(trimmed) {
        return Some(trimmed.to_owned());
    }

    trimmed.split_whitespace().find_map(video_id_from_link)
}

fn video_id_from_link(token: &str) -> Option<String> {
    let token = token.trim_matches(|c: char| matches!(c, '<' | '>' | '(' | ')' | '"' | '\''));
    if !token.contains('.') {
        return None;
    }

    let url = if token.contains("://") {
        Url::parse(token).ok()?
    } else {
        Url::parse(&format!("https://{token}")).ok()?
    };

    let host = url.host_str()?;
    let host = ["www.", "m.", "music."]
        .iter()
        .find_map(|prefix| host.strip_prefix(prefix))
        .unwrap_or(host);

    let mut segments = url.path_segments()?.filter(|segment| !segment.is_empty());

    let candidate = match host {
        "youtu.be" => segments.next()?.to_owned(),
        "youtube.com" | "youtube-nocookie.com" => match segments.next()? {
            "watch" => url
                .query_pairs()
                .find_map(|(key, value)| (key == "v").then(|| value.into_owned()))?,
            "embed" | "shorts" | "live" | "v" => segments.next()?.to_owned(),
            _ => return None,
        },
        "sb.ltn.fi" => match segments.next()? {
            "video" => segments.next()?.to_owned(),
            _ => return None,
        },
        _ => return None,
    };

    is_video_id(&candidate).then_some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_short_link_from_surrounding_text() {
        assert_eq!(
            extract_video_id("check this https://youtu.be/dQw4w9WgXcQ please").as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn extracts_from_common_link_shapes() {
        let cases = [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42",
            "youtube.com/watch?feature=share&v=dQw4w9WgXcQ",
            "https://m.youtube.com/shorts/dQw4w9WgXcQ",
            "https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ",
            "https://music.youtube.com/watch?v=dQw4w9WgXcQ",
            "<https://sb.ltn.fi/video/dQw4w9WgXcQ/>",
        ];

        for case in cases {
            assert_eq!(extract_video_id(case).as_deref(), Some("dQw4w9WgXcQ"), "{case}");
        }
    }

    #[test]
    fn accepts_bare_id_only_as_whole_input() {
        assert_eq!(
            extract_video_id("  dQw4w9WgXcQ ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(extract_video_id("please lock interaction"), None);
    }

    #[test]
    fn rejects_foreign_hosts_and_malformed_ids() {
        assert_eq!(extract_video_id("https://example.com/watch?v=dQw4w9WgXcQ"), None);
        assert_eq!(extract_video_id("https://youtu.be/short"), None);
        assert_eq!(extract_video_id(""), None);
    }
}

use crate::ApiResponse;

const MAX_BODY_CHARS: usize = 1800;

/// Summarize a successful upstream result for a channel message.
pub fn format_result(result: &ApiResponse) -> String {
    let body = result.body.trim();
    if body.is_empty() || body == "OK" {
        return "✅".to_owned();
    }

    let summary: String = body.chars().take(MAX_BODY_CHARS).collect();
    format!("✅ {summary}")
}

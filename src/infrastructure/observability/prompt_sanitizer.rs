const MAX_VISIBLE_CHARS: usize = 200;

const SECRET_MARKERS: &[&str] = &["Bearer ", "api_key=", "password=", "secret=", "token="];

/// Shortens prompt or response text for debug logs and masks credentials.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = trimmed.chars().count();
    let visible = if total > MAX_VISIBLE_CHARS {
        let head: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", head, total)
    } else {
        trimmed.to_string()
    };

    SECRET_MARKERS
        .iter()
        .fold(visible, |text, marker| redact_after(&text, marker))
}

fn redact_after(text: &str, marker: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(idx) = rest.find(marker) {
        let value_start = idx + marker.len();
        let value_end = rest[value_start..]
            .find(|c: char| c.is_whitespace() || matches!(c, '&' | '"' | '\''))
            .map(|i| value_start + i)
            .unwrap_or(rest.len());

        result.push_str(&rest[..value_start]);
        result.push_str("[REDACTED]");
        rest = &rest[value_end..];
    }

    result.push_str(rest);
    result
}

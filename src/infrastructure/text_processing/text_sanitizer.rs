use unicode_normalization::UnicodeNormalization;

/// Normalizes scraped page text: NFKC, one trimmed line per text block,
/// blank lines removed and runs of whitespace collapsed.
pub fn normalize_page_text(raw: &str) -> String {
    let normalized: String = raw.nfkc().collect();

    let mut result = String::with_capacity(normalized.len());
    for line in normalized.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !result.is_empty() {
            result.push('\n');
        }
        collapse_internal_whitespace(trimmed, &mut result);
    }

    result
}

fn collapse_internal_whitespace(line: &str, out: &mut String) {
    let mut prev_was_space = false;

    for ch in line.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                out.push(' ');
                prev_was_space = true;
            }
        } else {
            out.push(ch);
            prev_was_space = false;
        }
    }
}

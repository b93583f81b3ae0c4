use std::sync::LazyLock;

use regex::Regex;

use crate::domain::McqCandidate;

static QUESTION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:q(?:uestion)?\s*\.?\s*)?\d{1,3}\s*[.):]\s*(?P<text>\S.*)$").unwrap()
});
static OPTION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(?(?P<label>[a-dA-D])[.)]\s*(?P<text>\S.*)$").unwrap());
static INLINE_OPTION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((?P<label>[a-dA-D])\)").unwrap());
static ANSWER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:correct\s+)?ans(?:wer)?\s*[:.\-]\s*(?P<text>\S.*)$").unwrap()
});
static ANSWER_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(?(?P<label>[a-dA-D])\)?\.?$").unwrap());

const OPTION_COUNT: usize = 4;

#[derive(Default)]
struct Draft {
    question: String,
    options: Vec<String>,
    answer: String,
}

impl Draft {
    fn new(question: &str) -> Self {
        Self {
            question: question.trim().to_string(),
            ..Self::default()
        }
    }

    fn into_candidate(self) -> Option<McqCandidate> {
        if self.question.is_empty() || self.options.len() != OPTION_COUNT {
            return None;
        }
        let answer = resolve_answer(&self.answer, &self.options);
        Some(McqCandidate {
            question: self.question,
            options: self.options,
            answer,
            ..McqCandidate::default()
        })
    }
}

/// Finds questions laid out as a numbered stem followed by four `(a)`-`(d)`
/// options and an optional `Answer:` line, one item per line.
pub fn extract_listed_mcqs(text: &str) -> Vec<McqCandidate> {
    let mut found = Vec::new();
    let mut current: Option<Draft> = None;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(caps) = QUESTION_LINE.captures(line) {
            found.extend(current.take().and_then(Draft::into_candidate));
            current = Some(Draft::new(&caps["text"]));
            continue;
        }

        let Some(draft) = current.as_mut() else {
            continue;
        };

        if let Some(caps) = ANSWER_LINE.captures(line) {
            draft.answer = caps["text"].trim().to_string();
            found.extend(current.take().and_then(Draft::into_candidate));
        } else if let Some(options) = inline_options(line) {
            draft.options.extend(options);
        } else if let Some(caps) = OPTION_LINE.captures(line) {
            draft.options.push(caps["text"].trim().to_string());
        } else if draft.options.is_empty() {
            draft.question.push(' ');
            draft.question.push_str(line);
        }
    }

    found.extend(current.and_then(Draft::into_candidate));
    found
}

/// Splits `(a) x (b) y ...` when a line starts with a marker and carries
/// more than one.
fn inline_options(line: &str) -> Option<Vec<String>> {
    let markers: Vec<_> = INLINE_OPTION_MARKER.find_iter(line).collect();
    if markers.len() < 2 || markers[0].start() != 0 {
        return None;
    }

    let options = markers
        .iter()
        .enumerate()
        .map(|(i, marker)| {
            let end = markers.get(i + 1).map(|m| m.start()).unwrap_or(line.len());
            line[marker.end()..end].trim().to_string()
        })
        .collect();
    Some(options)
}

/// Maps a bare option letter such as `(b)` to that option's text.
fn resolve_answer(answer: &str, options: &[String]) -> String {
    let Some(caps) = ANSWER_LETTER.captures(answer.trim()) else {
        return answer.to_string();
    };
    let index = match caps["label"].to_ascii_lowercase().as_str() {
        "a" => 0,
        "b" => 1,
        "c" => 2,
        _ => 3,
    };
    options
        .get(index)
        .cloned()
        .unwrap_or_else(|| answer.to_string())
}

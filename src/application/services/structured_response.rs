use serde::de::DeserializeOwned;

/// What could be recovered from a free-form model reply.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome<T> {
    /// An array was decoded. `dropped` counts elements that did not fit the
    /// record type and were discarded.
    Parsed { records: Vec<T>, dropped: usize },
    /// No `[ ... ]` span exists in the reply.
    NoStructure,
    /// A span exists but is not a well-formed JSON array.
    Malformed(String),
}

impl<T> ParseOutcome<T> {
    /// Resolves the outcome, substituting `fallback` when nothing was decoded.
    pub fn or_fallback(self, fallback: impl FnOnce() -> Vec<T>) -> Vec<T> {
        match self {
            ParseOutcome::Parsed { records, .. } => records,
            ParseOutcome::NoStructure | ParseOutcome::Malformed(_) => fallback(),
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, ParseOutcome::Parsed { .. })
    }
}

/// Decodes the span from the first `[` to the last `]` of `response`.
///
/// The span must be a strict JSON array. Each element is then converted into
/// `T` on its own, so a single non-conforming element is dropped instead of
/// discarding the whole array.
pub fn parse_structured_response<T: DeserializeOwned>(response: &str) -> ParseOutcome<T> {
    let (Some(start), Some(end)) = (response.find('['), response.rfind(']')) else {
        return ParseOutcome::NoStructure;
    };
    if start >= end {
        return ParseOutcome::NoStructure;
    }

    let span = &response[start..=end];
    let elements: Vec<serde_json::Value> = match serde_json::from_str(span) {
        Ok(elements) => elements,
        Err(e) => return ParseOutcome::Malformed(e.to_string()),
    };

    let total = elements.len();
    let records: Vec<T> = elements
        .into_iter()
        .filter_map(|element| match serde_json::from_value(element) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::debug!(error = %e, "Dropping non-conforming record");
                None
            }
        })
        .collect();
    let dropped = total - records.len();

    ParseOutcome::Parsed { records, dropped }
}

/// Parses `response` and returns `fallback` when no array can be recovered.
pub fn recover_records<T: DeserializeOwned>(response: &str, fallback: Vec<T>) -> Vec<T> {
    let outcome = parse_structured_response(response);
    log_outcome(&outcome);
    outcome.or_fallback(|| fallback)
}

pub(crate) fn log_outcome<T>(outcome: &ParseOutcome<T>) {
    match outcome {
        ParseOutcome::Parsed { records, dropped } => {
            if *dropped > 0 {
                tracing::warn!(
                    kept = records.len(),
                    dropped = dropped,
                    "Dropped records that did not match the expected shape"
                );
            }
        }
        ParseOutcome::NoStructure => tracing::warn!("No JSON array found in response"),
        ParseOutcome::Malformed(reason) => {
            tracing::warn!(error = %reason, "Failed to parse JSON array from response")
        }
    }
}

use serde::{Deserialize, Deserializer, Serialize};

use super::class_level::{ClassLevel, lenient_class_level};

/// A question recovered from source content, possibly incomplete.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct McqCandidate {
    #[serde(default, deserialize_with = "lenient_text")]
    pub question: String,
    #[serde(default, deserialize_with = "lenient_options")]
    pub options: Vec<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub answer: String,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "String::is_empty"
    )]
    pub explanation: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub subject: String,
    #[serde(
        rename = "class",
        alias = "class_level",
        default,
        deserialize_with = "lenient_class_level",
        skip_serializing_if = "Option::is_none"
    )]
    pub class_level: Option<ClassLevel>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub topic: String,
}

/// A question that satisfies the canonical shape: a non-empty stem and
/// exactly four options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "McqCandidate")]
pub struct FormattedMcq {
    pub question: String,
    pub options: [String; 4],
    pub answer: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub explanation: String,
    pub subject: String,
    #[serde(rename = "class", skip_serializing_if = "Option::is_none")]
    pub class_level: Option<ClassLevel>,
    pub topic: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMcq {
    #[error("question text is empty")]
    EmptyQuestion,
    #[error("expected 4 options, found {0}")]
    WrongOptionCount(usize),
}

impl TryFrom<McqCandidate> for FormattedMcq {
    type Error = InvalidMcq;

    fn try_from(candidate: McqCandidate) -> Result<Self, Self::Error> {
        let question = candidate.question.trim().to_string();
        if question.is_empty() {
            return Err(InvalidMcq::EmptyQuestion);
        }

        let count = candidate.options.len();
        let options: [String; 4] = candidate
            .options
            .try_into()
            .map_err(|_| InvalidMcq::WrongOptionCount(count))?;

        Ok(Self {
            question,
            options,
            answer: candidate.answer,
            explanation: candidate.explanation,
            subject: candidate.subject,
            class_level: candidate.class_level,
            topic: candidate.topic,
        })
    }
}

impl From<FormattedMcq> for McqCandidate {
    fn from(mcq: FormattedMcq) -> Self {
        Self {
            question: mcq.question,
            options: mcq.options.into(),
            answer: mcq.answer,
            explanation: mcq.explanation,
            subject: mcq.subject,
            class_level: mcq.class_level,
            topic: mcq.topic,
        }
    }
}

/// Models answer with strings, numbers or `null` for the same field.
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.map(value_to_text).unwrap_or_default())
}

pub(crate) fn lenient_options<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Vec::new(),
        Some(serde_json::Value::Array(items)) => items,
        // `{"A": .., "B": ..}`: values in key order
        Some(serde_json::Value::Object(map)) => {
            let mut entries: Vec<_> = map.into_iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            entries.into_iter().map(|(_, v)| v).collect()
        }
        Some(other) => {
            return Err(serde::de::Error::custom(format!(
                "expected a list of options, found {}",
                other
            )));
        }
    };
    Ok(values.into_iter().map(value_to_text).collect())
}

fn value_to_text(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

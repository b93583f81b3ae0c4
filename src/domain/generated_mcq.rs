use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::class_level::{ClassLevel, lenient_class_level};
use super::mcq::{InvalidMcq, lenient_options, lenient_text};

/// A newly synthesized question with an explicit answer key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGeneratedMcq")]
pub struct GeneratedMcq {
    pub question: String,
    pub options: [String; 4],
    pub correct_option: CorrectOption,
    pub explanation: String,
    pub difficulty: Difficulty,
    pub topic: String,
    pub subject: String,
    #[serde(rename = "class", skip_serializing_if = "Option::is_none")]
    pub class_level: Option<ClassLevel>,
}

#[derive(Deserialize)]
struct RawGeneratedMcq {
    #[serde(default, deserialize_with = "lenient_text")]
    question: String,
    #[serde(default, deserialize_with = "lenient_options")]
    options: Vec<String>,
    correct_option: CorrectOption,
    #[serde(default, deserialize_with = "lenient_text")]
    explanation: String,
    difficulty: Difficulty,
    #[serde(default, deserialize_with = "lenient_text")]
    topic: String,
    #[serde(default, deserialize_with = "lenient_text")]
    subject: String,
    #[serde(
        rename = "class",
        alias = "class_level",
        default,
        deserialize_with = "lenient_class_level"
    )]
    class_level: Option<ClassLevel>,
}

impl TryFrom<RawGeneratedMcq> for GeneratedMcq {
    type Error = InvalidMcq;

    fn try_from(raw: RawGeneratedMcq) -> Result<Self, Self::Error> {
        let question = raw.question.trim().to_string();
        if question.is_empty() {
            return Err(InvalidMcq::EmptyQuestion);
        }

        let count = raw.options.len();
        let options: [String; 4] = raw
            .options
            .try_into()
            .map_err(|_| InvalidMcq::WrongOptionCount(count))?;

        Ok(Self {
            question,
            options,
            correct_option: raw.correct_option,
            explanation: raw.explanation,
            difficulty: raw.difficulty,
            topic: raw.topic,
            subject: raw.subject,
            class_level: raw.class_level,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CorrectOption {
    A,
    B,
    C,
    D,
}

impl CorrectOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            CorrectOption::A => "A",
            CorrectOption::B => "B",
            CorrectOption::C => "C",
            CorrectOption::D => "D",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            CorrectOption::A => 0,
            CorrectOption::B => 1,
            CorrectOption::C => 2,
            CorrectOption::D => 3,
        }
    }
}

/// Accepts a single letter, optionally written as `"(c)"`, `"b."` or
/// `"Option D"`. Option text such as `"Coulomb"` is rejected.
impl FromStr for CorrectOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let label = match trimmed.get(..6) {
            Some(prefix) if prefix.eq_ignore_ascii_case("option") => trimmed[6..].trim_start(),
            _ => trimmed,
        };
        let label = label.strip_prefix('(').unwrap_or(label);
        let label = label
            .strip_suffix(')')
            .or_else(|| label.strip_suffix('.'))
            .unwrap_or(label);

        let mut chars = label.chars();
        match (chars.next().map(|c| c.to_ascii_uppercase()), chars.next()) {
            (Some('A'), None) => Ok(CorrectOption::A),
            (Some('B'), None) => Ok(CorrectOption::B),
            (Some('C'), None) => Ok(CorrectOption::C),
            (Some('D'), None) => Ok(CorrectOption::D),
            _ => Err(format!("Invalid correct option: {}", s)),
        }
    }
}

impl fmt::Display for CorrectOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for CorrectOption {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CorrectOption {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!("Invalid difficulty: {}", s)),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Difficulty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

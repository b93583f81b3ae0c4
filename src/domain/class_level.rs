use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// School grade a question targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClassLevel {
    Ten,
    Eleven,
    #[default]
    Twelve,
}

impl ClassLevel {
    pub fn as_u8(&self) -> u8 {
        match self {
            ClassLevel::Ten => 10,
            ClassLevel::Eleven => 11,
            ClassLevel::Twelve => 12,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid class level: {0}. Expected: 10, 11, or 12")]
pub struct InvalidClassLevel(pub String);

impl TryFrom<u8> for ClassLevel {
    type Error = InvalidClassLevel;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            10 => Ok(ClassLevel::Ten),
            11 => Ok(ClassLevel::Eleven),
            12 => Ok(ClassLevel::Twelve),
            other => Err(InvalidClassLevel(other.to_string())),
        }
    }
}

impl TryFrom<i64> for ClassLevel {
    type Error = InvalidClassLevel;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| InvalidClassLevel(value.to_string()))
            .and_then(ClassLevel::try_from)
    }
}

/// Accepts `"12"`, `" 11 "` and labels such as `"Class 10"`.
impl FromStr for ClassLevel {
    type Err = InvalidClassLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
        digits
            .parse::<u8>()
            .map_err(|_| InvalidClassLevel(s.to_string()))
            .and_then(ClassLevel::try_from)
    }
}

impl fmt::Display for ClassLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

impl Serialize for ClassLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for ClassLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        match &value {
            serde_json::Value::Number(n) => n
                .as_i64()
                .ok_or_else(|| InvalidClassLevel(n.to_string()))
                .and_then(ClassLevel::try_from),
            serde_json::Value::String(s) => s.parse(),
            other => Err(InvalidClassLevel(other.to_string())),
        }
        .map_err(serde::de::Error::custom)
    }
}

/// Deserializes an optional class level, mapping anything unrecognisable to
/// `None` instead of failing the surrounding record.
pub(crate) fn lenient_class_level<'de, D>(deserializer: D) -> Result<Option<ClassLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

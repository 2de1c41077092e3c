//! Deserializers for webhook fields filled in by a voice assistant.
//!
//! Unfilled parameters arrive as `null` and numbers sometimes arrive as text,
//! so these accept any scalar and leave the judging to the validator.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Int(i) => i.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Bool(b) => b.to_string(),
            Scalar::Text(s) => s,
        }
    }

    /// Whole numbers only. Anything else maps to 0, which no party size allows.
    fn into_count(self) -> i64 {
        match self {
            Scalar::Int(i) => i,
            Scalar::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => f as i64,
            Scalar::Text(s) => s.trim().parse().unwrap_or(0),
            Scalar::Float(_) | Scalar::Bool(_) => 0,
        }
    }
}

/// `null` becomes an empty string; numbers and booleans become their text.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .map(Scalar::into_text)
        .unwrap_or_default())
}

/// Like [`text`], but `null` stays `None`.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_text))
}

/// Party size from an integer, a whole float or numeric text; `null` means one player.
pub fn party_size<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_party_size(deserializer)?.unwrap_or(1))
}

pub fn optional_party_size<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_count))
}

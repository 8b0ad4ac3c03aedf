//! Normalization of backend wire-format quirks.
//!
//! The ERP backend is loose about two things:
//!
//! 1. References may arrive either as a populated document
//!    (`{"_id": "abc", ...}`) or as a bare id string (`"abc"`). Both forms
//!    must resolve identically, so they are collapsed to the typed id once,
//!    at ingestion, instead of re-deriving the fallback at every use site.
//! 2. Monetary fields may be numbers, numeric strings, or missing entirely.
//!    The display layer is deliberately fail-soft: malformed values coerce
//!    to zero (logged at debug so data-integrity bugs stay diagnosable).

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

/// A reference that may be a populated document or a bare id string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawRef {
    Embedded {
        #[serde(rename = "_id")]
        id: String,
    },
    Bare(String),
}

impl RawRef {
    fn into_id(self) -> String {
        match self {
            Self::Embedded { id } | Self::Bare(id) => id,
        }
    }
}

/// Deserializes an embedded-or-bare reference into a typed id.
pub fn entity_ref<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    let raw = RawRef::deserialize(deserializer)?;
    Ok(T::from(raw.into_id()))
}

/// Deserializes a monetary field leniently, coercing malformed input to zero.
pub fn lenient_money<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(coerce_decimal(raw.as_ref()).unwrap_or_else(|| {
        debug!(value = ?raw, "malformed monetary field coerced to zero");
        Decimal::ZERO
    }))
}

/// Deserializes an optional monetary field leniently.
///
/// Missing/null stays `None` (so callers can apply their own default);
/// malformed values also collapse to `None`.
pub fn lenient_money_opt<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    match raw {
        None | Some(Value::Null) => Ok(None),
        Some(value) => Ok(coerce_decimal(Some(&value)).or_else(|| {
            debug!(value = ?value, "malformed optional monetary field dropped");
            None
        })),
    }
}

/// Deserializes a calendar date leniently.
///
/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp; anything else
/// (including null/missing) becomes `None`.
pub fn lenient_date<'de, D>(deserializer: D) -> Result<Option<chrono::NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(text) => Ok(parse_date(&text).or_else(|| {
            debug!(value = %text, "unparseable date dropped");
            None
        })),
    }
}

fn parse_date(text: &str) -> Option<chrono::NaiveDate> {
    if let Ok(date) = chrono::NaiveDate::from_str(text) {
        return Some(date);
    }
    chrono::DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|dt| dt.date_naive())
}

fn coerce_decimal(value: Option<&Value>) -> Option<Decimal> {
    match value {
        Some(Value::Number(n)) => Decimal::from_str(&n.to_string()).ok(),
        Some(Value::String(s)) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    }
}

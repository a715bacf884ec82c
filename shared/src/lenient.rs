//! Deserializers for form fields.
//!
//! The server stores whatever the client sends. HTML number inputs often
//! arrive as strings, a cleared input arrives as `""`, and a script may send
//! a number where the form has a text box. None of these helpers fail on a
//! well-formed JSON value: numbers that parse are kept as numbers, anything
//! else is kept as text.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// A numeric form field as received: a parsed number, or the raw text when
/// it does not parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric<T> {
    Number(T),
    Text(String),
}

/// Number types a form field can be read as
pub trait FormNumber: Sized {
    fn from_json(number: &Number) -> Option<Self>;
    fn from_text(text: &str) -> Option<Self>;
}

fn integral(value: f64) -> Option<i64> {
    let in_range = value >= i64::MIN as f64 && value <= i64::MAX as f64;
    (value.fract() == 0.0 && in_range).then_some(value as i64)
}

impl FormNumber for i64 {
    fn from_json(number: &Number) -> Option<Self> {
        number.as_i64().or_else(|| number.as_f64().and_then(integral))
    }

    fn from_text(text: &str) -> Option<Self> {
        text.parse::<i64>()
            .ok()
            .or_else(|| text.parse::<f64>().ok().and_then(integral))
    }
}

impl FormNumber for f64 {
    fn from_json(number: &Number) -> Option<Self> {
        number.as_f64()
    }

    fn from_text(text: &str) -> Option<Self> {
        text.parse::<f64>().ok().filter(|n| n.is_finite())
    }
}

fn optional_numeric<'de, D, T>(deserializer: D) -> Result<Option<Numeric<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: FormNumber,
{
    let field = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::Number(number)) => Some(
            T::from_json(&number)
                .map(Numeric::Number)
                .unwrap_or_else(|| Numeric::Text(number.to_string())),
        ),
        Some(Value::String(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(match T::from_text(trimmed) {
                    Some(n) => Numeric::Number(n),
                    None => Numeric::Text(text),
                })
            }
        }
        Some(other) => Some(Numeric::Text(other.to_string())),
    };
    Ok(field)
}

pub fn optional_integer<'de, D>(deserializer: D) -> Result<Option<Numeric<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    optional_numeric(deserializer)
}

pub fn optional_decimal<'de, D>(deserializer: D) -> Result<Option<Numeric<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    optional_numeric(deserializer)
}

/// Text field that also takes numbers and booleans, stored in their JSON form
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let field = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    };
    Ok(field)
}

/// Required text field; `null` reads as empty
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    optional_text(deserializer).map(Option::unwrap_or_default)
}

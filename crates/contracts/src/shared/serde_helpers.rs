//! Lenient deserializers for backend fields whose shape varies between endpoints.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts a populated object and yields `None` for anything else
/// (a bare id string, `null`, or a malformed object).
pub fn populated_or_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .filter(|v| v.is_object())
        .and_then(|v| serde_json::from_value(v).ok()))
}

/// Accepts either a JSON string or a number and yields it as a string.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Whole count from a JSON number or numeric string, rounding fractions.
/// Negative, non-finite and non-numeric values yield `None`.
fn whole_count(value: &Value) -> Option<u32> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !n.is_finite() || n < 0.0 {
        return None;
    }
    Some(u32::try_from(n.round() as u64).unwrap_or(u32::MAX))
}

/// Point weight of a price item: rounded and raised to at least 1, or
/// `None` when the value is missing or unusable.
pub fn lenient_points<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(whole_count).map(|n| n.max(1)))
}

/// Line quantity: rounded, with anything unusable read as 0.
pub fn lenient_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(whole_count).unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_whole_count_rounds_and_rejects_garbage() {
        assert_eq!(whole_count(&json!(2)), Some(2));
        assert_eq!(whole_count(&json!(1.5)), Some(2));
        assert_eq!(whole_count(&json!(" 3 ")), Some(3));
        assert_eq!(whole_count(&json!(-1)), None);
        assert_eq!(whole_count(&json!("abc")), None);
        assert_eq!(whole_count(&json!(null)), None);
        assert_eq!(whole_count(&json!(true)), None);
    }
}

use serde::{Deserialize, Deserializer, de::Error};
use serde_json::Value;

/// ===============================
/// Day counts as the server stores them
/// ===============================
/// Bookings altered through the form are stored with whatever the form
/// sent, so the same column comes back as `5` or `"5"`.
pub fn day_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| D::Error::custom(format!("invalid day count {}", n))),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("invalid day count `{}`", s))),
        other => Err(D::Error::custom(format!("invalid day count {}", other))),
    }
}

/// ===============================
/// Free text that may come back as null, a number or a string
/// ===============================
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "super::day_count")]
        days: u32,
        #[serde(deserialize_with = "super::text")]
        badge: String,
    }

    #[test]
    fn numbers_and_numeric_strings_are_both_accepted() {
        let a: Row = serde_json::from_str(r#"{"days": 10, "badge": "123"}"#).unwrap();
        let b: Row = serde_json::from_str(r#"{"days": " 10 ", "badge": 123}"#).unwrap();
        assert_eq!(a.days, 10);
        assert_eq!(b.days, 10);
        assert_eq!(b.badge, "123");
    }

    #[test]
    fn garbage_day_counts_fail() {
        assert!(serde_json::from_str::<Row>(r#"{"days": "ten", "badge": ""}"#).is_err());
        assert!(serde_json::from_str::<Row>(r#"{"days": -1, "badge": ""}"#).is_err());
        assert!(serde_json::from_str::<Row>(r#"{"days": null, "badge": ""}"#).is_err());
    }

    #[test]
    fn null_text_is_empty() {
        let row: Row = serde_json::from_str(r#"{"days": 1, "badge": null}"#).unwrap();
        assert_eq!(row.badge, "");
    }
}

//! Field decoders for records written by browser forms, where `null` stands
//! in for "not set" and numbers sometimes arrive as strings.

use serde::{
    de::{Error, IgnoredAny},
    Deserialize, Deserializer,
};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Treats `null` like an absent field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Accepts `12`, `12.5` or `"12.5"`. Anything that is not a finite number
/// decodes as `None`.
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<NumberOrText>::deserialize(deserializer)? {
        Some(NumberOrText::Number(n)) => Some(n),
        Some(NumberOrText::Text(text)) => text.trim().parse().ok(),
        Some(NumberOrText::Other(_)) | None => None,
    };
    Ok(value.filter(|n: &f64| n.is_finite()))
}

/// Like [`number`], for whole counts. Fractions are truncated and negative
/// values are rejected.
pub fn count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    match number(deserializer)? {
        Some(n) if n < 0.0 => Err(D::Error::custom(format!(
            "expected a non-negative count, got {}",
            n
        ))),
        Some(n) if n > f64::from(u32::MAX) => Err(D::Error::custom(format!(
            "count {} is out of range",
            n
        ))),
        Some(n) => Ok(Some(n.trunc() as u32)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Form {
        #[serde(default, deserialize_with = "null_as_default")]
        label: String,
        #[serde(default, deserialize_with = "number")]
        score: Option<f64>,
        #[serde(default, deserialize_with = "count")]
        minutes: Option<u32>,
    }

    fn form(json: &str) -> Form {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn null_and_missing_fall_back() {
        let f = form(r#"{"label":null,"score":null,"minutes":null}"#);
        assert_eq!(f.label, "");
        assert_eq!(f.score, None);
        assert_eq!(f.minutes, None);

        let f = form("{}");
        assert_eq!(f.label, "");
        assert_eq!(f.minutes, None);
    }

    #[test]
    fn numeric_strings_are_numbers() {
        let f = form(r#"{"score":" 12.5 ","minutes":"45"}"#);
        assert_eq!(f.score, Some(12.5));
        assert_eq!(f.minutes, Some(45));

        let f = form(r#"{"score":3,"minutes":7.9}"#);
        assert_eq!(f.score, Some(3.0));
        assert_eq!(f.minutes, Some(7));
    }

    #[test]
    fn unreadable_values_are_unset() {
        let f = form(r#"{"score":"ten","minutes":""}"#);
        assert_eq!(f.score, None);
        assert_eq!(f.minutes, None);

        let f = form(r#"{"score":true,"minutes":[1]}"#);
        assert_eq!(f.score, None);
        assert_eq!(f.minutes, None);
    }

    #[test]
    fn negative_count_is_rejected() {
        assert!(serde_json::from_str::<Form>(r#"{"minutes":-5}"#).is_err());
    }
}

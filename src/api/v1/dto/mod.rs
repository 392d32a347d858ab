pub mod auth;
pub mod bookmarks;
pub mod users;

use serde::{Deserialize, Deserializer};

/// Deserializer for tri-state PATCH fields.
///
/// With `#[serde(default, deserialize_with = "double_option")]`:
/// - field missing   -> None            (do not update)
/// - field null      -> Some(None)      (set NULL)
/// - field value     -> Some(Some(v))   (set value)
pub fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "super::double_option")]
        note: Option<Option<String>>,
    }

    #[test]
    fn tri_state_distinguishes_missing_null_and_value() {
        let missing: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.note, None);

        let null: Patch = serde_json::from_str(r#"{"note": null}"#).unwrap();
        assert_eq!(null.note, Some(None));

        let value: Patch = serde_json::from_str(r#"{"note": "x"}"#).unwrap();
        assert_eq!(value.note, Some(Some("x".to_string())));
    }
}

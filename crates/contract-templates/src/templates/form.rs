use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// A single filled-in form value.
///
/// Serialised untagged so a form posts as a plain JSON object of booleans,
/// strings, numbers, and arrays of nested objects. `null` is accepted and
/// reads as blank text, `false`, or an empty group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
    Number(f64),
    Group(Vec<FormData>),
    Empty,
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<Vec<FormData>> for FieldValue {
    fn from(value: Vec<FormData>) -> Self {
        Self::Group(value)
    }
}

/// Values for one template instance, keyed by field key.
///
/// Backed by an ordered map: the order in which a caller assigned values never
/// leaks into rendering. Missing keys read as blank text, `false`, or an empty
/// group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData {
    values: BTreeMap<String, FieldValue>,
}

impl FormData {
    pub const fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Builder-style insert, convenient for fixtures and defaults.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Text value with surrounding whitespace removed; blank when absent.
    ///
    /// Numbers are rendered the way a form input would echo them back.
    pub fn text(&self, key: &str) -> Cow<'_, str> {
        match self.values.get(key) {
            Some(FieldValue::Text(value)) => Cow::Borrowed(value.trim()),
            Some(FieldValue::Number(value)) if value.is_finite() => Cow::Owned(value.to_string()),
            _ => Cow::Borrowed(""),
        }
    }

    /// Trimmed text, or `None` when the slot is blank.
    pub fn filled(&self, key: &str) -> Option<Cow<'_, str>> {
        let value = self.text(key);
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }

    pub fn is_blank(&self, key: &str) -> bool {
        self.filled(key).is_none()
    }

    /// Checkbox state. Accepts the `"true"` string some form layers send.
    pub fn flag(&self, key: &str) -> bool {
        match self.values.get(key) {
            Some(FieldValue::Flag(value)) => *value,
            Some(FieldValue::Text(value)) => value.trim().eq_ignore_ascii_case("true"),
            _ => false,
        }
    }

    /// Entries of a repeated group; empty when absent or not a group.
    pub fn group(&self, key: &str) -> &[FormData] {
        match self.values.get(key) {
            Some(FieldValue::Group(entries)) => entries,
            _ => &[],
        }
    }

    /// Returns a copy of `defaults` with every value present here laid over it.
    pub fn merged_over(&self, defaults: &FormData) -> FormData {
        let mut merged = defaults.clone();
        for (key, value) in &self.values {
            merged.values.insert(key.clone(), value.clone());
        }
        merged
    }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut data = FormData::new();
        for (key, value) in iter {
            data.set(key, value);
        }
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_keys_read_as_blank() {
        let data = FormData::new();
        assert_eq!(data.text("davaciAd"), "");
        assert!(data.is_blank("davaciAd"));
        assert!(!data.flag("kidemTazminati"));
        assert!(data.group("tanikler").is_empty());
    }

    #[test]
    fn whitespace_only_text_is_blank() {
        let data = FormData::new().with("davaciAd", "   ");
        assert!(data.is_blank("davaciAd"));
        assert_eq!(data.filled("davaciAd"), None);
    }

    #[test]
    fn checkbox_strings_are_read_as_flags() {
        let data = FormData::new()
            .with("kidemTazminati", "true")
            .with("ihbarTazminati", "false")
            .with("mobbing", true);
        assert!(data.flag("kidemTazminati"));
        assert!(!data.flag("ihbarTazminati"));
        assert!(data.flag("mobbing"));
    }

    #[test]
    fn deserializes_plain_json_objects() {
        let data: FormData = serde_json::from_value(json!({
            "davaciAd": "Ayşe Yılmaz",
            "kidemTazminati": true,
            "calismaYili": 4,
            "tanikler": [{ "ad": "Ali Veli", "mobbing": false }]
        }))
        .expect("form data parses");

        assert_eq!(data.text("davaciAd"), "Ayşe Yılmaz");
        assert!(data.flag("kidemTazminati"));
        assert_eq!(data.text("calismaYili"), "4");
        let witnesses = data.group("tanikler");
        assert_eq!(witnesses.len(), 1);
        assert_eq!(witnesses[0].text("ad"), "Ali Veli");
    }

    #[test]
    fn null_values_read_as_blank() {
        let data: FormData = serde_json::from_str(
            r#"{"davaciAd": null, "aylikBrutUcret": null, "kidemTazminati": null,
                "tanikler": [{"ad": "Ali Veli", "mobbing": null}], "ekler": null}"#,
        )
        .expect("null values parse");

        assert!(data.is_blank("davaciAd"));
        assert!(data.is_blank("aylikBrutUcret"));
        assert!(!data.flag("kidemTazminati"));
        assert!(data.group("ekler").is_empty());
        let witnesses = data.group("tanikler");
        assert_eq!(witnesses[0].text("ad"), "Ali Veli");
        assert!(!witnesses[0].flag("mobbing"));
    }

    #[test]
    fn assignment_order_does_not_matter() {
        let first = FormData::new().with("a", true).with("b", false).with("c", "x");
        let second = FormData::new().with("c", "x").with("b", false).with("a", true);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).expect("serializes"),
            serde_json::to_string(&second).expect("serializes")
        );
    }

    #[test]
    fn merged_over_prefers_caller_values() {
        let defaults = FormData::new().with("a", "").with("b", false);
        let data = FormData::new().with("a", "dolu").with("z", "extra");
        let merged = data.merged_over(&defaults);
        assert_eq!(merged.text("a"), "dolu");
        assert!(!merged.flag("b"));
        assert_eq!(merged.text("z"), "extra");
    }
}

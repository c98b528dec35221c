use serde::{Deserialize, Serialize};

/// Form field name for the sender's name
pub const NAME_FIELD: &str = "name";

/// Form field name for the sender's email address
pub const EMAIL_FIELD: &str = "email";

/// Form field name for the message body
pub const MESSAGE_FIELD: &str = "message";

/// Every named control of the form, in document order, as posted to the
/// form's action URL.
///
/// Besides the three validated fields this carries whatever else the page
/// declares (hidden `_subject`, honeypots, ...). Values are kept exactly as
/// typed; trimming only applies to validation. A name may repeat.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct FormEntries(Vec<(String, String)>);

impl FormEntries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    /// First value submitted under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn as_slice(&self) -> &[(String, String)] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormEntries {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_keep_document_order_and_raw_values() {
        let entries: FormEntries = [
            (NAME_FIELD, " Andrew "),
            ("_subject", "New message"),
            (EMAIL_FIELD, "test@test.com"),
        ]
        .into_iter()
        .collect();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries.as_slice()[0], ("name".to_string(), " Andrew ".to_string()));
        assert_eq!(entries.as_slice()[1].0, "_subject");
        assert_eq!(entries.get(NAME_FIELD), Some(" Andrew "));
        assert_eq!(entries.get(MESSAGE_FIELD), None);
    }

    #[test]
    fn test_repeated_names_are_kept() {
        let mut entries = FormEntries::new();
        entries.push("topic", "rust");
        entries.push("topic", "wasm");

        assert_eq!(entries.len(), 2);
        assert_eq!(entries.get("topic"), Some("rust"));
        assert_eq!(entries.iter().last(), Some(("topic", "wasm")));
    }

    #[test]
    fn test_json_is_a_list_of_pairs() {
        let entries: FormEntries = [(NAME_FIELD, "Andrew"), (EMAIL_FIELD, "a@b.com")]
            .into_iter()
            .collect();
        let json = serde_json::to_value(&entries).unwrap();

        assert_eq!(json, serde_json::json!([["name", "Andrew"], ["email", "a@b.com"]]));
        let back: FormEntries = serde_json::from_value(json).unwrap();
        assert_eq!(back, entries);
    }
}

//! Form submission payloads

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::model::{FormKind, Notification};

/// Checkbox group collected into a list on the quote form
pub const SERVICES_KEY: &str = "services";

/// Value of one payload key
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum FieldEntry {
    Single(String),
    Multiple(Vec<String>),
}

impl FieldEntry {
    fn push(&mut self, value: String) {
        match self {
            FieldEntry::Single(first) => {
                let first = std::mem::take(first);
                *self = FieldEntry::Multiple(vec![first, value]);
            }
            FieldEntry::Multiple(values) => values.push(value),
        }
    }
}

/// Submitted form data, keys kept in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPayload {
    entries: Vec<(String, FieldEntry)>,
}

impl FormPayload {
    pub fn get(&self, key: &str) -> Option<&FieldEntry> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn slot(&mut self, key: &str) -> Option<&mut FieldEntry> {
        self.entries.iter_mut().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    fn set(&mut self, key: &str, entry: FieldEntry) {
        match self.slot(key) {
            Some(slot) => *slot = entry,
            None => self.entries.push((key.to_string(), entry)),
        }
    }
}

impl Serialize for FormPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Quote form payload. Repeated keys fold into lists and the checked
/// `services` values always come out as a list, even when none are checked.
pub fn quote_form_payload<K, V>(entries: &[(K, V)]) -> FormPayload
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut payload = FormPayload::default();
    for (key, value) in entries {
        let (key, value) = (key.as_ref(), value.as_ref().to_string());
        match payload.slot(key) {
            Some(slot) => slot.push(value),
            None => payload.entries.push((key.to_string(), FieldEntry::Single(value))),
        }
    }

    let services = entries
        .iter()
        .filter(|(key, _)| key.as_ref() == SERVICES_KEY)
        .map(|(_, value)| value.as_ref().to_string())
        .collect();
    payload.set(SERVICES_KEY, FieldEntry::Multiple(services));
    payload
}

/// Contact form payload: one value per key, the last one wins
pub fn contact_form_payload<K, V>(entries: &[(K, V)]) -> FormPayload
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut payload = FormPayload::default();
    for (key, value) in entries {
        payload.set(key.as_ref(), FieldEntry::Single(value.as_ref().to_string()));
    }
    payload
}

/// Build the payload for `form` and the toast shown once it is accepted
pub fn submit_form<K, V>(form: FormKind, entries: &[(K, V)]) -> (FormPayload, Notification)
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let payload = match form {
        FormKind::Quote => quote_form_payload(entries),
        FormKind::Contact => contact_form_payload(entries),
    };
    (payload, Notification::form_submitted(form))
}

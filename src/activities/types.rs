//! Activity data types
//!
//! Snapshot types for the `GET /activities` payload. The component never
//! mutates these; every refresh replaces them wholesale.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single activity as reported by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Free-form description
    pub description: String,
    /// Human readable schedule, e.g. "Fridays, 3:30 PM - 5:00 PM"
    pub schedule: String,
    /// Capacity
    pub max_participants: i64,
    /// Enrolled participants in server order
    #[serde(default)]
    pub participants: Vec<Participant>,
}

impl Activity {
    /// Capacity minus current enrollment.
    ///
    /// Signed: an over-filled activity reports a negative count rather than
    /// saturating at zero.
    pub fn spots_left(&self) -> i64 {
        self.max_participants - self.participants.len() as i64
    }

    pub fn has_participants(&self) -> bool {
        !self.participants.is_empty()
    }
}

/// A participant entry.
///
/// The backend has historically sent both bare email strings and objects
/// carrying an `email` field, so both shapes are accepted. Anything else is
/// kept verbatim and rendered as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Participant {
    /// Bare identifier, normally an email address
    Identifier(String),
    /// Any JSON object, normally carrying an `email`
    Record(ParticipantRecord),
    /// Any other JSON value
    Other(serde_json::Value),
}

/// Structured participant entry.
///
/// Kept as the object the backend sent, key order included, so the JSON
/// fallback reproduces it exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantRecord(serde_json::Map<String, serde_json::Value>);

impl ParticipantRecord {
    /// The `email` field, if it is a string
    pub fn email(&self) -> Option<&str> {
        self.0.get("email").and_then(serde_json::Value::as_str)
    }

    /// Any field of the record
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }
}

impl Participant {
    /// The string shown next to the unregister button.
    ///
    /// This string is also what gets sent back as the `email` parameter when
    /// unregistering.
    pub fn display(&self) -> String {
        match self {
            Participant::Identifier(id) => id.clone(),
            Participant::Record(record) => match record.email() {
                Some(email) if !email.is_empty() => email.to_string(),
                _ => serde_json::Value::Object(record.0.clone()).to_string(),
            },
            Participant::Other(value) => value.to_string(),
        }
    }
}

impl From<&str> for Participant {
    fn from(id: &str) -> Self {
        Participant::Identifier(id.to_string())
    }
}

/// Activities keyed by name, in the order the backend listed them.
///
/// A JSON object is decoded entry by entry so the key order of the response
/// survives; a `HashMap` would scramble the cards on every refresh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityCatalog {
    entries: Vec<(String, Activity)>,
}

impl ActivityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an activity; a repeated name replaces the earlier entry in place.
    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = activity,
            None => self.entries.push((name, activity)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(name, activity)` pairs in response order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), a))
    }

    /// Activity names in response order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }
}

impl<'de> Deserialize<'de> for ActivityCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = ActivityCatalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity details")
            }

            fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut catalog = ActivityCatalog {
                    entries: Vec::with_capacity(access.size_hint().unwrap_or(0)),
                };
                while let Some((name, activity)) = access.next_entry::<String, Activity>()? {
                    catalog.insert(name, activity);
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

impl Serialize for ActivityCatalog {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.entries.iter().map(|(n, a)| (n, a)))
    }
}

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Operator
// ────────────────────────────────────────────────────────────────────────────

/// A single operator record from the data package.
///
/// Only `id`, `name`, `role` and `unit` carry meaning for searching and
/// filtering. Everything else found in the record is kept in `extra`, in the
/// order it appeared, so views can show it as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operator {
    /// Stable identifier, also the icon file stem. Numeric ids in the JSON are
    /// stored in their decimal form.
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    pub role: String,
    pub unit: String,
    /// Additional display attributes (real name, birthplace, ratings, ...).
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl Operator {
    /// Convenience constructor for records without extra attributes.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        role: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
            unit: unit.into(),
            extra: IndexMap::new(),
        }
    }

    /// Case-insensitive substring match on the name. An empty query matches.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query.to_lowercase())
    }

    /// Case-insensitive equality against role or unit.
    pub fn matches_filter(&self, value: &str) -> bool {
        let v = value.to_lowercase();
        self.role.to_lowercase() == v || self.unit.to_lowercase() == v
    }

    /// Extra attribute rendered as plain text, if present.
    pub fn extra_text(&self, key: &str) -> Option<String> {
        self.extra.get(key).map(|v| match v {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Dataset
// ────────────────────────────────────────────────────────────────────────────

/// Operator records keyed by identifier, in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    pub operators: IndexMap<String, Operator>,
}

impl Dataset {
    /// Parse `operators.json` content.
    ///
    /// Records without an `id` field take their map key as identifier.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        let mut ds: Dataset = serde_json::from_str(text)?;
        for (key, op) in ds.operators.iter_mut() {
            if op.id.is_empty() {
                op.id = key.clone();
            }
        }
        Ok(ds)
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = &Operator> {
        self.operators.values()
    }
}

impl FromIterator<Operator> for Dataset {
    fn from_iter<T: IntoIterator<Item = Operator>>(iter: T) -> Self {
        Self {
            operators: iter.into_iter().map(|op| (op.id.clone(), op)).collect(),
        }
    }
}

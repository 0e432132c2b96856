use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Record returned by an integration's data endpoint
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IntegrationItem {
    #[serde(default, deserialize_with = "id_from_any")]
    pub id: String,
    #[serde(
        default,
        deserialize_with = "text_from_any",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "text_from_any",
        skip_serializing_if = "Option::is_none"
    )]
    pub item_type: Option<String>,
    #[serde(
        default,
        deserialize_with = "time_from_any",
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_time: Option<String>,
    #[serde(
        default,
        deserialize_with = "time_from_any",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified_time: Option<String>,
}

impl IntegrationItem {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_type(mut self, item_type: impl Into<String>) -> Self {
        self.item_type = Some(item_type.into());
        self
    }

    pub fn with_times(mut self, created: Option<String>, modified: Option<String>) -> Self {
        self.creation_time = created;
        self.last_modified_time = modified;
        self
    }

    /// "name (type)" with "Unnamed" / "Unknown type" for missing or empty parts
    pub fn display_title(&self) -> String {
        let name = non_empty(&self.name).unwrap_or("Unnamed");
        let item_type = non_empty(&self.item_type).unwrap_or("Unknown type");
        format!("{} ({})", name, item_type)
    }

    pub fn created_on(&self) -> Option<NaiveDate> {
        non_empty(&self.creation_time).and_then(parse_date)
    }

    pub fn modified_on(&self) -> Option<NaiveDate> {
        non_empty(&self.last_modified_time).and_then(parse_date)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// RFC 3339 timestamp or a bare `YYYY-MM-DD` date
fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    let date_part = raw.get(..10)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

fn id_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Strings as-is, other scalars in their JSON form
fn text_from_any<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Null => None,
        other => Some(other.to_string()),
    })
}

/// Timestamps as strings, or epoch milliseconds converted to RFC 3339
fn time_from_any<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => {
            let millis = n.as_i64().or_else(|| n.as_f64().map(|f| f as i64));
            millis
                .and_then(DateTime::<Utc>::from_timestamp_millis)
                .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
                .or_else(|| Some(n.to_string()))
        }
        _ => None,
    })
}

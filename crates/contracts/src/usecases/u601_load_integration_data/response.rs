use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::item::IntegrationItem;

/// Response body of a load endpoint.
///
/// Backends answer either with an envelope or with a bare item array.
/// Anything else is kept as-is and renders as "no data".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LoadedData {
    Envelope(ItemsEnvelope),
    Bare(Vec<IntegrationItem>),
    Unrecognized(Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemsEnvelope {
    pub items: Vec<IntegrationItem>,
    #[serde(
        default,
        deserialize_with = "count_from_any",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_items: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ItemsEnvelope {
    pub fn new(items: Vec<IntegrationItem>, message: impl Into<String>) -> Self {
        Self {
            total_items: Some(items.len() as u64),
            items,
            message: Some(message.into()),
        }
    }
}

/// Uniform shape the renderer works with
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoadedItems {
    pub items: Vec<IntegrationItem>,
    pub total_count: u64,
    pub message: Option<String>,
}

impl LoadedItems {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl LoadedData {
    pub fn normalize(&self) -> LoadedItems {
        match self {
            LoadedData::Envelope(env) => LoadedItems {
                items: env.items.clone(),
                // a zero total falls back to the list length
                total_count: env
                    .total_items
                    .filter(|n| *n > 0)
                    .unwrap_or(env.items.len() as u64),
                message: env.message.clone().filter(|m| !m.is_empty()),
            },
            LoadedData::Bare(items) => LoadedItems {
                items: items.clone(),
                total_count: items.len() as u64,
                message: None,
            },
            LoadedData::Unrecognized(_) => LoadedItems::default(),
        }
    }
}

fn count_from_any<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> LoadedData {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_envelope_uses_total_items() {
        let data = parse(json!({
            "items": [{"id": "1"}, {"id": "2"}],
            "total_items": 57,
            "message": "partial"
        }));
        let normalized = data.normalize();
        assert_eq!(normalized.total_count, 57);
        assert_eq!(normalized.items.len(), 2);
        assert_eq!(normalized.message.as_deref(), Some("partial"));
    }

    #[test]
    fn test_envelope_without_total_counts_items() {
        let normalized = parse(json!({"items": [{"id": "1"}, {"id": "2"}]})).normalize();
        assert_eq!(normalized.total_count, 2);
        assert_eq!(normalized.message, None);

        let normalized = parse(json!({"items": [{"id": "1"}], "total_items": 0})).normalize();
        assert_eq!(normalized.total_count, 1);
    }

    #[test]
    fn test_bare_array_matches_envelope() {
        let bare = parse(json!([{"id": "a", "name": "A"}, {"id": "b"}])).normalize();
        let env = parse(json!({"items": [{"id": "a", "name": "A"}, {"id": "b"}]})).normalize();
        assert!(matches!(
            parse(json!([{"id": "a"}])),
            LoadedData::Bare(_)
        ));
        assert_eq!(bare, env);
    }

    #[test]
    fn test_unexpected_shapes_are_empty() {
        for value in [json!({"results": []}), json!({"items": "nope"}), json!("text"), json!(null)] {
            let normalized = parse(value).normalize();
            assert!(normalized.is_empty());
            assert_eq!(normalized.total_count, 0);
        }
    }

    #[test]
    fn test_one_odd_item_keeps_every_row() {
        let env = parse(json!({
            "items": [{"id": "1", "name": "Good"}, {"id": "2", "creation_time": 1710511346000i64}],
            "total_items": 2
        }));
        assert!(matches!(env, LoadedData::Envelope(_)));
        let normalized = env.normalize();
        assert_eq!(normalized.items.len(), 2);
        assert_eq!(normalized.total_count, 2);

        let bare = parse(json!([{"id": "1", "name": "ok"}, {"id": "2", "name": 5}]));
        assert!(matches!(bare, LoadedData::Bare(_)));
        let normalized = bare.normalize();
        assert_eq!(normalized.items.len(), 2);
        assert_eq!(normalized.items[1].name.as_deref(), Some("5"));
    }

    #[test]
    fn test_empty_envelope_keeps_message() {
        let normalized = parse(json!({"items": [], "message": "nothing shared"})).normalize();
        assert!(normalized.is_empty());
        assert_eq!(normalized.message.as_deref(), Some("nothing shared"));
    }

    #[test]
    fn test_envelope_builder_counts() {
        let env = ItemsEnvelope::new(vec![IntegrationItem::new("x")], "done");
        let value = serde_json::to_value(LoadedData::Envelope(env)).unwrap();
        assert_eq!(
            value,
            json!({"items": [{"id": "x"}], "total_items": 1, "message": "done"})
        );
    }
}

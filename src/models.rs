//! Catalog Models
//!
//! Fetched item records and persisted wishlist entries.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Number, Value};

// ========================
// Item Types
// ========================

/// Catalog section an item was fetched from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Design,
    Product,
    Designer,
    Testimonial,
    Blog,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Design => "design",
            ItemType::Product => "product",
            ItemType::Designer => "designer",
            ItemType::Testimonial => "testimonial",
            ItemType::Blog => "blog",
        }
    }

    /// Capitalized label used in modal headings ("Product Details")
    pub fn label(&self) -> &'static str {
        match self {
            ItemType::Design => "Design",
            ItemType::Product => "Product",
            ItemType::Designer => "Designer",
            ItemType::Testimonial => "Testimonial",
            ItemType::Blog => "Blog",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ========================
// Identifiers
// ========================

/// Item identifier, normalized to text whether the source used a number or a string
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric ids print the way they display, so `3` and `3.0` both become `"3"`
    fn from_number(n: &Number) -> Self {
        ItemId(Primitive::Number(n.clone()).to_string())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ItemId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(ItemId(s)),
            Value::Number(n) => Ok(ItemId::from_number(&n)),
            other => Err(de::Error::custom(format!("invalid item id: {}", other))),
        }
    }
}

/// Wishlist membership key: the (type, id) pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WishlistKey {
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub id: ItemId,
}

impl WishlistKey {
    pub fn new(item_type: ItemType, id: ItemId) -> Self {
        Self { item_type, id }
    }
}

impl fmt::Display for WishlistKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.item_type, self.id)
    }
}

// ========================
// Costs
// ========================

/// A raw cost as it appears in data: a number or free text like "PKR 2,000"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cost {
    Number(f64),
    Text(String),
}

impl From<&str> for Cost {
    fn from(s: &str) -> Self {
        Cost::Text(s.to_string())
    }
}

impl From<f64> for Cost {
    fn from(n: f64) -> Self {
        Cost::Number(n)
    }
}

// ========================
// Item Records
// ========================

/// Scalar field value
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Null => f.write_str("null"),
            Primitive::Bool(b) => write!(f, "{}", b),
            Primitive::Number(n) => match n.as_f64() {
                // Whole floats print without a trailing ".0"
                Some(v) if n.is_f64() && v.fract() == 0.0 && v.abs() < 1e15 => write!(f, "{}", v as i64),
                _ => write!(f, "{}", n),
            },
            Primitive::Text(s) => f.write_str(s),
        }
    }
}

/// Rendering hint attached to a sequence when it is ingested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceHint {
    /// Rendered as a comma-joined list
    Plain,
    /// Every element is a record with a name and a price, rendered as a grid
    PricedPairs,
}

/// Ordered sequence of values
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    pub hint: SequenceHint,
    pub items: Vec<FieldValue>,
}

/// A field value: primitive, sequence or nested record
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Primitive(Primitive),
    Sequence(Sequence),
    Record(ItemRecord),
}

impl FieldValue {
    pub fn text(s: impl Into<String>) -> Self {
        FieldValue::Primitive(Primitive::Text(s.into()))
    }

    pub fn as_primitive(&self) -> Option<&Primitive> {
        match self {
            FieldValue::Primitive(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&ItemRecord> {
        match self {
            FieldValue::Record(r) => Some(r),
            _ => None,
        }
    }

    /// JavaScript-style truthiness, used for optional display fields
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Primitive(Primitive::Null) => false,
            FieldValue::Primitive(Primitive::Bool(b)) => *b,
            FieldValue::Primitive(Primitive::Number(n)) => n.as_f64().map_or(false, |v| v != 0.0 && !v.is_nan()),
            FieldValue::Primitive(Primitive::Text(s)) => !s.is_empty(),
            _ => true,
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => FieldValue::Primitive(Primitive::Null),
            Value::Bool(b) => FieldValue::Primitive(Primitive::Bool(b)),
            Value::Number(n) => FieldValue::Primitive(Primitive::Number(n)),
            Value::String(s) => FieldValue::Primitive(Primitive::Text(s)),
            Value::Array(values) => {
                let items: Vec<FieldValue> = values.into_iter().map(FieldValue::from).collect();
                let hint = if is_priced_pairs(&items) { SequenceHint::PricedPairs } else { SequenceHint::Plain };
                FieldValue::Sequence(Sequence { hint, items })
            }
            Value::Object(map) => FieldValue::Record(ItemRecord::from(map)),
        }
    }
}

fn is_priced_pairs(items: &[FieldValue]) -> bool {
    !items.is_empty()
        && items.iter().all(|item| match item {
            FieldValue::Record(r) => r.contains("name") && (r.contains("price") || r.contains("cost")),
            _ => false,
        })
}

/// A fetched catalog entity: field names mapped to values, in document order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemRecord {
    fields: Vec<(String, FieldValue)>,
}

impl ItemRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, replacing any existing value under the same name
    pub fn with(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        let name = name.into();
        match self.fields.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Truthy primitive field rendered as text
    pub fn text(&self, name: &str) -> Option<String> {
        match self.get(name) {
            Some(value @ FieldValue::Primitive(p)) if value.is_truthy() => Some(p.to_string()),
            _ => None,
        }
    }

    /// Truthy numeric field; numeric strings are accepted
    pub fn number(&self, name: &str) -> Option<f64> {
        let v = match self.get(name)? {
            FieldValue::Primitive(Primitive::Number(n)) => n.as_f64()?,
            FieldValue::Primitive(Primitive::Text(s)) => s.trim().parse().ok()?,
            _ => return None,
        };
        (v != 0.0 && !v.is_nan()).then_some(v)
    }

    /// Truthy cost field as a raw `Cost`
    pub fn cost(&self, name: &str) -> Option<Cost> {
        match self.get(name)? {
            FieldValue::Primitive(Primitive::Number(n)) => n.as_f64().filter(|v| *v != 0.0).map(Cost::Number),
            FieldValue::Primitive(Primitive::Text(s)) if !s.is_empty() => Some(Cost::Text(s.clone())),
            _ => None,
        }
    }

    /// The record's `id`, normalized to text
    pub fn id(&self) -> Option<ItemId> {
        match self.get("id")? {
            FieldValue::Primitive(Primitive::Text(s)) => Some(ItemId::new(s.clone())),
            FieldValue::Primitive(Primitive::Number(n)) => Some(ItemId::from_number(n)),
            _ => None,
        }
    }
}

impl From<Map<String, Value>> for ItemRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self {
            fields: map.into_iter().map(|(k, v)| (k, FieldValue::from(v))).collect(),
        }
    }
}

impl<'de> Deserialize<'de> for ItemRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Map::<String, Value>::deserialize(deserializer).map(ItemRecord::from)
    }
}

// ========================
// Wishlist
// ========================

/// Display snapshot captured when a card's wishlist control is pressed
#[derive(Debug, Clone, PartialEq)]
pub struct WishlistPayload {
    pub key: WishlistKey,
    pub title: String,
    pub image: String,
    pub cost: Option<Cost>,
}

/// A persisted wishlist entry; snapshot fields never change after insertion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistEntry {
    #[serde(flatten)]
    pub key: WishlistKey,
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<Cost>,
    /// Capture time, epoch milliseconds
    pub ts: i64,
}

impl WishlistEntry {
    pub fn from_payload(payload: WishlistPayload, ts: i64) -> Self {
        Self {
            key: payload.key,
            title: payload.title,
            image: payload.image,
            cost: payload.cost,
            ts,
        }
    }

    /// Record view of the snapshot, for the detail builder
    pub fn to_record(&self) -> ItemRecord {
        let mut record = ItemRecord::new()
            .with("id", FieldValue::text(self.key.id.as_str()))
            .with("type", FieldValue::text(self.key.item_type.as_str()))
            .with("title", FieldValue::text(self.title.clone()))
            .with("image", FieldValue::text(self.image.clone()));
        match &self.cost {
            Some(Cost::Text(s)) => record = record.with("cost", FieldValue::text(s.clone())),
            Some(Cost::Number(n)) => {
                if let Some(n) = Number::from_f64(*n) {
                    record = record.with("cost", FieldValue::Primitive(Primitive::Number(n)));
                }
            }
            None => {}
        }
        record.with("added_on", FieldValue::text(crate::format::format_date_millis(self.ts)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> ItemRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_record_preserves_field_order() {
        let r = record(json!({"zeta": 1, "alpha": 2, "mid": 3}));
        let names: Vec<&str> = r.fields().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_priced_pairs_hint_decided_at_ingestion() {
        let r = record(json!({
            "products": [{"name": "Lamp", "price": "PKR 100"}, {"name": "Rug", "price": 50}],
            "mixed": [{"name": "Lamp", "price": 1}, "plain"],
            "unpriced": [{"name": "Lamp"}],
            "empty": []
        }));
        let hint = |k: &str| match r.get(k) {
            Some(FieldValue::Sequence(s)) => s.hint,
            other => panic!("expected sequence, got {:?}", other),
        };
        assert_eq!(hint("products"), SequenceHint::PricedPairs);
        assert_eq!(hint("mixed"), SequenceHint::Plain);
        assert_eq!(hint("unpriced"), SequenceHint::Plain);
        assert_eq!(hint("empty"), SequenceHint::Plain);
    }

    #[test]
    fn test_numeric_and_text_ids_normalize() {
        assert_eq!(record(json!({"id": 7})).id(), Some(ItemId::new("7")));
        assert_eq!(record(json!({"id": "7"})).id(), Some(ItemId::new("7")));
        assert_eq!(record(json!({"name": "x"})).id(), None);
    }

    #[test]
    fn test_whole_float_id_matches_integer_id() {
        assert_eq!(record(json!({"id": 3.0})).id(), Some(ItemId::new("3")));
        assert_eq!(record(json!({"id": 3.5})).id(), Some(ItemId::new("3.5")));

        let stored: WishlistEntry =
            serde_json::from_value(json!({"type": "design", "id": 3.0, "title": "", "ts": 0})).unwrap();
        let fetched = WishlistKey::new(ItemType::Design, record(json!({"id": 3})).id().unwrap());
        assert_eq!(stored.key, fetched);
    }

    #[test]
    fn test_keys_with_separator_stay_distinct() {
        let a = WishlistKey::new(ItemType::Product, ItemId::new("a:b"));
        let b = WishlistKey::new(ItemType::Product, ItemId::new("a"));
        assert_ne!(a, b);
        assert_eq!(a.to_string(), "product:a:b");
    }

    #[test]
    fn test_truthy_accessors() {
        let r = record(json!({"rating": 0, "cost": "", "trend": "Hot", "price": 1200}));
        assert_eq!(r.number("rating"), None);
        assert_eq!(r.cost("cost"), None);
        assert_eq!(r.text("trend").as_deref(), Some("Hot"));
        assert_eq!(r.cost("price"), Some(Cost::Number(1200.0)));
    }

    #[test]
    fn test_entry_persisted_shape() {
        let entry = WishlistEntry {
            key: WishlistKey::new(ItemType::Product, ItemId::new("p1")),
            title: "Lamp".to_string(),
            image: "lamp.jpg".to_string(),
            cost: Some(Cost::from("PKR 2,000")),
            ts: 1_700_000_000_000,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "product");
        assert_eq!(json["id"], "p1");
        assert_eq!(json["cost"], "PKR 2,000");

        let back: WishlistEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_entry_accepts_legacy_fields() {
        let json = json!({"key": "design:3", "type": "design", "id": 3, "title": "Loft", "image": "l.jpg", "cost": 4500, "ts": 1});
        let entry: WishlistEntry = serde_json::from_value(json).unwrap();
        assert_eq!(entry.key, WishlistKey::new(ItemType::Design, ItemId::new("3")));
        assert_eq!(entry.cost, Some(Cost::Number(4500.0)));
    }
}

//! Catalog Card Models
//!
//! Display data derived from fetched records, one shape per card kind.

use serde_json::Value;

use crate::error::CatalogError;
use crate::format::{excerpt, format_date_str, stars};
use crate::models::{Cost, ItemId, ItemRecord, ItemType, WishlistKey, WishlistPayload};

/// Extract the records under `field` from a fetched catalog document.
/// Non-object elements are skipped.
pub fn parse_collection(json: &str, field: &str) -> Result<Vec<ItemRecord>, CatalogError> {
    let doc: Value = serde_json::from_str(json)?;
    let items = match doc.get(field) {
        Some(Value::Array(items)) => items,
        _ => return Err(CatalogError::MissingField(field.to_string())),
    };

    Ok(items
        .iter()
        .filter_map(|v| match v {
            Value::Object(map) => Some(ItemRecord::from(map.clone())),
            _ => None,
        })
        .collect())
}

/// The prefix of `items` a section renders
pub fn visible_items(items: &[ItemRecord], limit: Option<usize>) -> &[ItemRecord] {
    match limit {
        Some(n) => &items[..n.min(items.len())],
        None => items,
    }
}

/// Design, product and designer cards
#[derive(Debug, Clone, PartialEq)]
pub struct CardModel {
    pub item_type: ItemType,
    pub key: WishlistKey,
    pub title: String,
    pub image: String,
    pub trend: String,
    pub category: Option<String>,
    pub rating: Option<String>,
    pub description: String,
    pub cost: Option<Cost>,
    /// Full record, handed to the detail view on demand
    pub record: ItemRecord,
}

impl CardModel {
    pub fn from_record(record: &ItemRecord, item_type: ItemType, placeholder_image: &str) -> Self {
        let title = record
            .text("name")
            .or_else(|| record.text("title"))
            .unwrap_or_else(|| "Untitled".to_string());
        let id = record.id().unwrap_or_else(|| ItemId::new(title.clone()));

        Self {
            item_type,
            key: WishlistKey::new(item_type, id),
            image: record.text("image").unwrap_or_else(|| placeholder_image.to_string()),
            trend: record.text("trend").unwrap_or_else(|| "New".to_string()),
            category: record.text("category").or_else(|| record.text("type")),
            rating: record.text("rating"),
            description: record
                .text("description")
                .or_else(|| record.text("bio"))
                .or_else(|| record.text("excerpt"))
                .unwrap_or_default(),
            cost: record.cost("cost").or_else(|| record.cost("price")),
            title,
            record: record.clone(),
        }
    }

    /// Snapshot captured by the wishlist control
    pub fn payload(&self) -> WishlistPayload {
        WishlistPayload {
            key: self.key.clone(),
            title: self.title.clone(),
            image: self.image.clone(),
            cost: self.cost.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestimonialModel {
    pub name: String,
    pub role_line: String,
    pub image: String,
    pub message: String,
    pub excerpt: String,
    pub stars: String,
}

impl TestimonialModel {
    pub fn from_record(record: &ItemRecord, placeholder_image: &str, excerpt_len: usize) -> Self {
        let message = record.text("message").unwrap_or_default();
        let role_line = [record.text("role"), record.text("location")]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            name: record.text("name").unwrap_or_else(|| "Anonymous".to_string()),
            role_line,
            image: record.text("image").unwrap_or_else(|| placeholder_image.to_string()),
            excerpt: excerpt(&message, excerpt_len),
            stars: stars(record.number("rating").unwrap_or(0.0)),
            message,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlogModel {
    pub title: String,
    pub image: String,
    pub excerpt: String,
    pub meta: String,
    pub content: String,
}

impl BlogModel {
    pub fn from_record(record: &ItemRecord, placeholder_image: &str) -> Self {
        let author = record.text("author").unwrap_or_else(|| "Unknown".to_string());
        let meta = match record.text("date") {
            Some(date) => format!("By {} • {}", author, format_date_str(&date)),
            None => format!("By {}", author),
        };

        Self {
            title: record.text("title").unwrap_or_else(|| "Untitled".to_string()),
            image: record.text("image").unwrap_or_else(|| placeholder_image.to_string()),
            excerpt: record.text("excerpt").unwrap_or_default(),
            content: record.text("content").unwrap_or_default(),
            meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PLACEHOLDER: &str = "images/placeholder.jpg";

    fn record(value: Value) -> ItemRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_parse_collection() {
        let json = r#"{"products": [{"id": "p1", "name": "Lamp"}, 42, {"id": "p2"}]}"#;
        let items = parse_collection(json, "products").unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].id(), Some(ItemId::new("p2")));
    }

    #[test]
    fn test_parse_collection_errors() {
        assert!(matches!(parse_collection("{}", "blogs"), Err(CatalogError::MissingField(f)) if f == "blogs"));
        assert!(matches!(parse_collection("nope", "blogs"), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_visible_items_prefix() {
        let items: Vec<ItemRecord> = (0..5).map(|i| record(json!({"id": i}))).collect();
        assert_eq!(visible_items(&items, Some(3)).len(), 3);
        assert_eq!(visible_items(&items[..2], Some(3)).len(), 2);
        assert_eq!(visible_items(&items, None).len(), 5);
    }

    #[test]
    fn test_card_fallbacks() {
        let card = CardModel::from_record(&record(json!({"id": 9})), ItemType::Design, PLACEHOLDER);
        assert_eq!(card.title, "Untitled");
        assert_eq!(card.image, PLACEHOLDER);
        assert_eq!(card.trend, "New");
        assert_eq!(card.category, None);
        assert_eq!(card.rating, None);
        assert_eq!(card.cost, None);

        let titled = CardModel::from_record(&record(json!({"id": 1, "title": "Loft"})), ItemType::Design, PLACEHOLDER);
        assert_eq!(titled.title, "Loft");
    }

    #[test]
    fn test_card_payload_snapshot() {
        let card = CardModel::from_record(
            &record(json!({"id": "p1", "name": "Lamp", "image": "lamp.jpg", "cost": "PKR 2,000", "rating": 4.5})),
            ItemType::Product,
            PLACEHOLDER,
        );
        let payload = card.payload();
        assert_eq!(payload.key.to_string(), "product:p1");
        assert_eq!(payload.title, "Lamp");
        assert_eq!(payload.image, "lamp.jpg");
        assert_eq!(payload.cost, Some(Cost::from("PKR 2,000")));
        assert_eq!(card.rating.as_deref(), Some("4.5"));
    }

    #[test]
    fn test_designer_card_uses_bio() {
        let card = CardModel::from_record(&record(json!({"id": 2, "name": "Sana", "bio": "Minimalist"})), ItemType::Designer, PLACEHOLDER);
        assert_eq!(card.description, "Minimalist");
        assert_eq!(card.key.to_string(), "designer:2");
    }

    #[test]
    fn test_testimonial_model() {
        let t = TestimonialModel::from_record(
            &record(json!({"name": "Ayesha", "role": "Homeowner", "location": "Lahore", "message": "Lovely work", "rating": 4.9})),
            PLACEHOLDER,
            6,
        );
        assert_eq!(t.excerpt, "Lovely...");
        assert_eq!(t.role_line, "Homeowner, Lahore");
        assert_eq!(t.stars, "★★★★");
        assert_eq!(t.message, "Lovely work");
    }

    #[test]
    fn test_blog_model_meta() {
        let b = BlogModel::from_record(&record(json!({"title": "Tips", "author": "Omar", "date": "2024-02-10"})), PLACEHOLDER);
        assert_eq!(b.meta, "By Omar • 2/10/2024");
        let undated = BlogModel::from_record(&record(json!({"title": "Tips"})), PLACEHOLDER);
        assert_eq!(undated.meta, "By Unknown");
    }
}

//! Detail Builder
//!
//! Turns an arbitrary item record into labeled, recursively formatted rows.

use crate::format::title_case;
use crate::models::{FieldValue, ItemRecord, SequenceHint};

/// Fields never shown in the detail view: identity, the hero image, and
/// sub-collections with their own visual treatment.
pub const EXCLUDED_FIELDS: &[&str] = &["id", "image", "portfolio", "products"];

/// Placeholder text for a record with nothing to show
pub const NO_DETAILS: &str = "No details available.";

/// Formatted value of a single field
#[derive(Debug, Clone, PartialEq)]
pub enum DetailContent {
    Text(String),
    /// Comma-joined list
    List(Vec<DetailContent>),
    /// Compact grid of name/price pairs
    PricedGrid(Vec<PricedPair>),
    /// Vertical stack of `field: value` sub-rows
    Stack(Vec<StackRow>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PricedPair {
    pub name: String,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StackRow {
    pub field: String,
    pub value: DetailContent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    pub label: String,
    pub value: DetailContent,
}

/// Built detail view; never an empty row list
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    Rows(Vec<DetailRow>),
    NoDetails,
}

impl DetailView {
    pub fn rows(&self) -> &[DetailRow] {
        match self {
            DetailView::Rows(rows) => rows,
            DetailView::NoDetails => &[],
        }
    }

    pub fn row(&self, label: &str) -> Option<&DetailRow> {
        self.rows().iter().find(|r| r.label == label)
    }
}

impl DetailContent {
    /// Flattened text form, as a screen reader would hear it
    pub fn to_plain_text(&self) -> String {
        match self {
            DetailContent::Text(s) => s.clone(),
            DetailContent::List(items) => items.iter().map(|i| i.to_plain_text()).collect::<Vec<_>>().join(", "),
            DetailContent::PricedGrid(pairs) => pairs
                .iter()
                .map(|p| format!("{} {}", p.name, p.price))
                .collect::<Vec<_>>()
                .join(", "),
            DetailContent::Stack(rows) => rows
                .iter()
                .map(|r| format!("{}: {}", r.field, r.value.to_plain_text()))
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

/// Build the detail view with the default exclusions
pub fn build_details(record: &ItemRecord) -> DetailView {
    build_details_excluding(record, EXCLUDED_FIELDS)
}

pub fn build_details_excluding(record: &ItemRecord, excluded: &[&str]) -> DetailView {
    let rows: Vec<DetailRow> = record
        .fields()
        .filter(|(name, _)| !excluded.contains(name))
        .map(|(name, value)| DetailRow {
            label: title_case(name),
            value: format_value(value),
        })
        .collect();

    if rows.is_empty() {
        DetailView::NoDetails
    } else {
        DetailView::Rows(rows)
    }
}

// Recursion depth is bounded by the fetched JSON, which is acyclic
fn format_value(value: &FieldValue) -> DetailContent {
    match value {
        FieldValue::Primitive(p) => DetailContent::Text(p.to_string()),
        FieldValue::Sequence(seq) => match seq.hint {
            SequenceHint::PricedPairs => DetailContent::PricedGrid(
                seq.items.iter().filter_map(FieldValue::as_record).map(priced_pair).collect(),
            ),
            SequenceHint::Plain => DetailContent::List(seq.items.iter().map(format_value).collect()),
        },
        FieldValue::Record(record) => DetailContent::Stack(
            record
                .fields()
                .map(|(field, v)| StackRow {
                    field: field.to_string(),
                    value: format_value(v),
                })
                .collect(),
        ),
    }
}

fn priced_pair(record: &ItemRecord) -> PricedPair {
    let field_text = |name: &str| {
        record
            .get(name)
            .and_then(FieldValue::as_primitive)
            .map(|p| p.to_string())
    };
    PricedPair {
        name: field_text("name").unwrap_or_default(),
        price: field_text("price").or_else(|| field_text("cost")).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> ItemRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_excludes_identity_and_joins_lists() {
        let view = build_details(&record(json!({"id": 1, "image": "x", "name": "Ali", "tags": ["a", "b"]})));

        assert_eq!(view.rows().len(), 2);
        assert!(view.row("Id").is_none());
        assert!(view.row("Image").is_none());
        assert_eq!(view.row("Name").unwrap().value.to_plain_text(), "Ali");
        assert_eq!(view.row("Tags").unwrap().value.to_plain_text(), "a, b");
    }

    #[test]
    fn test_rows_follow_record_order() {
        let view = build_details(&record(json!({"style_notes": "airy", "category": "Modern", "rating": 4.5})));
        let labels: Vec<&str> = view.rows().iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Style Notes", "Category", "Rating"]);
    }

    #[test]
    fn test_empty_or_fully_excluded_record() {
        assert_eq!(build_details(&ItemRecord::new()), DetailView::NoDetails);
        assert_eq!(
            build_details(&record(json!({"id": 3, "image": "a.jpg", "portfolio": [1, 2]}))),
            DetailView::NoDetails
        );
    }

    #[test]
    fn test_priced_sequence_renders_as_grid() {
        let view = build_details(&record(json!({
            "catalog": [{"name": "Chair", "price": "PKR 5,000"}, {"name": "Desk", "cost": 12000}]
        })));
        assert_eq!(
            view.row("Catalog").unwrap().value,
            DetailContent::PricedGrid(vec![
                PricedPair { name: "Chair".into(), price: "PKR 5,000".into() },
                PricedPair { name: "Desk".into(), price: "12000".into() },
            ])
        );
    }

    #[test]
    fn test_nested_records_stack_recursively() {
        let view = build_details(&record(json!({
            "contact": {"email": "a@b.pk", "social": {"ig": "@ali"}},
            "awards": [{"year": 2020}, "Best Studio"]
        })));

        match &view.row("Contact").unwrap().value {
            DetailContent::Stack(rows) => {
                assert_eq!(rows[0], StackRow { field: "email".into(), value: DetailContent::Text("a@b.pk".into()) });
                assert_eq!(rows[1].field, "social");
                assert!(matches!(rows[1].value, DetailContent::Stack(_)));
            }
            other => panic!("expected stack, got {:?}", other),
        }
        assert_eq!(view.row("Awards").unwrap().value.to_plain_text(), "year: 2020, Best Studio");
    }

    #[test]
    fn test_primitives_render_as_is() {
        let view = build_details(&record(json!({"active": true, "score": 3.0, "notes": null})));
        assert_eq!(view.row("Active").unwrap().value.to_plain_text(), "true");
        assert_eq!(view.row("Score").unwrap().value.to_plain_text(), "3");
        assert_eq!(view.row("Notes").unwrap().value.to_plain_text(), "null");
    }
}

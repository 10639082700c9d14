//! Modal Payload Store
//!
//! Typed payloads for the externally shown modals. A details trigger writes
//! its record here; the matching modal body renders from it.

use reactive_stores::Store;

use crate::catalog::{BlogModel, CardModel, TestimonialModel};
use crate::details::{build_details, DetailView};
use crate::models::WishlistEntry;

/// What the detail modal is showing
#[derive(Clone, Debug, PartialEq)]
pub enum DetailTarget {
    Card(CardModel),
    Entry(WishlistEntry),
}

impl DetailTarget {
    pub fn heading(&self) -> String {
        let item_type = match self {
            DetailTarget::Card(card) => card.item_type,
            DetailTarget::Entry(entry) => entry.key.item_type,
        };
        format!("{} Details", item_type.label())
    }

    pub fn title(&self) -> String {
        match self {
            DetailTarget::Card(card) => card.title.clone(),
            DetailTarget::Entry(entry) => entry.title.clone(),
        }
    }

    pub fn image(&self) -> String {
        match self {
            DetailTarget::Card(card) => card.image.clone(),
            DetailTarget::Entry(entry) => entry.image.clone(),
        }
    }

    pub fn details(&self) -> DetailView {
        match self {
            DetailTarget::Card(card) => build_details(&card.record),
            DetailTarget::Entry(entry) => build_details(&entry.to_record()),
        }
    }
}

#[derive(Clone, Debug, Default, Store)]
pub struct ModalState {
    pub detail: Option<DetailTarget>,
    pub testimonial: Option<TestimonialModel>,
    pub blog: Option<BlogModel>,
}

/// Type alias for the store
pub type ModalStore = Store<ModalState>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cost, ItemId, ItemType, WishlistKey};

    #[test]
    fn test_entry_target_renders_snapshot() {
        let entry = WishlistEntry {
            key: WishlistKey::new(ItemType::Product, ItemId::new("p1")),
            title: "Lamp".to_string(),
            image: "lamp.jpg".to_string(),
            cost: Some(Cost::from("PKR 2,000")),
            ts: 1_710_504_000_000,
        };
        let target = DetailTarget::Entry(entry);

        assert_eq!(target.heading(), "Product Details");
        assert_eq!(target.image(), "lamp.jpg");
        let details = target.details();
        assert!(details.row("Id").is_none());
        assert!(details.row("Image").is_none());
        assert_eq!(details.row("Title").unwrap().value.to_plain_text(), "Lamp");
        assert_eq!(details.row("Cost").unwrap().value.to_plain_text(), "PKR 2,000");
        assert_eq!(details.row("Added On").unwrap().value.to_plain_text(), "3/15/2024");
    }
}

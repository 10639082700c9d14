//! UI Components
//!
//! Leptos components for catalog cards, modal bodies and the wishlist panel.

mod wishlist_button;
mod item_card;
mod designer_card;
mod testimonial_card;
mod blog_card;
mod catalog_grid;
mod detail_view;
mod modal_bodies;
mod wishlist_panel;

pub use wishlist_button::WishlistButton;
pub use item_card::ItemCard;
pub use designer_card::DesignerCard;
pub use testimonial_card::TestimonialCard;
pub use blog_card::BlogCard;
pub use catalog_grid::{CatalogGrid, RenderContext};
pub use detail_view::DetailViewList;
pub use modal_bodies::{BlogModalBody, DetailModalBody, TestimonialModalBody};
pub use wishlist_panel::{WishlistBadge, WishlistPanel};

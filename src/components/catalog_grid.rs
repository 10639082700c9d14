//! Catalog Grid Component
//!
//! Cards for one catalog section, chosen by item type.

use leptos::prelude::*;

use crate::catalog::{visible_items, BlogModel, CardModel, TestimonialModel};
use crate::components::{BlogCard, DesignerCard, ItemCard, TestimonialCard};
use crate::context::WishlistService;
use crate::models::{ItemRecord, ItemType};
use crate::store::ModalStore;

/// Services and display settings shared by every card
#[derive(Clone)]
pub struct RenderContext {
    pub wishlist: WishlistService,
    pub modals: ModalStore,
    pub currency: String,
    pub placeholder_image: String,
    pub testimonial_excerpt_len: usize,
}

#[component]
pub fn CatalogGrid(
    items: Vec<ItemRecord>,
    item_type: ItemType,
    limit: Option<usize>,
    ctx: RenderContext,
) -> impl IntoView {
    visible_items(&items, limit)
        .iter()
        .map(|record| match item_type {
            ItemType::Design | ItemType::Product => {
                let card = CardModel::from_record(record, item_type, &ctx.placeholder_image);
                view! { <ItemCard card=card ctx=ctx.clone() /> }.into_any()
            }
            ItemType::Designer => {
                let card = CardModel::from_record(record, item_type, &ctx.placeholder_image);
                view! { <DesignerCard card=card ctx=ctx.clone() /> }.into_any()
            }
            ItemType::Testimonial => {
                let testimonial = TestimonialModel::from_record(record, &ctx.placeholder_image, ctx.testimonial_excerpt_len);
                view! { <TestimonialCard testimonial=testimonial modals=ctx.modals /> }.into_any()
            }
            ItemType::Blog => {
                let blog = BlogModel::from_record(record, &ctx.placeholder_image);
                view! { <BlogCard blog=blog modals=ctx.modals /> }.into_any()
            }
        })
        .collect_view()
}

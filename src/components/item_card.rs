//! Item Card Component
//!
//! Card for designs and products.

use leptos::prelude::*;

use crate::catalog::CardModel;
use crate::components::{RenderContext, WishlistButton};
use crate::format::format_cost;
use crate::store::{DetailTarget, ModalStateStoreFields};

#[component]
pub fn ItemCard(card: CardModel, ctx: RenderContext) -> impl IntoView {
    let modals = ctx.modals;
    let cost = format_cost(card.cost.as_ref(), &ctx.currency);
    let payload = card.payload();
    let title = card.title.clone();
    let image = card.image.clone();
    let trend = card.trend.clone();
    let category = card.category.clone().unwrap_or_default();
    let rating = card.rating.clone();
    let description = card.description.clone();
    let item_type = card.item_type.as_str();

    view! {
        <div class="col-md-6 col-lg-4" data-type=item_type>
            <div class="card h-100 shadow-sm rounded-4 overflow-hidden">
                <div class="position-relative">
                    <div class="position-absolute top-0 start-0 m-2">
                        <span class="badge bg-primary">{trend}</span>
                        <span class="badge bg-secondary">{category}</span>
                    </div>
                    <img src=image class="card-img-top" alt=title.clone() />
                    <WishlistButton
                        payload=payload
                        wishlist=ctx.wishlist
                        extra_class="position-absolute top-0 end-0 m-2"
                    />
                </div>
                <div class="card-body">
                    <h5 class="card-title mb-2">{title}</h5>
                    {rating.map(|r| view! {
                        <span class="text-warning"><i class="bi bi-star-fill"></i>" "{r}</span>
                    })}
                    <p class="card-text text-secondary small">{description}</p>
                    <div class="d-flex justify-content-between align-items-center">
                        {(!cost.is_empty()).then(|| view! {
                            <span class="fw-bold text-brand fs-5">{cost.clone()}</span>
                        })}
                        <button
                            class="btn btn-sm btn-brand"
                            data-bs-toggle="modal"
                            data-bs-target="#detailModal"
                            on:click=move |_| *modals.detail().write() = Some(DetailTarget::Card(card.clone()))
                        >
                            "View Details"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

//! Designer Card Component

use leptos::prelude::*;

use crate::catalog::CardModel;
use crate::components::{RenderContext, WishlistButton};
use crate::format::format_cost;
use crate::store::{DetailTarget, ModalStateStoreFields};

/// Designer profile card with round portrait and bio
#[component]
pub fn DesignerCard(card: CardModel, ctx: RenderContext) -> impl IntoView {
    let modals = ctx.modals;
    let cost = format_cost(card.cost.as_ref(), &ctx.currency);
    let payload = card.payload();
    let title = card.title.clone();
    let image = card.image.clone();
    let rating = card.rating.clone();
    let bio = card.description.clone();

    view! {
        <div class="col-md-6 col-lg-4" data-type="designer">
            <div class="card h-100 shadow-sm rounded-4 overflow-hidden text-center p-3 position-relative">
                <WishlistButton
                    payload=payload
                    wishlist=ctx.wishlist
                    extra_class="position-absolute top-0 end-0 m-2"
                />
                <img
                    src=image
                    class="rounded-circle mx-auto d-block mb-3"
                    width="120"
                    height="120"
                    alt=title.clone()
                    style="object-fit: cover;"
                />
                <div class="card-body">
                    <h5 class="card-title mb-1">{title}</h5>
                    {rating.map(|r| view! {
                        <div class="text-warning mb-2"><i class="bi bi-star-fill"></i>" "{r}</div>
                    })}
                    <p class="card-text text-secondary small mb-3">{bio}</p>
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

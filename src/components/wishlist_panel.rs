//! Wishlist Panel Component
//!
//! Summary list with count and total value, plus the navbar count badge.

use leptos::prelude::*;

use crate::context::WishlistService;
use crate::store::{DetailTarget, ModalStateStoreFields, ModalStore};
use crate::wishlist::SummaryRow;

/// Wishlist contents and aggregates.
///
/// Rows and aggregates come from one summary computed over the whole
/// collection, so they are never observed out of step.
#[component]
pub fn WishlistPanel(wishlist: WishlistService, modals: ModalStore) -> impl IntoView {
    let summary = wishlist.summary_memo();
    let currency = wishlist.currency();

    view! {
        <div class="modal-header">
            <h5 class="modal-title">"My Wishlist"</h5>
            <button type="button" class="btn-close" data-bs-dismiss="modal" aria-label="Close"></button>
        </div>
        <div class="modal-body">
            <div id="wishlistItems" class="list-group list-group-flush">
                {move || {
                    let summary = summary.get();
                    if summary.is_empty() {
                        view! { <p class="text-muted">"Your wishlist is empty."</p> }.into_any()
                    } else {
                        summary
                            .rows
                            .into_iter()
                            .map(|row| view! { <WishlistRow row=row wishlist=wishlist modals=modals /> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
        </div>
        <div class="modal-footer d-flex justify-content-between">
            <div>
                <span>"Items: "</span>
                <strong id="wishlistCount">{move || summary.get().count}</strong>
                <span class="ms-3">"Total: "</span>
                <strong id="wishlistValue">{move || summary.get().total_display(&currency)}</strong>
            </div>
            <button id="clearWishlist" class="btn btn-outline-danger btn-sm" on:click=move |_| wishlist.clear()>
                "Clear All"
            </button>
        </div>
    }
}

#[component]
fn WishlistRow(row: SummaryRow, wishlist: WishlistService, modals: ModalStore) -> impl IntoView {
    let SummaryRow { index, entry, title, category, cost, added_on } = row;
    let image = entry.image.clone();
    let alt = title.clone();

    view! {
        <div class="list-group-item d-flex gap-3 align-items-center py-3">
            <img
                src=image
                alt=alt
                class="rounded"
                width="100"
                height="70"
                style="object-fit:cover;"
            />
            <div class="flex-grow-1">
                <h6 class="mb-1">{title}</h6>
                <div class="text-muted small">{category}</div>
                {(!cost.is_empty()).then(|| view! { <div class="fw-bold text-brand">{cost.clone()}</div> })}
                <small class="text-muted">"Added on "{added_on}</small>
                <div class="mt-2 d-flex gap-2">
                    <button
                        class="btn btn-sm btn-outline-success"
                        data-bs-toggle="modal"
                        data-bs-target="#detailModal"
                        on:click=move |_| *modals.detail().write() = Some(DetailTarget::Entry(entry.clone()))
                    >
                        "View Details"
                    </button>
                    <button class="btn btn-sm btn-outline-warning">"Get Quote"</button>
                </div>
            </div>
            <button
                class="btn btn-link text-danger"
                aria-label="Remove from wishlist"
                on:click=move |_| wishlist.remove_at(index)
            >
                <i class="bi bi-trash"></i>
            </button>
        </div>
    }
}

/// Navbar item count
#[component]
pub fn WishlistBadge(wishlist: WishlistService) -> impl IntoView {
    view! {
        <span class="badge rounded-pill bg-danger">{move || wishlist.entries().len()}</span>
    }
}

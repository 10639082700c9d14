//! Wishlist Button Component
//!
//! Heart toggle on a catalog card.

use leptos::prelude::*;

use crate::context::WishlistService;
use crate::models::WishlistPayload;

/// Heart toggle whose pressed state is derived from store membership.
///
/// Pressing it toggles the payload in the store; only this button and
/// wishlist readers update, never the surrounding grid.
#[component]
pub fn WishlistButton(
    payload: WishlistPayload,
    wishlist: WishlistService,
    #[prop(optional, into)] extra_class: String,
) -> impl IntoView {
    let active = wishlist.membership(payload.key.clone());
    let label = format!("Toggle {} in wishlist", payload.title);

    view! {
        <button
            class=move || {
                let state = if active.get() { " active" } else { "" };
                format!("wishlist-btn rounded-circle shadow-sm {}{}", extra_class, state)
            }
            aria-pressed=move || active.get().to_string()
            aria-label=label
            on:click=move |ev| {
                ev.stop_propagation();
                let outcome = wishlist.toggle(payload.clone());
                log::debug!("[CARD] {} {:?}", payload.key, outcome);
            }
        >
            <i class=move || if active.get() { "bi bi-heart-fill" } else { "bi bi-heart" }></i>
        </button>
    }
}

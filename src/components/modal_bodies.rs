//! Modal Body Components
//!
//! Contents of the detail, testimonial and blog modals. The modals themselves
//! are shown by the page's widget library; these bodies render just-in-time
//! from the payload the triggering control wrote into the modal store.

use leptos::prelude::*;

use crate::components::DetailViewList;
use crate::store::{ModalStateStoreFields, ModalStore};

#[component]
pub fn DetailModalBody(modals: ModalStore) -> impl IntoView {
    move || match modals.detail().get() {
        Some(target) => view! {
            <div class="modal-header">
                <div>
                    <small class="modal-heading text-muted">{target.heading()}</small>
                    <h5 class="modal-title">{target.title()}</h5>
                </div>
                <button type="button" class="btn-close" data-bs-dismiss="modal" aria-label="Close"></button>
            </div>
            <div class="modal-body">
                <img id="modalImg" src=target.image() class="img-fluid rounded mb-3" alt=target.title() />
                <div id="modalDetails">
                    <DetailViewList details=target.details() />
                </div>
            </div>
        }
        .into_any(),
        None => ().into_any(),
    }
}

#[component]
pub fn TestimonialModalBody(modals: ModalStore) -> impl IntoView {
    move || match modals.testimonial().get() {
        Some(t) => view! {
            <div class="modal-header">
                <h5 class="modal-title">"Client Testimonial"</h5>
                <button type="button" class="btn-close" data-bs-dismiss="modal" aria-label="Close"></button>
            </div>
            <div class="modal-body text-center">
                <img src=t.image class="rounded-circle mb-3" width="100" height="100" style="object-fit:cover;" />
                <p>{t.message}</p>
                <h6>{t.name}</h6>
                <small class="text-muted">{t.role_line}</small>
                <div class="stars">{t.stars}</div>
            </div>
        }
        .into_any(),
        None => ().into_any(),
    }
}

#[component]
pub fn BlogModalBody(modals: ModalStore) -> impl IntoView {
    move || match modals.blog().get() {
        Some(b) => view! {
            <div class="modal-header">
                <h5 class="modal-title">{b.title.clone()}</h5>
                <button type="button" class="btn-close" data-bs-dismiss="modal" aria-label="Close"></button>
            </div>
            <div class="modal-body">
                <img src=b.image class="img-fluid rounded mb-3" alt=b.title />
                <p class="text-muted small">{b.meta}</p>
                <p>{b.content}</p>
            </div>
        }
        .into_any(),
        None => ().into_any(),
    }
}

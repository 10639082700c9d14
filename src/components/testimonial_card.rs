//! Testimonial Card Component
//!
//! Carousel slide; no wishlist control.

use leptos::prelude::*;

use crate::catalog::TestimonialModel;
use crate::store::{ModalStateStoreFields, ModalStore};

#[component]
pub fn TestimonialCard(testimonial: TestimonialModel, modals: ModalStore) -> impl IntoView {
    let excerpt = testimonial.excerpt.clone();
    let image = testimonial.image.clone();
    let name = testimonial.name.clone();
    let role_line = testimonial.role_line.clone();
    let stars = testimonial.stars.clone();

    view! {
        <div class="swiper-slide">
            <div class="testimonial-card">
                <p>"“"{excerpt}"”"</p>
                <img src=image class="rounded-circle" width="70" height="70" style="object-fit:cover;" />
                <h6>{name}</h6>
                <small>{role_line}</small>
                <div class="stars">{stars}</div>
                <button
                    class="btn btn-sm mt-2"
                    data-bs-toggle="modal"
                    data-bs-target="#testimonialModal"
                    on:click=move |_| *modals.testimonial().write() = Some(testimonial.clone())
                >
                    "View Details"
                </button>
            </div>
        </div>
    }
}

//! Blog Card Component

use leptos::prelude::*;

use crate::catalog::BlogModel;
use crate::store::{ModalStateStoreFields, ModalStore};

#[component]
pub fn BlogCard(blog: BlogModel, modals: ModalStore) -> impl IntoView {
    let image = blog.image.clone();
    let title = blog.title.clone();
    let excerpt = blog.excerpt.clone();

    view! {
        <div class="col-md-4">
            <div class="card h-100 shadow-sm rounded-4 overflow-hidden">
                <img src=image class="card-img-top" alt=title.clone() />
                <div class="card-body d-flex flex-column">
                    <h5 class="card-title">{title}</h5>
                    <p class="card-text text-secondary small flex-grow-1">{excerpt}</p>
                    <button
                        class="btn btn-sm btn-brand mt-auto"
                        data-bs-toggle="modal"
                        data-bs-target="#blogModal"
                        on:click=move |_| *modals.blog().write() = Some(blog.clone())
                    >
                        "View Details"
                    </button>
                </div>
            </div>
        </div>
    }
}

//! Detail View Component
//!
//! Renders a built detail view as labeled rows.

use leptos::prelude::*;

use crate::details::{DetailContent, DetailView, NO_DETAILS};

#[component]
pub fn DetailViewList(details: DetailView) -> impl IntoView {
    match details {
        DetailView::NoDetails => view! { <p class="text-muted">{NO_DETAILS}</p> }.into_any(),
        DetailView::Rows(rows) => rows
            .into_iter()
            .map(|row| {
                view! {
                    <div class="detail-row mb-2">
                        <strong>{row.label}</strong>
                        <div>{render_content(row.value)}</div>
                    </div>
                }
            })
            .collect_view()
            .into_any(),
    }
}

fn render_content(content: DetailContent) -> AnyView {
    match content {
        DetailContent::Text(text) => view! { <span>{text}</span> }.into_any(),
        DetailContent::List(items) => {
            let last = items.len().saturating_sub(1);
            items
                .into_iter()
                .enumerate()
                .map(|(i, item)| view! { {render_content(item)}{(i < last).then_some(", ")} })
                .collect_view()
                .into_any()
        }
        DetailContent::PricedGrid(pairs) => view! {
            <div class="product-grid">
                {pairs.into_iter().map(|pair| view! {
                    <div class="product-item">
                        <span class="fw-bold">{pair.name}</span>
                        <span class="text-muted">{pair.price}</span>
                    </div>
                }).collect_view()}
            </div>
        }
        .into_any(),
        DetailContent::Stack(rows) => rows
            .into_iter()
            .map(|row| view! { <div><em>{row.field}":"</em>" "{render_content(row.value)}</div> })
            .collect_view()
            .into_any(),
    }
}

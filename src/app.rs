//! Page Initialization
//!
//! Builds the services, mounts modal bodies and the wishlist panel, then
//! fetches every catalog section and renders each one as it resolves.

use leptos::mount::mount_to;
use leptos::prelude::*;
use reactive_stores::Store;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::commands;
use crate::components::{
    BlogModalBody, CatalogGrid, DetailModalBody, RenderContext, TestimonialModalBody, WishlistBadge, WishlistPanel,
};
use crate::config::{SectionConfig, SiteConfig};
use crate::context::WishlistService;
use crate::models::{ItemRecord, ItemType};
use crate::store::{ModalState, ModalStore};

/// Widget event fired just before a modal opens
const MODAL_SHOW_EVENT: &str = "show.bs.modal";
/// Element carrying the wishlist modal's open hook
const WISHLIST_MODAL_ID: &str = "wishlistModal";

pub fn start(config: SiteConfig) {
    // Root owner for every mount below; lives for the page
    let owner = Owner::new();
    owner.set();

    let wishlist: WishlistService = WishlistService::new(&config.storage_key, &config.currency);
    let modals: ModalStore = Store::new(ModalState::default());

    mount_into(&config.mounts.detail_modal, move || view! { <DetailModalBody modals=modals /> });
    mount_into(&config.mounts.testimonial_modal, move || view! { <TestimonialModalBody modals=modals /> });
    mount_into(&config.mounts.blog_modal, move || view! { <BlogModalBody modals=modals /> });
    mount_into(&config.mounts.wishlist_panel, move || view! { <WishlistPanel wishlist=wishlist modals=modals /> });
    mount_into(&config.mounts.wishlist_badge, move || view! { <WishlistBadge wishlist=wishlist /> });
    refresh_on_modal_open(WISHLIST_MODAL_ID, wishlist);

    let ctx = RenderContext {
        wishlist,
        modals,
        currency: config.currency.clone(),
        placeholder_image: config.placeholder_image.clone(),
        testimonial_excerpt_len: config.testimonial_excerpt_len,
    };

    // Sections resolve independently and in no particular order
    for section in config.sections.clone() {
        let ctx = ctx.clone();
        let carousel = config.carousel.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match commands::fetch_collection(&section.url, &section.field).await {
                Ok(items) => {
                    let rendered = render_collection(items, &section, ctx);
                    if rendered && section.item_type == ItemType::Testimonial {
                        if let Err(e) = commands::mount_carousel(&carousel) {
                            log::error!("[APP] carousel init failed: {}", e);
                        }
                    }
                }
                Err(e) => log::error!("[APP] loading {} failed: {}", section.url, e),
            }
        });
    }
}

/// Clear the section's container and render its cards; a missing container
/// leaves the page untouched
pub fn render_collection(items: Vec<ItemRecord>, section: &SectionConfig, ctx: RenderContext) -> bool {
    let count = items.len();
    let item_type = section.item_type;
    let limit = section.limit;
    let mounted = mount_into(&section.container_id, move || {
        view! { <CatalogGrid items=items item_type=item_type limit=limit ctx=ctx /> }
    });
    if mounted {
        log::info!("[APP] rendered {} section ({} records)", item_type, count);
    }
    mounted
}

fn mount_into<F, N>(container_id: &str, f: F) -> bool
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let Some(container) = find_element(container_id) else {
        log::debug!("[APP] no #{} on this page", container_id);
        return false;
    };
    container.set_inner_html("");
    mount_to(container, f).forget();
    true
}

fn find_element(id: &str) -> Option<web_sys::HtmlElement> {
    document().get_element_by_id(id)?.dyn_into().ok()
}

/// Re-read persisted state whenever the widget is about to show the modal
fn refresh_on_modal_open(modal_id: &str, wishlist: WishlistService) {
    let Some(modal) = find_element(modal_id) else {
        return;
    };
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| wishlist.refresh());
    if let Err(e) = modal.add_event_listener_with_callback(MODAL_SHOW_EVENT, cb.as_ref().unchecked_ref()) {
        log::error!("[APP] listening on #{} failed: {:?}", modal_id, e);
    }
    cb.forget();
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use serde_json::json;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn ctx() -> RenderContext {
        RenderContext {
            wishlist: WishlistService::new("catalog_wishlist_render_test", "PKR"),
            modals: Store::new(ModalState::default()),
            currency: "PKR".to_string(),
            placeholder_image: "placeholder.jpg".to_string(),
            testimonial_excerpt_len: 140,
        }
    }

    fn section(container_id: &str) -> SectionConfig {
        SectionConfig {
            item_type: ItemType::Design,
            url: "data/designs.json".to_string(),
            field: "designs".to_string(),
            container_id: container_id.to_string(),
            limit: Some(3),
        }
    }

    fn designs(n: usize) -> Vec<ItemRecord> {
        (0..n)
            .map(|i| serde_json::from_value(json!({"id": i, "title": format!("Design {}", i)})).unwrap())
            .collect()
    }

    #[wasm_bindgen_test]
    fn test_missing_container_renders_nothing() {
        let owner = Owner::new();
        owner.set();
        assert!(!render_collection(designs(2), &section("noSuchGrid"), ctx()));
        assert!(document().get_element_by_id("noSuchGrid").is_none());
    }

    #[wasm_bindgen_test]
    fn test_render_replaces_container_contents() {
        let owner = Owner::new();
        owner.set();
        let container = document().create_element("div").unwrap();
        container.set_id("renderTestGrid");
        container.set_inner_html("<p>stale</p>");
        document().body().unwrap().append_child(&container).unwrap();

        assert!(render_collection(designs(5), &section("renderTestGrid"), ctx()));
        assert_eq!(container.child_element_count(), 3);
        assert!(!container.inner_html().contains("stale"));
        container.remove();
    }
}

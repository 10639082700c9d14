//! Site Configuration
//!
//! Built once by the entry point and handed to every renderer.

use serde::Serialize;

use crate::models::ItemType;

/// One catalog section: where its data lives and where its cards go
#[derive(Debug, Clone, PartialEq)]
pub struct SectionConfig {
    pub item_type: ItemType,
    pub url: String,
    /// Array field inside the fetched document
    pub field: String,
    pub container_id: String,
    /// Fixed-size prefix to render; `None` renders everything
    pub limit: Option<usize>,
}

impl SectionConfig {
    fn new(item_type: ItemType, file: &str, container_id: &str, limit: Option<usize>) -> Self {
        Self {
            item_type,
            url: format!("data/{}.json", file),
            field: file.to_string(),
            container_id: container_id.to_string(),
            limit,
        }
    }
}

/// Mount points inside externally managed modals and the navbar
#[derive(Debug, Clone, PartialEq)]
pub struct MountIds {
    pub detail_modal: String,
    pub testimonial_modal: String,
    pub blog_modal: String,
    pub wishlist_panel: String,
    pub wishlist_badge: String,
}

/// Options forwarded to the external carousel, serialized as its JS options object
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselOptions {
    pub slides_per_view: u32,
    pub space_between: u32,
    #[serde(rename = "loop")]
    pub looped: bool,
    pub pagination: CarouselPagination,
    pub navigation: CarouselNavigation,
    pub autoplay: CarouselAutoplay,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarouselPagination {
    pub el: String,
    pub clickable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselNavigation {
    pub next_el: String,
    pub prev_el: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselAutoplay {
    pub delay: u32,
    pub disable_on_interaction: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    pub selector: String,
    pub options: CarouselOptions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub sections: Vec<SectionConfig>,
    pub storage_key: String,
    pub currency: String,
    pub placeholder_image: String,
    /// Characters of a testimonial shown on its card
    pub testimonial_excerpt_len: usize,
    pub mounts: MountIds,
    pub carousel: CarouselConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            sections: vec![
                SectionConfig::new(ItemType::Design, "designs", "designsGrid", Some(3)),
                SectionConfig::new(ItemType::Designer, "designers", "designersGrid", Some(3)),
                SectionConfig::new(ItemType::Product, "products", "productsGrid", Some(3)),
                SectionConfig::new(ItemType::Testimonial, "testimonials", "testimonialsGrid", None),
                SectionConfig::new(ItemType::Blog, "blogs", "blogsGrid", None),
            ],
            storage_key: crate::wishlist::DEFAULT_STORAGE_KEY.to_string(),
            currency: crate::format::DEFAULT_CURRENCY.to_string(),
            placeholder_image: "images/placeholder.jpg".to_string(),
            testimonial_excerpt_len: 140,
            mounts: MountIds {
                detail_modal: "detailModalContent".to_string(),
                testimonial_modal: "testimonialModalContent".to_string(),
                blog_modal: "blogModalContent".to_string(),
                wishlist_panel: "wishlistModalContent".to_string(),
                wishlist_badge: "wishlistBadge".to_string(),
            },
            carousel: CarouselConfig {
                selector: ".testimonialSwiper".to_string(),
                options: CarouselOptions {
                    slides_per_view: 1,
                    space_between: 30,
                    looped: true,
                    pagination: CarouselPagination { el: ".swiper-pagination".to_string(), clickable: true },
                    navigation: CarouselNavigation {
                        next_el: ".swiper-button-next".to_string(),
                        prev_el: ".swiper-button-prev".to_string(),
                    },
                    autoplay: CarouselAutoplay { delay: 4000, disable_on_interaction: true },
                },
            },
        }
    }
}

impl SiteConfig {
    pub fn section(&self, item_type: ItemType) -> Option<&SectionConfig> {
        self.sections.iter().find(|s| s.item_type == item_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sections() {
        let config = SiteConfig::default();
        assert_eq!(config.sections.len(), 5);

        let products = config.section(ItemType::Product).unwrap();
        assert_eq!(products.url, "data/products.json");
        assert_eq!(products.field, "products");
        assert_eq!(products.limit, Some(3));
        assert_eq!(config.section(ItemType::Blog).unwrap().limit, None);
    }

    #[test]
    fn test_carousel_options_serialize_to_js_names() {
        let json = serde_json::to_value(&SiteConfig::default().carousel.options).unwrap();
        assert_eq!(json["slidesPerView"], 1);
        assert_eq!(json["loop"], true);
        assert_eq!(json["navigation"]["nextEl"], ".swiper-button-next");
        assert_eq!(json["autoplay"]["disableOnInteraction"], true);
    }
}

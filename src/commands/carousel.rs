//! Carousel Binding
//!
//! Hands rendered testimonial slides to the page's `Swiper` widget.
//! Rotation timing and navigation belong to the widget.

use wasm_bindgen::prelude::*;

use crate::config::CarouselConfig;
use crate::error::js_error_text;

#[wasm_bindgen]
extern "C" {
    type Swiper;

    #[wasm_bindgen(constructor, catch)]
    fn new(selector: &str, options: &JsValue) -> Result<Swiper, JsValue>;
}

/// Initialize the carousel over slides already in the DOM
pub fn mount_carousel(config: &CarouselConfig) -> Result<(), String> {
    let options = serde_wasm_bindgen::to_value(&config.options).map_err(|e| e.to_string())?;
    Swiper::new(&config.selector, &options)
        .map(|_| ())
        .map_err(|e| js_error_text(&e))
}

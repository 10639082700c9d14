#![allow(warnings)]
//! Catalog Wishlist Frontend Entry Point

use catalog_wishlist::config::SiteConfig;
use catalog_wishlist::{app, logger};

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Debug);
    app::start(SiteConfig::default());
}

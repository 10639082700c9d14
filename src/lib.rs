//! Catalog Wishlist Frontend
//!
//! Renders fetched catalog collections into card grids and keeps a
//! persistent wishlist in browser storage.

pub mod models;
pub mod format;
pub mod details;
pub mod catalog;
pub mod storage;
pub mod wishlist;
pub mod config;
pub mod error;
pub mod logger;
pub mod context;
pub mod store;
pub mod commands;
pub mod components;
pub mod app;

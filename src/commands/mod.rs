//! Browser Collaborator Bindings
//!
//! Frontend bindings to the data files and JavaScript widgets the page relies on.

mod catalog;
mod carousel;

pub use catalog::*;
pub use carousel::*;

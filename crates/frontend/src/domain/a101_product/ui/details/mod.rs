//! Product create/edit form
//!
//! - view_model.rs: form state, parsing and the save command
//! - view.rs: Leptos component rendered inside the list's modal

mod view;
mod view_model;

pub use view::ProductDetails;
pub use view_model::{ProductDetailsViewModel, ProductForm};

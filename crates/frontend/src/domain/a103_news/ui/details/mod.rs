mod view;
mod view_model;

pub use view::NewsDetails;
pub use view_model::{NewsDetailsViewModel, NewsForm};

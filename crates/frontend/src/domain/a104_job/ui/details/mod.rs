mod view;
mod view_model;

pub use view::JobDetails;
pub use view_model::{JobDetailsViewModel, JobForm};

#[allow(clippy::module_inception)]
pub mod header;

pub use header::Header;

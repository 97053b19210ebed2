pub mod browser;
pub mod hh;

pub use hh::types::Listing;

pub mod api;

pub use api::fetch_catalog;

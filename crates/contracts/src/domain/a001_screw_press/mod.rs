pub mod catalog;
pub mod error;
pub mod option;

pub use catalog::{CatalogColumns, CatalogData, CatalogResponse, CatalogRow};
pub use error::{CatalogError, RowWarning, DEFAULT_LOAD_ERROR};
pub use option::{
    build_options, BindOutcome, BinderConfig, ProductMetadata, ProductOption, PLACEHOLDER,
    PRICE_DEFAULT,
};

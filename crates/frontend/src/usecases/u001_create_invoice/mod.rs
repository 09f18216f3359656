//! Invoice creation form
//!
//! - config.rs: endpoint and binder settings
//! - state.rs: form state machine (pure, unit-tested)
//! - view_model.rs: reactive wrapper with load/select/edit commands
//! - view.rs: Leptos component

pub mod config;
pub mod state;
mod view;
mod view_model;

pub use config::FormConfig;
pub use state::{FormPhase, InvoiceFormState};
pub use view::InvoiceForm;
pub use view_model::InvoiceFormViewModel;

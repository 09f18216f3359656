use super::config::FormConfig;
use super::state::{InvoiceFormState, PopulateSummary};
use crate::domain::a001_screw_press::api;
use contracts::domain::a001_screw_press::CatalogRow;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the invoice form.
///
/// Owns the whole form state; every DOM update goes through its commands.
#[derive(Clone, Copy)]
pub struct InvoiceFormViewModel {
    pub state: RwSignal<InvoiceFormState>,
    config: StoredValue<FormConfig>,
}

impl InvoiceFormViewModel {
    pub fn new(config: FormConfig) -> Self {
        Self {
            state: RwSignal::new(InvoiceFormState::default()),
            config: StoredValue::new(config),
        }
    }

    /// Issues the single catalog request and applies its result
    pub fn load_command(&self) {
        let vm = *self;
        let endpoint = self.config.with_value(|c| c.endpoint.clone());

        self.state.update(InvoiceFormState::begin_loading);
        log::info!("Loading screw press catalog...");

        spawn_local(async move {
            match api::fetch_catalog(&endpoint).await {
                Ok(rows) => {
                    log::info!("Received {} catalog rows", rows.len());
                    vm.populate(rows);
                }
                Err(e) => {
                    log::error!("Error loading data: {}", e);
                    vm.state.update(|s| s.fail_load(&e));
                }
            }
        });
    }

    /// Replaces the product options, returns the number of options added
    pub fn populate(&self, rows: Vec<CatalogRow>) -> usize {
        let binder = self.config.with_value(|c| c.binder.clone());
        let summary = self
            .state
            .try_update(|s| s.populate(&rows, &binder))
            .unwrap_or_default();
        log_summary(&summary);
        summary.options_added
    }

    pub fn select_index(&self, index: Option<usize>) {
        self.state.update(|s| s.select(index));
        if let Some(option) = self.state.with_untracked(|s| s.selected_option().cloned()) {
            log::debug!("Selected {} ({})", option.label, option.identifier);
        }
    }

    pub fn set_quantity(&self, value: String) {
        self.state.update(|s| {
            s.set_quantity(value);
        });
    }

    pub fn set_unit_price(&self, value: String) {
        self.state.update(|s| {
            s.set_unit_price(value);
        });
    }

    /// (identifier, label) pairs in catalog order
    pub fn option_items(&self) -> Signal<Vec<(String, String)>> {
        let state = self.state;
        Signal::derive(move || {
            state.with(|s| {
                s.options
                    .iter()
                    .map(|o| (o.identifier.clone(), o.label.clone()))
                    .collect()
            })
        })
    }
}

fn log_summary(summary: &PopulateSummary) {
    for warning in &summary.warnings {
        log::warn!("{}", warning);
    }
    if summary.rows_skipped > 0 {
        log::debug!("Skipped {} catalog rows", summary.rows_skipped);
    }
    if summary.options_added == 0 {
        log::error!("No valid screw press products found in the data");
    } else {
        log::info!("Added {} valid products to dropdown", summary.options_added);
    }
}

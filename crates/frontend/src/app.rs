use crate::usecases::u001_create_invoice::{FormConfig, InvoiceForm};
use leptos::prelude::*;

/// Id of an optional `<script type="application/json">` element with form overrides
pub const CONFIG_ELEMENT_ID: &str = "invoice-form-config";

/// Reads form settings from the host page, falling back to defaults
fn load_config() -> FormConfig {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match text {
        Some(json) => FormConfig::from_json(&json).unwrap_or_else(|e| {
            log::warn!("Ignoring invalid #{}: {}", CONFIG_ELEMENT_ID, e);
            FormConfig::default()
        }),
        None => FormConfig::default(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();

    view! {
        <main class="invoice-page">
            <h1>"Create Invoice"</h1>
            <InvoiceForm config=config />
        </main>
    }
}

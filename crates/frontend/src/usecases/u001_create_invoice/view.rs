use super::config::FormConfig;
use super::state::{BannerPlacement, FormPhase, InvoiceFormState, ProductDetails};
use super::view_model::InvoiceFormViewModel;
use crate::shared::components::ui::{Input, Select};
use leptos::prelude::*;
use thaw::{Card, Spinner};

fn detail_signal(
    state: RwSignal<InvoiceFormState>,
    field: fn(&ProductDetails) -> String,
) -> Signal<String> {
    Signal::derive(move || state.with(|s| field(&s.details)))
}

#[component]
fn ErrorBanner(state: RwSignal<InvoiceFormState>, placement: BannerPlacement) -> impl IntoView {
    move || {
        state
            .with(|s| s.banner.clone())
            .filter(|b| b.placement == placement)
            .map(|b| view! { <div class="error-message">{b.message}</div> })
    }
}

/// Invoice line form: product select, product details, quantity and total
#[component]
pub fn InvoiceForm(#[prop(optional)] config: Option<FormConfig>) -> impl IntoView {
    let vm = InvoiceFormViewModel::new(config.unwrap_or_default());
    vm.load_command();

    let state = vm.state;
    let is_loading = move || state.with(|s| s.phase == FormPhase::Loading);

    // editable fields only hear about programmatic writes
    let initial_quantity = state.with_untracked(|s| s.line.quantity.clone());
    let price_field = Memo::new(move |_| state.with(|s| s.price_field.clone()));

    view! {
        <Card>
            <div class="invoice-form">
                <div class="form-section product-section">
                    <Select
                        id="product-select"
                        label="Screw Press"
                        prompt=Signal::derive(move || state.with(|s| s.select_prompt.clone()))
                        options=vm.option_items()
                        selected=Signal::derive(move || state.with(|s| s.selected))
                        disabled=Signal::derive(move || state.with(|s| s.select_disabled))
                        on_change=Callback::new(move |index| vm.select_index(index))
                    />
                    <Show when=is_loading>
                        <Spinner />
                    </Show>
                    <ErrorBanner state=state placement=BannerPlacement::AfterSelect />

                    <ErrorBanner state=state placement=BannerPlacement::BeforeDetails />
                    <div id="product-details" class="product-details">
                        <Input
                            id="manufacturer"
                            label="Manufacturer"
                            value=detail_signal(state, |d| d.manufacturer.clone())
                            readonly=true
                        />
                        <Input
                            id="part-number"
                            label="Mivalt Part Number"
                            value=detail_signal(state, |d| d.part_number.clone())
                            readonly=true
                        />
                        <Input
                            id="gds-part-no"
                            label="GDS Part No"
                            value=detail_signal(state, |d| d.gds_part_no.clone())
                            readonly=true
                        />
                        <Input
                            id="power"
                            label="Power"
                            value=detail_signal(state, |d| d.power.clone())
                            readonly=true
                        />
                        <Input
                            id="material"
                            label="Material"
                            value=detail_signal(state, |d| d.material.clone())
                            readonly=true
                        />
                        <Input
                            id="lead-time"
                            label="Lead Time"
                            value=detail_signal(state, |d| d.lead_time.clone())
                            readonly=true
                        />
                        <Input
                            id="cost-euro"
                            label="Cost (EUR)"
                            value=detail_signal(state, |d| d.cost_euro.clone())
                            readonly=true
                        />
                    </div>
                </div>

                <div class="form-section line-section">
                    <Input
                        id="quantity"
                        label="Quantity"
                        input_type="number"
                        step="1"
                        value=Signal::stored(initial_quantity)
                        on_input=Callback::new(move |v| vm.set_quantity(v))
                    />
                    <Input
                        id="unit-price"
                        label="Unit Price (USD)"
                        input_type="number"
                        step="0.01"
                        value=Signal::derive(move || price_field.with(|f| f.value.clone()))
                        on_input=Callback::new(move |v| vm.set_unit_price(v))
                    />
                    <Input
                        id="total-amount"
                        label="Total (USD)"
                        value=Signal::derive(move || state.with(|s| s.line.total.clone()))
                        readonly=true
                    />
                </div>

                // preview is handled outside this form
                <img id="logo-preview" alt="Company logo preview" style="display: none;" />
            </div>
        </Card>
    }
}

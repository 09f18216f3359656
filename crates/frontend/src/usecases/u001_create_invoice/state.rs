use crate::shared::number_format::{format_money, parse_number};
use contracts::domain::a001_screw_press::{
    build_options, BinderConfig, CatalogError, CatalogRow, ProductMetadata, ProductOption,
    RowWarning, PLACEHOLDER,
};

pub const SELECT_PROMPT: &str = "Select a screw press...";
pub const SELECT_LOADING: &str = "Loading screw presses...";
pub const SELECT_UNAVAILABLE: &str = "Unable to load screw press data";
pub const NO_PRODUCTS_MESSAGE: &str = "No valid screw press products found in the data.";

/// Default quantity for a new invoice line
pub const DEFAULT_QUANTITY: &str = "1";

/// Idle → Loading → {Loaded, LoadFailed}; Loaded ⇄ DetailsBound
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Loading,
    Loaded,
    LoadFailed,
    DetailsBound,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerPlacement {
    /// Right after the product select
    AfterSelect,
    /// Right before the product details panel
    BeforeDetails,
}

/// The single error message shown on the form
#[derive(Clone, Debug, PartialEq)]
pub struct Banner {
    pub message: String,
    pub placement: BannerPlacement,
}

/// Read-only outputs filled from the selected product
#[derive(Clone, Debug, PartialEq)]
pub struct ProductDetails {
    pub manufacturer: String,
    pub part_number: String,
    pub gds_part_no: String,
    pub power: String,
    pub material: String,
    pub lead_time: String,
    pub cost_euro: String,
}

impl ProductDetails {
    pub fn cleared() -> Self {
        Self {
            manufacturer: PLACEHOLDER.to_string(),
            part_number: PLACEHOLDER.to_string(),
            gds_part_no: PLACEHOLDER.to_string(),
            power: PLACEHOLDER.to_string(),
            material: PLACEHOLDER.to_string(),
            lead_time: PLACEHOLDER.to_string(),
            cost_euro: String::new(),
        }
    }

    pub fn from_metadata(metadata: &ProductMetadata) -> Self {
        Self {
            manufacturer: metadata.manufacturer.clone(),
            part_number: metadata.part_number.clone(),
            gds_part_no: metadata.gds_part_no.clone(),
            power: metadata.power.clone(),
            material: metadata.material.clone(),
            lead_time: metadata.lead_time.clone(),
            cost_euro: metadata.cost_euro.clone(),
        }
    }
}

/// Quantity, unit price and total as typed in the form
#[derive(Clone, Debug, PartialEq)]
pub struct InvoiceLine {
    pub quantity: String,
    pub unit_price: String,
    pub total: String,
}

impl Default for InvoiceLine {
    fn default() -> Self {
        Self {
            quantity: DEFAULT_QUANTITY.to_string(),
            unit_price: String::new(),
            total: String::new(),
        }
    }
}

impl InvoiceLine {
    /// total = quantity × unit price, unparseable inputs count as 0
    pub fn recompute(&mut self) -> f64 {
        let total = parse_number(&self.quantity) * parse_number(&self.unit_price);
        let total = if total.is_finite() { total } else { 0.0 };
        self.total = format_money(total);
        total
    }
}

/// A value the form pushes into an editable field.
///
/// User typing never produces one, so the DOM keeps partial entries like
/// `"."` or `"-"`. `revision` changes on every push, even when the value
/// repeats.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldWrite {
    pub revision: u32,
    pub value: String,
}

impl FieldWrite {
    fn push(&mut self, value: &str) {
        self.revision = self.revision.wrapping_add(1);
        self.value = value.to_string();
    }
}

/// Result of filling the product select
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PopulateSummary {
    pub options_added: usize,
    /// Rows dropped for a missing name or the excluded keyword
    pub rows_skipped: usize,
    pub warnings: Vec<RowWarning>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InvoiceFormState {
    pub phase: FormPhase,
    pub options: Vec<ProductOption>,
    pub select_disabled: bool,
    pub select_prompt: String,
    /// Position in `options`, identifiers are not unique
    pub selected: Option<usize>,
    pub banner: Option<Banner>,
    pub details: ProductDetails,
    pub line: InvoiceLine,
    /// Unit price pushed by selection changes
    pub price_field: FieldWrite,
}

impl Default for InvoiceFormState {
    fn default() -> Self {
        Self {
            phase: FormPhase::Idle,
            options: Vec::new(),
            select_disabled: true,
            select_prompt: SELECT_PROMPT.to_string(),
            selected: None,
            banner: None,
            details: ProductDetails::cleared(),
            line: InvoiceLine::default(),
            price_field: FieldWrite::default(),
        }
    }
}

impl InvoiceFormState {
    pub fn begin_loading(&mut self) {
        self.phase = FormPhase::Loading;
        self.select_disabled = true;
        self.select_prompt = SELECT_LOADING.to_string();
    }

    /// Applies the loader result: populates on success, shows the error otherwise
    pub fn apply_load(
        &mut self,
        result: Result<Vec<CatalogRow>, CatalogError>,
        config: &BinderConfig,
    ) -> Result<PopulateSummary, CatalogError> {
        match result {
            Ok(rows) => Ok(self.populate(&rows, config)),
            Err(error) => {
                self.fail_load(&error);
                Err(error)
            }
        }
    }

    /// Disables the select and replaces any banner with the load error
    pub fn fail_load(&mut self, error: &CatalogError) {
        self.options.clear();
        self.selected = None;
        self.clear_details();
        self.select_disabled = true;
        self.select_prompt = SELECT_UNAVAILABLE.to_string();
        self.banner = Some(Banner {
            message: error.to_string(),
            placement: BannerPlacement::BeforeDetails,
        });
        self.phase = FormPhase::LoadFailed;
    }

    /// Rebuilds the option list from scratch
    pub fn populate(&mut self, rows: &[CatalogRow], config: &BinderConfig) -> PopulateSummary {
        self.banner = None;
        self.selected = None;
        self.clear_details();

        let outcome = build_options(rows, config);
        let rows_skipped = outcome.skipped();
        self.options = outcome.options;

        let options_added = self.options.len();
        if options_added == 0 {
            self.select_disabled = true;
            self.banner = Some(Banner {
                message: NO_PRODUCTS_MESSAGE.to_string(),
                placement: BannerPlacement::AfterSelect,
            });
        } else {
            self.select_disabled = false;
        }
        self.select_prompt = SELECT_PROMPT.to_string();
        self.phase = FormPhase::Loaded;

        PopulateSummary {
            options_added,
            rows_skipped,
            warnings: outcome.warnings,
        }
    }

    /// Binds the option at `index`, or resets the details for `None`/out of range
    pub fn select(&mut self, index: Option<usize>) {
        let chosen = index.and_then(|i| self.options.get(i).map(|o| (i, o.metadata.clone())));

        match chosen {
            Some((i, metadata)) => {
                self.selected = Some(i);
                self.details = ProductDetails::from_metadata(&metadata);
                self.price_field.push(&metadata.cost_usd);
                self.line.unit_price = metadata.cost_usd;
                self.line.recompute();
                self.phase = FormPhase::DetailsBound;
            }
            None => {
                self.selected = None;
                self.clear_details();
                if self.phase == FormPhase::DetailsBound {
                    self.phase = FormPhase::Loaded;
                }
            }
        }
    }

    pub fn selected_option(&self) -> Option<&ProductOption> {
        self.selected.and_then(|i| self.options.get(i))
    }

    pub fn set_quantity(&mut self, value: String) -> f64 {
        self.line.quantity = value;
        self.recompute()
    }

    pub fn set_unit_price(&mut self, value: String) -> f64 {
        self.line.unit_price = value;
        self.recompute()
    }

    pub fn recompute(&mut self) -> f64 {
        self.line.recompute()
    }

    fn clear_details(&mut self) {
        self.details = ProductDetails::cleared();
        if !self.line.unit_price.is_empty() || !self.price_field.value.is_empty() {
            self.price_field.push("");
        }
        self.line.unit_price.clear();
        self.line.total.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn rows(values: Vec<Value>) -> Vec<CatalogRow> {
        values.into_iter().map(CatalogRow::from_value).collect()
    }

    fn catalog() -> Vec<CatalogRow> {
        rows(vec![
            json!({ "Item Name (MD 300 Series)": "Control Boxes X" }),
            json!({
                "Item Name (MD 300 Series)": "MD 310",
                "Manufacturer": "Mivalt",
                "Mivalt Part Number": "MV-310",
                "GDS Part No": "G1",
                "Power": "5.5 kW",
                "Material": "Stainless 304",
                "Lead Time": "10 weeks",
                "Cost (Euro)": "9000",
                "Cost USD": "12.5",
            }),
            json!({ "Item Name (MD 300 Series)": "MD 320" }),
        ])
    }

    fn loaded() -> InvoiceFormState {
        let mut state = InvoiceFormState::default();
        state.begin_loading();
        state
            .apply_load(Ok(catalog()), &BinderConfig::default())
            .unwrap();
        state
    }

    fn banner_count(state: &InvoiceFormState) -> usize {
        usize::from(state.banner.is_some())
    }

    #[test]
    fn test_begin_loading() {
        let mut state = InvoiceFormState::default();
        assert_eq!(state.phase, FormPhase::Idle);

        state.begin_loading();

        assert_eq!(state.phase, FormPhase::Loading);
        assert!(state.select_disabled);
        assert_eq!(state.select_prompt, SELECT_LOADING);
    }

    #[test]
    fn test_server_failure_disables_select_with_one_banner() {
        let mut state = InvoiceFormState::default();
        state.begin_loading();

        let result = state.apply_load(
            Err(CatalogError::server(Some("Excel file not found".to_string()))),
            &BinderConfig::default(),
        );

        assert!(result.is_err());
        assert_eq!(state.phase, FormPhase::LoadFailed);
        assert!(state.select_disabled);
        assert!(state.options.is_empty());
        assert_eq!(state.select_prompt, SELECT_UNAVAILABLE);
        assert_eq!(
            state.banner,
            Some(Banner {
                message: "Excel file not found".to_string(),
                placement: BannerPlacement::BeforeDetails,
            })
        );
    }

    #[test]
    fn test_repeated_failure_replaces_banner() {
        let mut state = InvoiceFormState::default();
        state.fail_load(&CatalogError::Transport("Failed to send request".to_string()));
        state.fail_load(&CatalogError::format("screw_presses is missing"));

        assert_eq!(banner_count(&state), 1);
        let banner = state.banner.clone().unwrap();
        assert!(banner.message.contains("screw_presses is missing"));
    }

    #[test]
    fn test_failure_without_server_text_uses_generic_message() {
        let mut state = InvoiceFormState::default();
        state.fail_load(&CatalogError::server(None));

        let banner = state.banner.unwrap();
        assert!(banner.message.starts_with("Failed to load screw press data"));
    }

    #[test]
    fn test_populate_counts_named_non_excluded_rows() {
        let mut state = InvoiceFormState::default();
        let summary = state.populate(&catalog(), &BinderConfig::default());

        assert_eq!(summary.options_added, 2);
        assert_eq!(summary.rows_skipped, 1);
        assert_eq!(summary.warnings.len(), 1);
        assert!(!state.select_disabled);
        assert_eq!(state.banner, None);
        assert_eq!(state.phase, FormPhase::Loaded);
        assert_eq!(state.options[0].identifier, "G1");
        assert_eq!(state.options[1].identifier, "MD 320");
    }

    #[test]
    fn test_populate_without_products() {
        let mut state = InvoiceFormState::default();
        let only_controls = rows(vec![
            json!({ "Item Name (MD 300 Series)": "Control Boxes" }),
            json!({ "Manufacturer": "Mivalt" }),
        ]);

        let summary = state.populate(&only_controls, &BinderConfig::default());

        assert_eq!(summary.options_added, 0);
        assert_eq!(summary.rows_skipped, 2);
        assert!(state.select_disabled);
        assert_eq!(
            state.banner,
            Some(Banner {
                message: NO_PRODUCTS_MESSAGE.to_string(),
                placement: BannerPlacement::AfterSelect,
            })
        );
    }

    #[test]
    fn test_successful_populate_removes_previous_banner() {
        let mut state = InvoiceFormState::default();
        state.fail_load(&CatalogError::server(None));

        state.populate(&catalog(), &BinderConfig::default());

        assert_eq!(state.banner, None);
        assert!(!state.select_disabled);
        assert_eq!(state.select_prompt, SELECT_PROMPT);
    }

    #[test]
    fn test_select_binds_metadata_and_total() {
        let mut state = loaded();
        state.set_quantity("3".to_string());

        state.select(Some(0));

        assert_eq!(state.phase, FormPhase::DetailsBound);
        assert_eq!(
            state.details,
            ProductDetails {
                manufacturer: "Mivalt".to_string(),
                part_number: "MV-310".to_string(),
                gds_part_no: "G1".to_string(),
                power: "5.5 kW".to_string(),
                material: "Stainless 304".to_string(),
                lead_time: "10 weeks".to_string(),
                cost_euro: "9000".to_string(),
            }
        );
        assert_eq!(state.line.unit_price, "12.5");
        assert_eq!(state.line.total, "37.50");
        assert_eq!(state.selected_option().map(|o| o.label.as_str()), Some("MD 310"));
    }

    #[test]
    fn test_select_sparse_row_shows_placeholders() {
        let mut state = loaded();

        state.select(Some(1));

        assert_eq!(state.details.manufacturer, "-");
        assert_eq!(state.details.part_number, "-");
        assert_eq!(state.details.gds_part_no, "-");
        assert_eq!(state.details.power, "-");
        assert_eq!(state.details.material, "-");
        assert_eq!(state.details.lead_time, "-");
        assert_eq!(state.details.cost_euro, "0.00");
        assert_eq!(state.line.unit_price, "0.00");
        assert_eq!(state.line.total, "0.00");
    }

    #[test]
    fn test_deselect_resets_all_bound_fields() {
        let mut state = loaded();
        state.select(Some(0));

        state.select(None);
        let once = state.clone();
        state.select(None);

        assert_eq!(state, once);
        assert_eq!(state.phase, FormPhase::Loaded);
        assert_eq!(state.selected, None);
        assert_eq!(state.details, ProductDetails::cleared());
        assert_eq!(state.line.unit_price, "");
        assert_eq!(state.line.total, "");
        assert_eq!(state.line.quantity, DEFAULT_QUANTITY);
        assert_eq!(state.price_field.value, "");
    }

    #[test]
    fn test_typing_does_not_push_field_values() {
        let mut state = loaded();
        state.select(Some(0));
        let pushed = state.price_field.clone();
        assert_eq!(pushed.value, "12.5");

        // partial entries as a number input reports them mid-typing
        state.set_unit_price(".".to_string());
        state.set_unit_price("".to_string());
        state.set_quantity("-".to_string());

        assert_eq!(state.price_field, pushed);
        assert_eq!(state.line.unit_price, "");
        assert_eq!(state.line.quantity, "-");
        assert_eq!(state.line.total, "0.00");
    }

    #[test]
    fn test_reselect_pushes_price_again() {
        let mut state = loaded();
        state.select(Some(0));
        let first = state.price_field.clone();

        state.set_unit_price("99".to_string());
        state.select(Some(0));

        assert_eq!(state.price_field.value, "12.5");
        assert_ne!(state.price_field.revision, first.revision);
        assert_eq!(state.line.unit_price, "12.5");

        state.select(None);
        assert_eq!(state.price_field.value, "");
        assert_eq!(state.line.unit_price, "");
    }

    #[test]
    fn test_out_of_range_selection_resets() {
        let mut state = loaded();
        state.select(Some(0));

        state.select(Some(99));

        assert_eq!(state.selected, None);
        assert_eq!(state.details, ProductDetails::cleared());
    }

    #[test]
    fn test_edits_recompute_total() {
        let mut state = loaded();
        state.select(Some(0));

        assert_eq!(state.set_quantity("4".to_string()), 50.0);
        assert_eq!(state.line.total, "50.00");

        state.set_unit_price("10".to_string());
        assert_eq!(state.line.total, "40.00");
        assert_eq!(state.phase, FormPhase::DetailsBound);

        state.set_quantity("".to_string());
        assert_eq!(state.line.total, "0.00");

        state.set_quantity("two".to_string());
        assert_eq!(state.line.total, "0.00");
    }

    #[test]
    fn test_recompute_examples() {
        let mut line = InvoiceLine {
            quantity: "3".to_string(),
            unit_price: "12.5".to_string(),
            total: String::new(),
        };
        assert_eq!(line.recompute(), 37.5);
        assert_eq!(line.total, "37.50");

        line.quantity = String::new();
        line.unit_price = "10".to_string();
        line.recompute();
        assert_eq!(line.total, "0.00");

        line.quantity = "2.5".to_string();
        line.unit_price = "1.1".to_string();
        line.recompute();
        assert_eq!(line.total, "2.75");
    }

    #[test]
    fn test_repopulate_keeps_single_binding() {
        let mut state = loaded();
        state.select(Some(0));

        let second = rows(vec![json!({
            "Item Name (MD 300 Series)": "MD 330",
            "GDS Part No": "G3",
            "Cost USD": 200,
        })]);
        state.populate(&second, &BinderConfig::default());

        assert_eq!(state.options.len(), 1);
        assert_eq!(state.selected, None);
        assert_eq!(state.details, ProductDetails::cleared());

        state.select(Some(0));
        assert_eq!(state.selected_option().map(|o| o.identifier.as_str()), Some("G3"));
        assert_eq!(state.line.unit_price, "200");
        assert_eq!(state.line.total, "200.00");
    }

    #[test]
    fn test_selection_ignored_after_load_failure() {
        let mut state = InvoiceFormState::default();
        state.fail_load(&CatalogError::server(None));

        state.select(Some(0));

        assert_eq!(state.phase, FormPhase::LoadFailed);
        assert_eq!(state.selected, None);
    }
}

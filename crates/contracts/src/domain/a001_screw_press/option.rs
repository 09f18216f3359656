use super::catalog::{CatalogColumns, CatalogRow};
use super::error::RowWarning;
use serde::{Deserialize, Serialize};

/// Значение для отсутствующего атрибута
pub const PLACEHOLDER: &str = "-";

/// Значение для отсутствующей или нечисловой цены
pub const PRICE_DEFAULT: &str = "0.00";

// ============================================================================
// Configuration
// ============================================================================

/// Настройки построения списка товаров
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BinderConfig {
    pub columns: CatalogColumns,
    /// Rows whose display name contains this keyword (case-insensitive) are
    /// not products. `None` or a blank keyword keeps every named row.
    pub excluded_keyword: Option<String>,
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self {
            columns: CatalogColumns::default(),
            excluded_keyword: Some("control boxes".to_string()),
        }
    }
}

impl BinderConfig {
    fn is_excluded(&self, name: &str) -> bool {
        match self.excluded_keyword.as_deref().map(str::trim) {
            Some(keyword) if !keyword.is_empty() => name
                .to_lowercase()
                .contains(&keyword.to_lowercase()),
            _ => false,
        }
    }
}

// ============================================================================
// Product option
// ============================================================================

/// Атрибуты товара, показываемые после выбора
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductMetadata {
    pub manufacturer: String,
    pub part_number: String,
    pub gds_part_no: String,
    pub power: String,
    pub material: String,
    pub lead_time: String,
    pub cost_euro: String,
    pub cost_usd: String,
}

impl Default for ProductMetadata {
    fn default() -> Self {
        Self {
            manufacturer: PLACEHOLDER.to_string(),
            part_number: PLACEHOLDER.to_string(),
            gds_part_no: PLACEHOLDER.to_string(),
            power: PLACEHOLDER.to_string(),
            material: PLACEHOLDER.to_string(),
            lead_time: PLACEHOLDER.to_string(),
            cost_euro: PRICE_DEFAULT.to_string(),
            cost_usd: PRICE_DEFAULT.to_string(),
        }
    }
}

/// Элемент выпадающего списка товаров
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductOption {
    /// Secondary part number if present, else the display name. Not unique.
    pub identifier: String,
    pub label: String,
    pub metadata: ProductMetadata,
}

impl ProductOption {
    /// Builds an option from a row at position `index`.
    ///
    /// Returns `Err` when the row is not a product. Degraded prices are
    /// reported through `warnings` while the option is still produced.
    pub fn from_row(
        index: usize,
        row: &CatalogRow,
        config: &BinderConfig,
        warnings: &mut Vec<RowWarning>,
    ) -> Result<Self, RowWarning> {
        let columns = &config.columns;

        let name = row
            .text(&columns.name)
            .ok_or(RowWarning::MissingName { index })?;
        if config.is_excluded(&name) {
            return Err(RowWarning::ExcludedCategory { index, name });
        }

        let gds_part_no = row.text(&columns.gds_part_no);
        let attr = |column: &str| row.text(column).unwrap_or_else(|| PLACEHOLDER.to_string());
        let mut price = |column: &str| price_text(index, row, column, warnings);

        let metadata = ProductMetadata {
            manufacturer: attr(&columns.manufacturer),
            part_number: attr(&columns.part_number),
            gds_part_no: gds_part_no
                .clone()
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            power: attr(&columns.power),
            material: attr(&columns.material),
            lead_time: attr(&columns.lead_time),
            cost_euro: price(&columns.cost_euro),
            cost_usd: price(&columns.cost_usd),
        };

        Ok(Self {
            identifier: gds_part_no.unwrap_or_else(|| name.clone()),
            label: name,
            metadata,
        })
    }
}

fn price_text(
    index: usize,
    row: &CatalogRow,
    column: &str,
    warnings: &mut Vec<RowWarning>,
) -> String {
    match row.text(column) {
        None => PRICE_DEFAULT.to_string(),
        Some(value) => match value.parse::<f64>() {
            Ok(n) if n.is_finite() => value,
            _ => {
                warnings.push(RowWarning::NonNumericPrice {
                    index,
                    column: column.to_string(),
                    value,
                });
                PRICE_DEFAULT.to_string()
            }
        },
    }
}

// ============================================================================
// Option list
// ============================================================================

/// Результат построения списка
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BindOutcome {
    pub options: Vec<ProductOption>,
    pub warnings: Vec<RowWarning>,
}

impl BindOutcome {
    pub fn skipped(&self) -> usize {
        self.warnings.iter().filter(|w| w.is_skip()).count()
    }
}

/// Converts catalog rows into select options, keeping source order
pub fn build_options(rows: &[CatalogRow], config: &BinderConfig) -> BindOutcome {
    let mut outcome = BindOutcome::default();

    for (index, row) in rows.iter().enumerate() {
        match ProductOption::from_row(index, row, config, &mut outcome.warnings) {
            Ok(option) => outcome.options.push(option),
            Err(warning) => outcome.warnings.push(warning),
        }
    }

    outcome
}

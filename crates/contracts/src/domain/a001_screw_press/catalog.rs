use super::error::CatalogError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Catalog row
// ============================================================================

/// Строка листа "Screw Presses", ключи: заголовки колонок Excel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogRow(pub Map<String, Value>);

impl CatalogRow {
    /// Wraps an arbitrary JSON value. Anything but an object becomes an empty row.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    /// Text of a column if it is present.
    ///
    /// `null`, a missing key and blank strings count as absent. Numbers and
    /// booleans are present, so `0` and `"0"` are real values.
    pub fn text(&self, column: &str) -> Option<String> {
        match self.0.get(column)? {
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

// ============================================================================
// Column names
// ============================================================================

/// Заголовки колонок, из которых собирается карточка товара
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogColumns {
    pub name: String,
    pub manufacturer: String,
    pub part_number: String,
    pub gds_part_no: String,
    pub power: String,
    pub material: String,
    pub lead_time: String,
    pub cost_euro: String,
    pub cost_usd: String,
}

impl Default for CatalogColumns {
    fn default() -> Self {
        Self {
            name: "Item Name (MD 300 Series)".to_string(),
            manufacturer: "Manufacturer".to_string(),
            part_number: "Mivalt Part Number".to_string(),
            gds_part_no: "GDS Part No".to_string(),
            power: "Power".to_string(),
            material: "Material".to_string(),
            lead_time: "Lead Time".to_string(),
            cost_euro: "Cost (Euro)".to_string(),
            cost_usd: "Cost USD".to_string(),
        }
    }
}

// ============================================================================
// Response envelope
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogData {
    /// Kept untyped so a non-array value can be reported as a format error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screw_presses: Option<Value>,
}

/// Ответ `GET /get_product_data`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<CatalogData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CatalogResponse {
    /// Parses a response body
    pub fn parse(body: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(body).map_err(|e| CatalogError::format(e.to_string()))
    }

    /// Extracts the row set, enforcing the envelope invariants
    pub fn into_rows(self) -> Result<Vec<CatalogRow>, CatalogError> {
        if !self.success {
            return Err(CatalogError::server(self.error));
        }

        let data = self
            .data
            .ok_or_else(|| CatalogError::format("response has no data"))?;

        match data.screw_presses {
            Some(Value::Array(items)) => Ok(items.into_iter().map(CatalogRow::from_value).collect()),
            Some(_) => Err(CatalogError::format("screw_presses is not an array")),
            None => Err(CatalogError::format("screw_presses is missing")),
        }
    }
}

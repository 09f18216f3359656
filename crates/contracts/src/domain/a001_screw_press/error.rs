use thiserror::Error;

/// Message shown when the server reports a failure without details
pub const DEFAULT_LOAD_ERROR: &str = "Failed to load screw press data. \
Please ensure the Excel file is properly uploaded and try again.";

fn server_message(message: &Option<String>) -> &str {
    match message {
        Some(m) if !m.trim().is_empty() => m,
        _ => DEFAULT_LOAD_ERROR,
    }
}

/// Ошибки загрузки каталога
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// Request could not be sent or the body could not be read
    #[error("{0}")]
    Transport(String),

    /// Server answered with `success: false` or a non-2xx status
    #[error("{}", server_message(.message))]
    Server { message: Option<String> },

    /// Body does not match the expected envelope
    #[error("Invalid data format received from server: {0}")]
    Format(String),
}

impl CatalogError {
    pub fn server(message: Option<String>) -> Self {
        Self::Server { message }
    }

    pub fn format(details: impl Into<String>) -> Self {
        Self::Format(details.into())
    }
}

/// Problem with a single catalog row. Never fatal: the row is skipped or degraded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowWarning {
    #[error("row {index}: missing display name, skipped")]
    MissingName { index: usize },

    #[error("row {index}: '{name}' matches excluded category, skipped")]
    ExcludedCategory { index: usize, name: String },

    #[error("row {index}: non-numeric {column} value '{value}', using 0")]
    NonNumericPrice {
        index: usize,
        column: String,
        value: String,
    },
}

impl RowWarning {
    /// True when the row was dropped from the option list
    pub fn is_skip(&self) -> bool {
        !matches!(self, RowWarning::NonNumericPrice { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_prefers_server_text() {
        let err = CatalogError::server(Some("Sheet 'Screw Presses' not found".to_string()));
        assert_eq!(err.to_string(), "Sheet 'Screw Presses' not found");
    }

    #[test]
    fn test_server_error_falls_back_to_generic_text() {
        assert_eq!(CatalogError::server(None).to_string(), DEFAULT_LOAD_ERROR);
        assert_eq!(
            CatalogError::server(Some("   ".to_string())).to_string(),
            DEFAULT_LOAD_ERROR
        );
    }

    #[test]
    fn test_format_error_display() {
        let err = CatalogError::format("screw_presses is not an array");
        assert_eq!(
            err.to_string(),
            "Invalid data format received from server: screw_presses is not an array"
        );
    }

    #[test]
    fn test_row_warning_kinds() {
        assert!(RowWarning::MissingName { index: 0 }.is_skip());
        assert!(!RowWarning::NonNumericPrice {
            index: 1,
            column: "Cost USD".to_string(),
            value: "n/a".to_string(),
        }
        .is_skip());
    }
}

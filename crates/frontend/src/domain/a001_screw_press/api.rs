use crate::shared::api_utils::api_url;
use contracts::domain::a001_screw_press::{CatalogError, CatalogResponse, CatalogRow};
use gloo_net::http::Request;

/// Loads the screw press catalog with a single GET request
pub async fn fetch_catalog(path: &str) -> Result<Vec<CatalogRow>, CatalogError> {
    let url = api_url(path);
    log::debug!("Fetching product data from {}", url);

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| CatalogError::Transport(format!("Failed to send request: {}", e)))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| CatalogError::Transport(format!("Failed to read response: {}", e)))?;

    decode_catalog(status, &body)
}

/// Interprets status and body of a catalog response
pub fn decode_catalog(status: u16, body: &str) -> Result<Vec<CatalogRow>, CatalogError> {
    let http_ok = (200..300).contains(&status);

    let response = match CatalogResponse::parse(body) {
        Ok(response) => response,
        Err(_) if !http_ok => {
            return Err(CatalogError::Transport(format!(
                "HTTP error! status: {}",
                status
            )))
        }
        Err(e) => return Err(e),
    };

    if !http_ok {
        let message = response
            .error
            .unwrap_or_else(|| format!("HTTP error! status: {}", status));
        return Err(CatalogError::server(Some(message)));
    }

    response.into_rows()
}

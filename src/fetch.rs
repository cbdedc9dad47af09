//! Fetch collaborator: one HTTP GET per analysis, no retries.

use url::Url;

use crate::error::CloudError;

/// Fetch the raw document at `url`. A malformed URL, a network failure, and a
/// non-success status all surface uniformly as `CloudError::Fetch`.
pub async fn fetch_document(client: &reqwest::Client, url: &str) -> Result<String, CloudError> {
    let parsed = Url::parse(url).map_err(|e| CloudError::fetch(url, e))?;

    let response = client
        .get(parsed)
        .send()
        .await
        .map_err(|e| CloudError::fetch(url, e))?
        .error_for_status()
        .map_err(|e| CloudError::fetch(url, e))?;

    response.text().await.map_err(|e| CloudError::fetch(url, e))
}

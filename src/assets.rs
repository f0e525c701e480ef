use gloo::net::http::Request;

use crate::error::ViewerError;
use crate::model::ModelAsset;

/// Fetches and parses the globe model. No retry; the caller keeps the
/// fallback sphere on error.
pub async fn load_model(url: &str) -> Result<ModelAsset, ViewerError> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|source| ViewerError::Fetch {
            url: url.to_string(),
            source,
        })?;
    if !resp.ok() {
        return Err(ViewerError::Status {
            url: url.to_string(),
            status: resp.status(),
        });
    }
    let text = resp.text().await.map_err(|source| ViewerError::Fetch {
        url: url.to_string(),
        source,
    })?;
    ModelAsset::from_json(&text)
}

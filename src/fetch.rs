use log;
use reqwest;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
}

/// Retrieves the complete body at `url` with one blocking GET.
///
/// Non-success statuses are not rejected here: whatever body the server
/// returns is handed to the decoder, which rejects anything that is not a
/// JPEG. The response is fully drained before this returns, so the
/// connection is released on every path.
pub fn fetch_image(url: &str) -> Result<Vec<u8>, FetchError> {
    log::info!("Fetching image from {}", url);
    let response = reqwest::blocking::get(url)?;
    log::info!("Fetch response status: {}", response.status());

    let bytes = response.bytes()?;
    log::info!("Fetched {} bytes", bytes.len());

    Ok(bytes.to_vec())
}

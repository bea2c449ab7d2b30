mod basic;
mod client;

pub use basic::BasicClient;
pub use client::HttpClient;

use anyhow::{Result, anyhow};
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use serde::Serialize;

/// POSTs a JSON body to `url` and returns the raw response bytes.
///
/// # Errors
///
/// Fails on transport errors and on non-2xx responses; the error
/// carries the status and response body for diagnosis.
pub async fn post_json<C: HttpClient, B: Serialize>(
    client: &C,
    url: &str,
    body: &B,
) -> Result<Vec<u8>> {
    let mut req = reqwest::Request::new(reqwest::Method::POST, url.parse()?);
    req.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    *req.body_mut() = Some(serde_json::to_vec(body)?.into());

    let resp = client.execute(req).await?;

    if !resp.status().is_success() {
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        return Err(anyhow!("backend returned status {status}: {text}"));
    }

    Ok(resp.bytes().await?.to_vec())
}

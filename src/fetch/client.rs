use async_trait::async_trait;
use reqwest::{Request, Response};

/// Abstraction over request execution so the transport can be swapped
/// or wrapped (timeouts, retries) without touching callers.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}

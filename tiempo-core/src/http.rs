//! HTTP capability consumed by forecast providers.
//!
//! Providers never talk to `reqwest` directly; they go through the
//! [`HttpFetch`] trait so tests can substitute a fake transport.

use std::fmt::Debug;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::TransportError;

/// A completed HTTP exchange: status code plus raw body bytes.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait HttpFetch: Send + Sync + Debug {
    /// Perform a single GET. Timeouts, TLS and redirects are this
    /// implementation's business, not the caller's.
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

/// The production transport, backed by a shared `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new() -> Self {
        Self { client: Client::new() }
    }
}

#[async_trait]
impl HttpFetch for ReqwestFetcher {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let res = self.client.get(url).send().await?;

        let status = res.status().as_u16();
        let body = res.bytes().await?.to_vec();
        debug!(url, status, len = body.len(), "HTTP GET completed");

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_covers_the_2xx_range() {
        assert!(HttpResponse { status: 200, body: vec![] }.is_success());
        assert!(HttpResponse { status: 204, body: vec![] }.is_success());
        assert!(!HttpResponse { status: 301, body: vec![] }.is_success());
        assert!(!HttpResponse { status: 404, body: vec![] }.is_success());
        assert!(!HttpResponse { status: 500, body: vec![] }.is_success());
    }
}

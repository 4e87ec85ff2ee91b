//! Typed wrapper for the public event page endpoint.

use marquee_core::event::PublicEvent;
use marquee_core::theme::{resolve_public, ResolvedView};

use crate::config::ClientConfig;
use crate::error::{classify_response, ClientResult};
use crate::response::DataResponse;

/// HTTP client for the unauthenticated public surface.
pub struct PublicApi {
    client: reqwest::Client,
    base_url: String,
}

impl PublicApi {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self::with_client(client, config.base_url.clone()))
    }

    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `GET /public/events/:slug`
    pub async fn get_event(&self, slug: &str) -> ClientResult<PublicEvent> {
        let response = self
            .client
            .get(format!("{}/public/events/{slug}", self.base_url))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(classify_response(status.as_u16(), &body));
        }

        let envelope: DataResponse<PublicEvent> = response.json().await?;
        Ok(envelope.data)
    }

    /// Fetch and resolve an event for rendering.
    ///
    /// An event without an assigned template fails with
    /// [`CoreError::MissingTheme`](marquee_core::CoreError::MissingTheme),
    /// which the page renders as its theme-not-assigned state. The failure
    /// is scoped to this one event's render.
    pub async fn resolved_page(&self, slug: &str) -> ClientResult<ResolvedView> {
        let event = self.get_event(slug).await?;
        let view = resolve_public(&event)?;
        Ok(view)
    }
}

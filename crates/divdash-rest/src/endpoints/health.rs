//! Connectivity probe

use super::{endpoint_url, read_body};
use crate::error::{RestError, RestResult};
use crate::types::paths;
use reqwest::Client;
use tracing::{debug, instrument};

/// Health check endpoint
pub struct HealthEndpoints<'a> {
    client: &'a Client,
    base_url: &'a str,
}

impl<'a> HealthEndpoints<'a> {
    pub fn new(client: &'a Client, base_url: &'a str) -> Self {
        Self { client, base_url }
    }

    /// Probe the service; any success status means it is available
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn check(&self) -> RestResult<()> {
        let url = endpoint_url(self.base_url, paths::HEALTH)?;
        debug!("Probing analytics service");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| RestError::from_transport(e, self.base_url))?;

        read_body(response, self.base_url).await.map(|_| ())
    }
}

//! Documentation client: HTTP transport plus the endpoint templates.

use std::time::Duration;

use crate::http::{HttpClient, DEFAULT_TIMEOUT_SECS};
use crate::types::DocsResult;
use crate::urls::Endpoints;

/// Fetches inventories and documents for provider repositories.
#[derive(Clone)]
pub struct DocsClient {
    pub(crate) http: HttpClient,
    pub(crate) endpoints: Endpoints,
}

impl DocsClient {
    /// Client against the public hosts with the default timeout.
    pub fn new() -> DocsResult<Self> {
        Self::with_endpoints(
            Endpoints::default(),
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    /// Client against custom hosts.
    pub fn with_endpoints(endpoints: Endpoints, timeout: Duration) -> DocsResult<Self> {
        Ok(Self {
            http: HttpClient::new(timeout)?,
            endpoints,
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

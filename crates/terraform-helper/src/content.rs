//! Raw document retrieval.

use crate::client::DocsClient;
use crate::types::{DocsResult, ProviderQuery, DOC_SUFFIX};

impl DocsClient {
    /// URL of the raw markdown for `identifier`.
    pub fn document_url(&self, query: &ProviderQuery, identifier: &str) -> String {
        format!(
            "{}/{identifier}{DOC_SUFFIX}",
            self.endpoints.raw_content_base_url(query)
        )
    }

    /// Fetch the markdown body of one document, verbatim.
    pub async fn fetch_document(
        &self,
        query: &ProviderQuery,
        identifier: &str,
    ) -> DocsResult<String> {
        let url = self.document_url(query, identifier);
        self.http.get(&url, None).await
    }
}

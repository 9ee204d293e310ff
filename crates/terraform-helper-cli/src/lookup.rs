//! One lookup, end to end: list, match, select, fetch.
//!
//! Each step's error is wrapped with the step that produced it. Nothing is
//! written to stdout here; the caller renders the returned markdown.

use std::io::Write;

use anyhow::{Context, Result};

use terraform_helper::{resolve, Disambiguator, DocsClient, DocsError};

use crate::config::Settings;
use crate::render;

/// The resolved document and its raw markdown.
#[derive(Debug, Clone)]
pub struct LookupResult {
    pub identifier: String,
    pub markdown: String,
}

/// Resolve the configured search term and fetch the chosen document.
pub async fn lookup(
    client: &DocsClient,
    settings: &Settings,
    disambiguator: &dyn Disambiguator,
) -> Result<LookupResult> {
    let query = &settings.query;
    let kind = query.kind();

    let items = client.fetch_inventory(query).await.with_context(|| {
        format!(
            "failed to fetch {kind} for provider '{}'",
            query.provider()
        )
    })?;

    if items.is_empty() {
        return Err(DocsError::EmptyInventory {
            kind,
            provider: query.provider().to_string(),
        }
        .into());
    }
    tracing::info!(provider = query.provider(), count = items.len(), "fetched {kind}");

    let identifier = match resolve(kind, &settings.search_term, &items, disambiguator) {
        Ok(id) => id,
        Err(e @ DocsError::SelectionCancelled(_)) => {
            return Err(anyhow::Error::new(e).context("selection failed"))
        }
        Err(e) => return Err(e.into()),
    };
    tracing::info!(identifier = %identifier, "selected");

    let markdown = client
        .fetch_document(query, &identifier)
        .await
        .context("failed to fetch markdown")?;

    Ok(LookupResult {
        identifier,
        markdown,
    })
}

/// Render a fetched document into `out`.
pub fn render_document<W: Write>(markdown: &str, out: &mut W) -> Result<()> {
    render::render_to(markdown, out)
        .and_then(|()| out.flush())
        .context("failed to render markdown")
}

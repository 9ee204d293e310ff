//! Core data types for provider documentation lookups.

use std::fmt;

/// File suffix carried by every provider documentation page.
pub const DOC_SUFFIX: &str = ".html.markdown";

/// The category of documentable entity a provider exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentKind {
    #[default]
    Resource,
    DataSource,
}

impl DocumentKind {
    /// Directory segment used in the docs tree (`r` or `d`).
    pub fn dir(self) -> &'static str {
        match self {
            DocumentKind::Resource => "r",
            DocumentKind::DataSource => "d",
        }
    }

    /// Human-readable plural name used in messages.
    pub fn plural_name(self) -> &'static str {
        match self {
            DocumentKind::Resource => "resources",
            DocumentKind::DataSource => "data sources",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.plural_name())
    }
}

/// A validated lookup target: one provider, one kind, optional CDKTF dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderQuery {
    provider: String,
    kind: DocumentKind,
    dialect: Option<String>,
}

impl ProviderQuery {
    /// Build a query. The provider name is trimmed and lowercased; an empty
    /// or whitespace-only dialect means "no dialect".
    pub fn new(
        provider: &str,
        kind: DocumentKind,
        dialect: Option<&str>,
    ) -> DocsResult<Self> {
        let provider = provider.trim().to_lowercase();
        if provider.is_empty() {
            return Err(DocsError::InvalidQuery("provider is required".to_string()));
        }
        if provider.contains('/') {
            return Err(DocsError::InvalidQuery(format!(
                "provider name must not contain '/': {provider}"
            )));
        }

        let dialect = dialect
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_lowercase);

        Ok(Self {
            provider,
            kind,
            dialect,
        })
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn dialect(&self) -> Option<&str> {
        self.dialect.as_deref()
    }

    /// Path of the kind directory inside the provider repository, with a
    /// trailing slash (e.g. `website/docs/cdktf/python/d/`).
    pub fn docs_prefix(&self) -> String {
        match &self.dialect {
            Some(dialect) => format!("website/docs/cdktf/{dialect}/{}/", self.kind.dir()),
            None => format!("website/docs/{}/", self.kind.dir()),
        }
    }
}

/// Ordered document identifiers as returned by one fetch strategy.
pub type Inventory = Vec<String>;

/// How the resolver arrived at (or failed to arrive at) a single document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    ExactMatch(String),
    SingleMatch(String),
    AmbiguousMatches(Vec<String>),
}

/// Errors that can occur while resolving and fetching documentation.
#[derive(thiserror::Error, Debug)]
pub enum DocsError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("remote returned status {status}: {body}")]
    RemoteStatus { status: u16, body: String },

    #[error("decode response: {0}")]
    Decode(String),

    #[error("no {kind} found for provider '{provider}' (provider may not exist or use different structure)")]
    EmptyInventory { kind: DocumentKind, provider: String },

    #[error("no {kind} found matching '{term}'")]
    NoMatches { kind: DocumentKind, term: String },

    #[error("selection cancelled: {0}")]
    SelectionCancelled(String),

    #[error("invalid query: {0}")]
    InvalidQuery(String),
}

impl From<reqwest::Error> for DocsError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            DocsError::Decode(e.to_string())
        } else {
            DocsError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for DocsError {
    fn from(e: serde_json::Error) -> Self {
        DocsError::Decode(e.to_string())
    }
}

/// Convenience result type.
pub type DocsResult<T> = Result<T, DocsError>;

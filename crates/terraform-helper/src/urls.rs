//! URL templates for the provider repositories.
//!
//! Pure string building, no I/O. The path shapes must stay byte-for-byte
//! identical to what the remote host routes.

use crate::types::ProviderQuery;

/// Default REST API host.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Default raw file host.
pub const DEFAULT_RAW_BASE: &str = "https://raw.githubusercontent.com";

/// Organisation that owns the provider repositories.
const OWNER: &str = "hashicorp";

/// Branch documentation is read from.
const BRANCH: &str = "main";

/// Base hosts the URL templates are rooted at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    api_base: String,
    raw_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE, DEFAULT_RAW_BASE)
    }
}

impl Endpoints {
    /// Create endpoints rooted at custom hosts (mirrors, test servers).
    /// Trailing slashes are dropped.
    pub fn new(api_base: &str, raw_base: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            raw_base: raw_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn raw_base(&self) -> &str {
        &self.raw_base
    }

    /// Recursive tree listing of the whole repository.
    pub fn bulk_listing_url(&self, query: &ProviderQuery) -> String {
        format!(
            "{}/repos/{OWNER}/{}/git/trees/{BRANCH}?recursive=1",
            self.api_base,
            repo_name(query)
        )
    }

    /// Contents listing of the single kind directory.
    pub fn directory_listing_url(&self, query: &ProviderQuery) -> String {
        format!(
            "{}/repos/{OWNER}/{}/contents/{}",
            self.api_base,
            repo_name(query),
            docs_dir(query)
        )
    }

    /// Directory that raw document files are fetched from, no trailing slash.
    pub fn raw_content_base_url(&self, query: &ProviderQuery) -> String {
        format!(
            "{}/{OWNER}/{}/refs/heads/{BRANCH}/{}",
            self.raw_base,
            repo_name(query),
            docs_dir(query)
        )
    }
}

fn repo_name(query: &ProviderQuery) -> String {
    format!("terraform-provider-{}", query.provider())
}

fn docs_dir(query: &ProviderQuery) -> String {
    let prefix = query.docs_prefix();
    prefix.trim_end_matches('/').to_string()
}

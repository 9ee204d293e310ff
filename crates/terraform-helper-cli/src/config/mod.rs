//! Configuration loading and resolution.
//!
//! Precedence: explicit value, then environment, then default.

use std::time::Duration;

use terraform_helper::http::DEFAULT_TIMEOUT_SECS;
use terraform_helper::urls::{DEFAULT_API_BASE, DEFAULT_RAW_BASE};
use terraform_helper::{DocumentKind, Endpoints, ProviderQuery};

/// Env var overriding the API host.
pub const API_URL_ENV: &str = "TERRAFORM_HELPER_API_URL";
/// Env var overriding the raw content host.
pub const RAW_URL_ENV: &str = "TERRAFORM_HELPER_RAW_URL";
/// Env var overriding the per-request timeout, in seconds.
pub const TIMEOUT_ENV: &str = "TERRAFORM_HELPER_TIMEOUT";

/// Dialect used when `--cdktf` is given without a language.
pub const DEFAULT_CDKTF_LANGUAGE: &str = "typescript";

/// Argument validation failures.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("provider is required")]
    MissingProvider,

    #[error("search term is required")]
    MissingSearchTerm,

    #[error("cannot specify both -r and -d flags")]
    ConflictingFlags,

    #[error("invalid {var} value '{value}': expected a positive number of seconds")]
    InvalidTimeout { var: &'static str, value: String },
}

/// Everything one invocation needs, already validated.
#[derive(Debug, Clone)]
pub struct Settings {
    pub query: ProviderQuery,
    pub search_term: String,
    pub endpoints: Endpoints,
    pub timeout: Duration,
}

/// Raw inputs as parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct RawArgs {
    pub provider: String,
    pub search_term: String,
    pub resource: bool,
    pub datasource: bool,
    pub cdktf: Option<String>,
}

impl RawArgs {
    /// Resource unless `-d` was given; both flags together is an error.
    pub fn document_kind(&self) -> Result<DocumentKind, ConfigError> {
        match (self.resource, self.datasource) {
            (true, true) => Err(ConfigError::ConflictingFlags),
            (_, true) => Ok(DocumentKind::DataSource),
            _ => Ok(DocumentKind::Resource),
        }
    }
}

/// Validate arguments and resolve the environment into [`Settings`].
pub fn resolve_settings(args: &RawArgs) -> anyhow::Result<Settings> {
    resolve_settings_with(args, |key| std::env::var(key).ok())
}

/// Same as [`resolve_settings`] with an injectable environment lookup.
pub fn resolve_settings_with(
    args: &RawArgs,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    if args.provider.trim().is_empty() {
        return Err(ConfigError::MissingProvider.into());
    }
    let search_term = args.search_term.trim();
    if search_term.is_empty() {
        return Err(ConfigError::MissingSearchTerm.into());
    }

    let kind = args.document_kind()?;
    let query = ProviderQuery::new(&args.provider, kind, args.cdktf.as_deref())?;

    let api_base = env(API_URL_ENV).unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    let raw_base = env(RAW_URL_ENV).unwrap_or_else(|| DEFAULT_RAW_BASE.to_string());

    Ok(Settings {
        query,
        search_term: search_term.to_string(),
        endpoints: Endpoints::new(&api_base, &raw_base),
        timeout: resolve_timeout(env(TIMEOUT_ENV))?,
    })
}

fn resolve_timeout(value: Option<String>) -> Result<Duration, ConfigError> {
    let Some(value) = value else {
        return Ok(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    };
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout {
            var: TIMEOUT_ENV,
            value,
        }),
    }
}

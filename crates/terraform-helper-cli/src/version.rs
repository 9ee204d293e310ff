//! Version string, with build metadata when the build provides it.

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Commit hash injected at build time, if any.
pub const COMMIT: Option<&str> = option_env!("TERRAFORM_HELPER_COMMIT");

/// Build timestamp injected at build time, if any.
pub const BUILD_TIME: Option<&str> = option_env!("TERRAFORM_HELPER_BUILD_TIME");

/// `terraform-helper version X (commit: C, built: T)`.
pub fn long_version() -> String {
    format!(
        "terraform-helper version {VERSION} (commit: {}, built: {})",
        COMMIT.unwrap_or("unknown"),
        BUILD_TIME.unwrap_or("unknown")
    )
}

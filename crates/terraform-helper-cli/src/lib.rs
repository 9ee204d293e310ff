//! terraform-helper command-line front end.

pub mod config;
pub mod lookup;
pub mod prompt;
pub mod render;
pub mod version;

pub use config::{resolve_settings, RawArgs, Settings};
pub use lookup::{lookup, LookupResult};
pub use prompt::TerminalSelector;

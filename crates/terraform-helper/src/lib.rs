//! terraform-helper — resolve partial names against a Terraform provider's
//! documentation and fetch the matching page.

pub mod client;
pub mod content;
pub mod http;
pub mod inventory;
pub mod matcher;
pub mod resolver;
pub mod types;
pub mod urls;

pub use client::DocsClient;
pub use inventory::{filter_directory_entries, filter_tree_entries};
pub use matcher::{find_exact_match, find_matches};
pub use resolver::{classify, resolve, Disambiguator};
pub use types::*;
pub use urls::Endpoints;

//! Inventory fetching: which documents does a provider publish?
//!
//! The bulk strategy reads the recursive git tree in one request. Some
//! repositories are too large for the tree endpoint (it truncates or
//! errors), so an error or an empty result falls back to listing the single
//! kind directory through the contents endpoint.

use serde::Deserialize;

use crate::client::DocsClient;
use crate::types::{DocsResult, Inventory, ProviderQuery, DOC_SUFFIX};

const TREE_ACCEPT: &str = "application/vnd.github.v3+json";

/// Response of the recursive tree endpoint.
#[derive(Debug, Deserialize)]
pub struct TreeListing {
    #[serde(default)]
    pub tree: Vec<TreeEntry>,
}

/// One entry of a tree listing.
#[derive(Debug, Deserialize)]
pub struct TreeEntry {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// One entry of a directory contents listing.
#[derive(Debug, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl DocsClient {
    /// List every document of the query's kind and dialect.
    ///
    /// Errors from the bulk strategy are swallowed; only the fallback's
    /// error reaches the caller. An empty `Ok` is a valid answer.
    pub async fn fetch_inventory(&self, query: &ProviderQuery) -> DocsResult<Inventory> {
        match self.fetch_inventory_via_tree(query).await {
            Ok(items) if !items.is_empty() => {
                tracing::debug!(count = items.len(), "inventory from tree listing");
                return Ok(items);
            }
            Ok(_) => tracing::debug!("tree listing had no documents, falling back"),
            Err(e) => tracing::debug!(error = %e, "tree listing failed, falling back"),
        }

        let items = self.fetch_inventory_via_contents(query).await?;
        tracing::debug!(count = items.len(), "inventory from contents listing");
        Ok(items)
    }

    /// Bulk strategy: one recursive tree request for the whole repository.
    pub async fn fetch_inventory_via_tree(&self, query: &ProviderQuery) -> DocsResult<Inventory> {
        let url = self.endpoints.bulk_listing_url(query);
        let body = self.http.get(&url, Some(TREE_ACCEPT)).await?;
        let listing: TreeListing = serde_json::from_str(&body)?;
        Ok(filter_tree_entries(&listing.tree, &query.docs_prefix()))
    }

    /// Fallback strategy: list the kind directory only.
    pub async fn fetch_inventory_via_contents(
        &self,
        query: &ProviderQuery,
    ) -> DocsResult<Inventory> {
        let url = self.endpoints.directory_listing_url(query);
        let body = self.http.get(&url, None).await?;
        let entries: Vec<ContentEntry> = serde_json::from_str(&body)?;
        Ok(filter_directory_entries(&entries))
    }
}

/// Keep direct children of `prefix` that are documentation files.
///
/// Entries in nested directories under the prefix are dropped.
pub fn filter_tree_entries(entries: &[TreeEntry], prefix: &str) -> Inventory {
    entries
        .iter()
        .filter(|e| is_file(&e.kind))
        .filter_map(|e| e.path.strip_prefix(prefix))
        .filter_map(|rel| rel.strip_suffix(DOC_SUFFIX))
        .filter(|name| !name.is_empty() && !name.contains('/'))
        .map(str::to_string)
        .collect()
}

/// Keep documentation files of a directory listing, suffix stripped.
pub fn filter_directory_entries(entries: &[ContentEntry]) -> Inventory {
    entries
        .iter()
        .filter(|e| e.kind == "file")
        .filter_map(|e| e.name.strip_suffix(DOC_SUFFIX))
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

// The tree endpoint calls regular files "blob".
fn is_file(kind: &str) -> bool {
    matches!(kind, "blob" | "file")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(path: &str, kind: &str) -> TreeEntry {
        TreeEntry {
            path: path.to_string(),
            kind: kind.to_string(),
        }
    }

    fn content(name: &str, kind: &str) -> ContentEntry {
        ContentEntry {
            name: name.to_string(),
            path: format!("website/docs/r/{name}"),
            kind: kind.to_string(),
        }
    }

    #[test]
    fn test_tree_filter_keeps_direct_children() {
        let entries = vec![
            tree("website/docs/r/instance.html.markdown", "blob"),
            tree("website/docs/r/vpc.html.markdown", "blob"),
            tree("website/docs/r/nested/deep.html.markdown", "blob"),
            tree("website/docs/d/ami.html.markdown", "blob"),
            tree("website/docs/r/README.md", "blob"),
            tree("website/docs/r/sub", "tree"),
            tree("internal/website/docs/r/fake.html.markdown", "blob"),
        ];
        let items = filter_tree_entries(&entries, "website/docs/r/");
        assert_eq!(items, vec!["instance", "vpc"]);
    }

    #[test]
    fn test_tree_filter_dialect_prefix() {
        let entries = vec![
            tree("website/docs/r/instance.html.markdown", "blob"),
            tree("website/docs/cdktf/python/r/instance.html.markdown", "blob"),
            tree("website/docs/cdktf/typescript/r/instance.html.markdown", "blob"),
        ];
        let items = filter_tree_entries(&entries, "website/docs/cdktf/python/r/");
        assert_eq!(items, vec!["instance"]);
    }

    #[test]
    fn test_tree_filter_preserves_remote_order() {
        let entries = vec![
            tree("website/docs/r/zeta.html.markdown", "blob"),
            tree("website/docs/r/alpha.html.markdown", "blob"),
        ];
        assert_eq!(
            filter_tree_entries(&entries, "website/docs/r/"),
            vec!["zeta", "alpha"]
        );
    }

    #[test]
    fn test_directory_filter() {
        let entries = vec![
            content("instance.html.markdown", "file"),
            content("nested", "dir"),
            content("notes.md", "file"),
            content("vpc.html.markdown", "file"),
        ];
        assert_eq!(filter_directory_entries(&entries), vec!["instance", "vpc"]);
    }

    #[test]
    fn test_tree_listing_decodes_without_tree_field() {
        let listing: TreeListing = serde_json::from_str(r#"{"sha":"abc","truncated":true}"#).unwrap();
        assert!(listing.tree.is_empty());
    }
}

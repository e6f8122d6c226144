//! JSON parsing for `HuggingFace` API responses.

use hfget_core::RepositorySummary;
use serde_json::Value;

use crate::error::{HfError, HfResult};
use crate::models::{HfEntryType, HfTreeEntry};

fn expect_array<'a>(json: &'a Value, what: &str) -> HfResult<&'a Vec<Value>> {
    json.as_array().ok_or_else(|| HfError::InvalidResponse {
        message: format!("Expected array for {what} response"),
    })
}

/// Parse the `/api/models` search response.
///
/// Entries without an id are dropped; a missing like count reads as 0.
pub fn parse_search_response(json: &Value) -> HfResult<Vec<RepositorySummary>> {
    let summaries = expect_array(json, "search")?
        .iter()
        .filter_map(|item| {
            let name = item
                .get("id")
                .or_else(|| item.get("modelId"))
                .and_then(Value::as_str)
                .filter(|id| !id.is_empty())?;
            let likes = item.get("likes").and_then(Value::as_u64).unwrap_or(0);
            Some(RepositorySummary::new(name, likes))
        })
        .collect();

    Ok(summaries)
}

/// Parse a `/tree/main` listing.
pub fn parse_tree_entries(json: &Value) -> HfResult<Vec<HfTreeEntry>> {
    let entries = expect_array(json, "tree")?
        .iter()
        .filter_map(|item| {
            let path = item.get("path").and_then(Value::as_str)?.to_string();
            let entry_type = match item.get("type").and_then(Value::as_str) {
                Some("directory") => HfEntryType::Directory,
                _ => HfEntryType::File,
            };
            let size = match entry_type {
                HfEntryType::Directory => None,
                HfEntryType::File => item
                    .get("lfs")
                    .and_then(|lfs| lfs.get("size"))
                    .or_else(|| item.get("size"))
                    .and_then(Value::as_u64),
            };

            Some(HfTreeEntry {
                path,
                entry_type,
                size,
            })
        })
        .collect();

    Ok(entries)
}

//! Parsing of cluster REST responses
//!
//! Kept free of I/O so the shapes can be checked against captured bodies.

use crate::{Error, Result};
use reaper_core::DeleteOutcome;
use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};

/// Longest slice of an error body kept in a delete outcome
const DETAIL_LIMIT: usize = 512;

#[derive(Debug, Deserialize)]
struct CatIndexRow {
    index: String,
}

/// Body of `GET /_cat/indices?format=json&h=index`
pub fn parse_index_listing(body: &[u8]) -> Result<BTreeSet<String>> {
    let rows: Vec<CatIndexRow> = serde_json::from_slice(body)?;
    Ok(rows.into_iter().map(|row| row.index).collect())
}

#[derive(Debug, Deserialize)]
struct StatsResponse {
    #[serde(default)]
    indices: HashMap<String, IndexStats>,
}

#[derive(Debug, Deserialize)]
struct IndexStats {
    primaries: Option<ShardStats>,
}

#[derive(Debug, Deserialize)]
struct ShardStats {
    store: Option<StoreStats>,
}

#[derive(Debug, Deserialize)]
struct StoreStats {
    size_in_bytes: u64,
}

/// Body of `GET /{index}/_stats/store`
pub fn parse_primary_size(index: &str, body: &[u8]) -> Result<u64> {
    let stats: StatsResponse = serde_json::from_slice(body)?;
    stats
        .indices
        .get(index)
        .and_then(|stats| stats.primaries.as_ref())
        .and_then(|primaries| primaries.store.as_ref())
        .map(|store| store.size_in_bytes)
        .ok_or_else(|| Error::MissingSize(index.to_string()))
}

#[derive(Debug, Deserialize)]
struct Acknowledgement {
    #[serde(default)]
    acknowledged: bool,
}

/// Status and body of `DELETE /{index}`
pub fn parse_delete_response(status: u16, body: &[u8]) -> DeleteOutcome {
    let text = String::from_utf8_lossy(body);

    if status == 404 {
        return DeleteOutcome::rejected("index not found");
    }

    if !(200..300).contains(&status) {
        let excerpt: String = text.chars().take(DETAIL_LIMIT).collect();
        return DeleteOutcome::rejected(format!("HTTP {status}: {excerpt}"));
    }

    match serde_json::from_slice::<Acknowledgement>(body) {
        Ok(ack) if ack.acknowledged => DeleteOutcome::acknowledged(text.into_owned()),
        Ok(_) => DeleteOutcome::rejected(text.into_owned()),
        Err(err) => DeleteOutcome::rejected(format!("unreadable response ({err}): {text}")),
    }
}

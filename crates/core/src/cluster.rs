//! Collaborator interface to the search cluster

use crate::Result;
use async_trait::async_trait;
use std::collections::BTreeSet;

/// Result of a delete request that reached the cluster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    /// Whether the cluster acknowledged the deletion
    pub acknowledged: bool,
    /// Raw detail reported by the cluster, shown on failure
    pub detail: String,
}

impl DeleteOutcome {
    pub fn acknowledged(detail: impl Into<String>) -> Self {
        Self {
            acknowledged: true,
            detail: detail.into(),
        }
    }

    pub fn rejected(detail: impl Into<String>) -> Self {
        Self {
            acknowledged: false,
            detail: detail.into(),
        }
    }
}

/// Operations the selectors and the executor need from a cluster.
///
/// Transport failures are returned as `Err` and end the run. A delete the
/// cluster refused is an `Ok` outcome with `acknowledged == false`.
#[async_trait]
pub trait Cluster: Send + Sync {
    /// Names of all indices currently present
    async fn list_indices(&self) -> Result<BTreeSet<String>>;

    /// On-disk size of an index's primary shards
    async fn primary_size_bytes(&self, index: &str) -> Result<u64>;

    /// Delete an index if it exists
    async fn delete_index(&self, index: &str) -> Result<DeleteOutcome>;
}

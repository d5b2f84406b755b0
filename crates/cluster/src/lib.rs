//! Elasticsearch-compatible REST implementation of `reaper_core::Cluster`

mod client;
mod error;
pub mod response;

pub use client::{ClusterConfig, HttpCluster, TRACING_TARGET};
pub use error::{Error, Result};

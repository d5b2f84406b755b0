//! Test doubles shared by the selector and executor tests

use crate::{Cluster, DeleteOutcome, Error, Event, Narrator, Result};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use parking_lot::Mutex;
use std::collections::{BTreeMap, BTreeSet, HashSet};

pub const GIB: u64 = 1 << 30;

/// Narrator that keeps every event
#[derive(Default)]
pub struct Recorder {
    events: Mutex<Vec<Event>>,
}

impl Recorder {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }
}

impl Narrator for Recorder {
    fn record(&self, event: Event) {
        self.events.lock().push(event);
    }
}

/// Cluster held in memory, counting the calls made against it
#[derive(Default)]
pub struct MemoryCluster {
    sizes: Mutex<BTreeMap<String, u64>>,
    refuse: HashSet<String>,
    size_queries: Mutex<Vec<String>>,
    delete_calls: Mutex<Vec<String>>,
}

impl MemoryCluster {
    pub fn with_indices<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self::with_sizes(names.into_iter().map(|name| (name, 0)))
    }

    pub fn with_sizes<'a>(entries: impl IntoIterator<Item = (&'a str, u64)>) -> Self {
        let sizes = entries
            .into_iter()
            .map(|(name, size)| (name.to_string(), size))
            .collect();
        Self {
            sizes: Mutex::new(sizes),
            ..Default::default()
        }
    }

    /// Make deletes of `index` come back unacknowledged
    pub fn refusing(mut self, index: &str) -> Self {
        self.refuse.insert(index.to_string());
        self
    }

    pub fn size_queries(&self) -> Vec<String> {
        self.size_queries.lock().clone()
    }

    pub fn delete_calls(&self) -> Vec<String> {
        self.delete_calls.lock().clone()
    }

    pub fn remaining(&self) -> BTreeSet<String> {
        self.sizes.lock().keys().cloned().collect()
    }
}

#[async_trait]
impl Cluster for MemoryCluster {
    async fn list_indices(&self) -> Result<BTreeSet<String>> {
        Ok(self.remaining())
    }

    async fn primary_size_bytes(&self, index: &str) -> Result<u64> {
        self.size_queries.lock().push(index.to_string());
        self.sizes
            .lock()
            .get(index)
            .copied()
            .ok_or_else(|| Error::cluster("size query", format!("no such index: {index}")))
    }

    async fn delete_index(&self, index: &str) -> Result<DeleteOutcome> {
        self.delete_calls.lock().push(index.to_string());
        if self.refuse.contains(index) {
            return Ok(DeleteOutcome::rejected("acknowledged: false"));
        }
        match self.sizes.lock().remove(index) {
            Some(_) => Ok(DeleteOutcome::acknowledged("acknowledged: true")),
            None => Ok(DeleteOutcome::rejected("index not found")),
        }
    }
}

pub fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

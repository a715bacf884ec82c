use shared::{Article, Video};
use std::collections::HashSet;

/// A record with a server-assigned id
pub trait Keyed {
    fn id(&self) -> i64;
}

impl Keyed for Article {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Keyed for Video {
    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CachedRecord<T> {
    pub record: T,
    /// The record as the server last returned it
    pub server: T,
    /// Edited in this browser session only; the server still has the old values
    pub local_only: bool,
}

/// Client-side copy of a server list, kept in server order.
///
/// The server has no update or delete routes, so edits and deletes made in
/// the UI live here only. Every [`RecordCache::replace_all`] re-syncs with the
/// server and drops them.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordCache<T> {
    entries: Vec<CachedRecord<T>>,
    removed: HashSet<i64>,
}

impl<T> Default for RecordCache<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            removed: HashSet::new(),
        }
    }
}

impl<T: Keyed + Clone> RecordCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_server(records: Vec<T>) -> Self {
        let mut cache = Self::new();
        cache.replace_all(records);
        cache
    }

    /// Take the server's list as the new truth
    pub fn replace_all(&mut self, records: Vec<T>) {
        self.removed.clear();
        self.entries = records
            .into_iter()
            .map(|record| CachedRecord {
                server: record.clone(),
                record,
                local_only: false,
            })
            .collect();
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.entries.iter().find(|e| e.record.id() == id).map(|e| &e.record)
    }

    pub fn entries(&self) -> &[CachedRecord<T>] {
        &self.entries
    }

    /// Replace the record with the same id in place. Returns false when no
    /// such record is cached.
    pub fn apply_local_edit(&mut self, record: T) -> bool {
        let id = record.id();
        match self.entries.iter_mut().find(|e| e.record.id() == id) {
            Some(entry) => {
                entry.record = record;
                entry.local_only = true;
                true
            }
            None => false,
        }
    }

    /// Hide a record until the next re-sync
    pub fn remove_local(&mut self, id: i64) -> Option<T> {
        let index = self.entries.iter().position(|e| e.record.id() == id)?;
        self.removed.insert(id);
        Some(self.entries.remove(index).record)
    }

    /// Records removed in this session that the server still holds
    pub fn hidden_count(&self) -> usize {
        self.removed.len()
    }
}

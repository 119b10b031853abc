//! In-memory registry implementation.

use super::ClientRecord;
use std::collections::BTreeMap;
use tracing::debug;

/// In-memory client registry.
///
/// Ids are handed out sequentially and never reused. Callers sharing a
/// registry across tasks must hold it behind a lock so that allocation and
/// insertion happen as one step.
#[derive(Debug, Clone)]
pub struct Registry {
    /// Client records indexed by id
    records: BTreeMap<u64, ClientRecord>,
    /// Id handed to the next registration
    next_id: u64,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Register a client and return its id.
    pub fn register(
        &mut self,
        name: Option<String>,
        email: Option<String>,
        company: Option<String>,
    ) -> u64 {
        let id = self.next_id;
        self.records
            .insert(id, ClientRecord::new(id, name, email, company));
        self.next_id += 1;

        debug!(client_id = id, "Client record stored");
        id
    }

    /// Get a record by client id.
    pub fn get(&self, client_id: u64) -> Option<&ClientRecord> {
        self.records.get(&client_id)
    }

    /// All records, ordered by id.
    pub fn list(&self) -> &BTreeMap<u64, ClientRecord> {
        &self.records
    }

    /// Get the number of registered clients.
    pub fn count(&self) -> usize {
        self.records.len()
    }
}

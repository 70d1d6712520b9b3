use super::{CacheSnapshot, CacheStore};
use crate::error::Result;

/// Keeps the snapshot in memory. Clones share nothing.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCache {
    snapshot: Option<CacheSnapshot>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: CacheSnapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
        }
    }

    pub fn snapshot(&self) -> Option<&CacheSnapshot> {
        self.snapshot.as_ref()
    }
}

impl CacheStore for InMemoryCache {
    fn read(&self) -> Result<Option<CacheSnapshot>> {
        Ok(self.snapshot.clone())
    }

    fn write(&mut self, snapshot: &CacheSnapshot) -> Result<()> {
        self.snapshot = Some(snapshot.clone());
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory cache".to_string()
    }
}

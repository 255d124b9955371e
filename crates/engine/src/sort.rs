//! Record sorting
//!
//! Sorts the store's sequence in place, stably and deterministically.
//! Equal keys keep their prior relative order in either direction.

use std::cmp::Ordering;

use roster_core::Record;
use roster_storage::RecordStore;
use serde::{Deserialize, Serialize};

/// Field to sort by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Grade point average
    Gpa,
    /// Student id
    Id,
    /// Student name, byte-wise and case-sensitive
    Name,
}

impl SortKey {
    /// Conventional direction for this key
    ///
    /// GPA lists the best students first; id and name read top to bottom.
    pub fn default_direction(self) -> SortDirection {
        match self {
            SortKey::Gpa => SortDirection::Descending,
            SortKey::Id | SortKey::Name => SortDirection::Ascending,
        }
    }

    fn compare(self, a: &Record, b: &Record) -> Ordering {
        match self {
            SortKey::Gpa => a.gpa().total_cmp(&b.gpa()),
            SortKey::Id => a.id().cmp(&b.id()),
            SortKey::Name => a.name().as_str().cmp(b.name().as_str()),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first
    Ascending,
    /// Largest first
    Descending,
}

/// Reorder the store by `key` in `direction`
///
/// Fewer than two records is a no-op.
pub fn sort(store: &mut RecordStore, key: SortKey, direction: SortDirection) {
    if store.len() < 2 {
        return;
    }
    store.sort_by(|a, b| {
        let ordering = key.compare(a, b);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Reorder the store by `key` in its conventional direction
pub fn sort_default(store: &mut RecordStore, key: SortKey) {
    sort(store, key, key.default_direction());
}

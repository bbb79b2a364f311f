//! B-tree operation statistics.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters recorded by a [`BTree`](super::BTree).
///
/// Fields are atomic so that `search(&self)` can record a lookup without
/// needing `&mut self`, and so the tree stays `Sync` when shared behind an
/// external read lock.
///
/// # Memory Ordering
/// All operations use `Ordering::Relaxed`: counters are independent and
/// only need atomicity.
///
/// # Example
/// ```
/// use stdbtree::BTree;
///
/// let mut tree = BTree::new(2);
/// tree.insert(1);
/// tree.insert(1);
/// assert!(tree.search(&1).is_some());
///
/// let snapshot = tree.stats().snapshot();
/// assert_eq!(snapshot.inserts, 1);
/// assert_eq!(snapshot.replacements, 1);
/// assert_eq!(snapshot.search_hits, 1);
/// ```
#[derive(Debug)]
pub struct TreeStats {
    /// Number of `search` calls.
    pub searches: AtomicU64,

    /// Number of `search` calls that found an item.
    pub search_hits: AtomicU64,

    /// Number of fresh insertions (new keys).
    pub inserts: AtomicU64,

    /// Number of insertions that replaced an equal item.
    pub replacements: AtomicU64,

    /// Number of times the root was split, i.e. the tree grew a level.
    pub root_splits: AtomicU64,
}

impl TreeStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self {
            searches: AtomicU64::new(0),
            search_hits: AtomicU64::new(0),
            inserts: AtomicU64::new(0),
            replacements: AtomicU64::new(0),
            root_splits: AtomicU64::new(0),
        }
    }

    pub(super) fn record_search(&self, hit: bool) {
        self.searches.fetch_add(1, Ordering::Relaxed);
        if hit {
            self.search_hits.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub(super) fn record_insert(&self, replaced: bool) {
        if replaced {
            self.replacements.fetch_add(1, Ordering::Relaxed);
        } else {
            self.inserts.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub(super) fn record_root_split(&self) {
        self.root_splits.fetch_add(1, Ordering::Relaxed);
    }

    /// Get a snapshot of current statistics.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            searches: self.searches.load(Ordering::Relaxed),
            search_hits: self.search_hits.load(Ordering::Relaxed),
            inserts: self.inserts.load(Ordering::Relaxed),
            replacements: self.replacements.load(Ordering::Relaxed),
            root_splits: self.root_splits.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.searches.store(0, Ordering::Relaxed);
        self.search_hits.store(0, Ordering::Relaxed);
        self.inserts.store(0, Ordering::Relaxed);
        self.replacements.store(0, Ordering::Relaxed);
        self.root_splits.store(0, Ordering::Relaxed);
    }
}

impl Default for TreeStats {
    fn default() -> Self {
        Self::new()
    }
}

/// A point-in-time copy of [`TreeStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    pub searches: u64,
    pub search_hits: u64,
    pub inserts: u64,
    pub replacements: u64,
    pub root_splits: u64,
}

impl StatsSnapshot {
    /// Fraction of searches that found an item (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.searches == 0 {
            0.0
        } else {
            self.search_hits as f64 / self.searches as f64
        }
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ searches: {}, hit_rate: {:.2}%, inserts: {}, replacements: {}, root_splits: {} }}",
            self.searches,
            self.hit_rate() * 100.0,
            self.inserts,
            self.replacements,
            self.root_splits
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = TreeStats::new();
        assert_eq!(stats.snapshot(), StatsSnapshot::default());
        assert_eq!(stats.snapshot().hit_rate(), 0.0);
    }

    #[test]
    fn test_record_search() {
        let stats = TreeStats::new();
        stats.record_search(true);
        stats.record_search(true);
        stats.record_search(true);
        stats.record_search(false);

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.searches, 4);
        assert_eq!(snapshot.search_hits, 3);
        assert_eq!(snapshot.hit_rate(), 0.75);
    }

    #[test]
    fn test_record_insert() {
        let stats = TreeStats::new();
        stats.record_insert(false);
        stats.record_insert(false);
        stats.record_insert(true);

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.inserts, 2);
        assert_eq!(snapshot.replacements, 1);
    }

    #[test]
    fn test_stats_reset() {
        let stats = TreeStats::new();
        stats.record_search(true);
        stats.record_insert(false);
        stats.record_root_split();

        stats.reset();

        assert_eq!(stats.snapshot(), StatsSnapshot::default());
    }

    #[test]
    fn test_stats_display() {
        let stats = TreeStats::new();
        for _ in 0..4 {
            stats.record_search(true);
        }
        stats.record_search(false);
        stats.record_root_split();

        let display = format!("{}", stats.snapshot());

        assert!(display.contains("searches: 5"));
        assert!(display.contains("80.00%"));
        assert!(display.contains("root_splits: 1"));
    }
}

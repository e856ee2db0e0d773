//! Differential rendering at widget granularity.
//!
//! Every widget describes its visible state as a small value type (text,
//! cursor, selection, focus). [`SnapshotCache`] keeps the value drawn last
//! time; a render pass whose new snapshot compares equal is skipped and
//! produces no terminal output at all.
//!
//! # Algorithm
//!
//! 1. Widget computes its snapshot
//! 2. [`SnapshotCache::is_current`] compares it with the stored one
//! 3. Unchanged: return without touching the terminal
//! 4. Changed: draw, then [`SnapshotCache::store`] the new snapshot

/// Last-rendered snapshot of one widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotCache<S> {
    previous: Option<S>,
}

impl<S: PartialEq> SnapshotCache<S> {
    /// Create an empty cache. The first render always draws.
    pub const fn new() -> Self {
        Self { previous: None }
    }

    /// True if `snapshot` is exactly what is already on screen.
    pub fn is_current(&self, snapshot: &S) -> bool {
        self.previous.as_ref() == Some(snapshot)
    }

    /// Record `snapshot` as what is now on screen.
    pub fn store(&mut self, snapshot: S) {
        self.previous = Some(snapshot);
    }

    /// Forget the stored snapshot so the next render repaints.
    ///
    /// Use this after a resize, a screen clear, or a visibility change.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Check if we have a previous snapshot to diff against.
    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    pub fn previous(&self) -> Option<&S> {
        self.previous.as_ref()
    }
}

impl<S: PartialEq> Default for SnapshotCache<S> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_creation() {
        let cache: SnapshotCache<u32> = SnapshotCache::new();
        assert!(!cache.has_previous());
        assert!(!cache.is_current(&0));
    }

    #[test]
    fn test_store_and_compare() {
        let mut cache = SnapshotCache::new();
        cache.store((1, "a"));
        assert!(cache.is_current(&(1, "a")));
        assert!(!cache.is_current(&(2, "a")));
        assert_eq!(cache.previous(), Some(&(1, "a")));
    }

    #[test]
    fn test_invalidate() {
        let mut cache = SnapshotCache::new();
        cache.store(7u8);
        assert!(cache.has_previous());

        cache.invalidate();
        assert!(!cache.has_previous());
        assert!(!cache.is_current(&7));
    }
}

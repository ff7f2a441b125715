//! Process-unique identifier sequencing
//!
//! Views tag generated markup nodes with ids drawn from a [`Sequence`] so
//! that a node can be located again after construction. Ids issued by one
//! `Sequence` instance are strictly increasing; the process-wide instance
//! behind [`Sequence::global`] covers callers that do not inject their own.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use once_cell::sync::Lazy;

static GLOBAL: Lazy<Sequence> = Lazy::new(Sequence::new);

/// Identifier issued by a [`Sequence`]
///
/// Formats as `el-N`, which is what ends up in the markup `id` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    /// Raw counter value behind this id
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "el-{}", self.0)
    }
}

/// Monotonic counter service issuing process-unique element ids
///
/// Increment-and-read is atomic, so the uniqueness guarantee holds even when
/// a multi-threaded host shares one instance.
#[derive(Debug, Default)]
pub struct Sequence {
    counter: AtomicU64,
}

impl Sequence {
    /// Create a fresh generator starting at zero
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }

    /// The process-wide generator shared by views that don't inject their own
    pub fn global() -> &'static Sequence {
        &GLOBAL
    }

    /// Issue the next identifier
    ///
    /// Strictly increasing per instance; never issues the same id twice.
    pub fn next(&self) -> ElementId {
        ElementId(self.counter.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// The most recently issued identifier, or `None` if nothing was issued
    pub fn last(&self) -> Option<ElementId> {
        match self.counter.load(Ordering::Relaxed) {
            0 => None,
            n => Some(ElementId(n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_is_strictly_increasing() {
        let seq = Sequence::new();
        let a = seq.next();
        let b = seq.next();
        let c = seq.next();
        assert!(a < b && b < c);
        assert_eq!(a.value(), 1);
        assert_eq!(c.value(), 3);
    }

    #[test]
    fn test_sequence_last_tracks_issued_ids() {
        let seq = Sequence::new();
        assert_eq!(seq.last(), None);
        let id = seq.next();
        assert_eq!(seq.last(), Some(id));
    }

    #[test]
    fn test_element_id_display() {
        let seq = Sequence::new();
        assert_eq!(seq.next().to_string(), "el-1");
        assert_eq!(seq.next().to_string(), "el-2");
    }

    #[test]
    fn test_sequence_unique_across_threads() {
        use std::collections::HashSet;
        use std::sync::Arc;

        let seq = Arc::new(Sequence::new());
        let mut handles = Vec::new();
        for _ in 0..4 {
            let seq = Arc::clone(&seq);
            handles.push(std::thread::spawn(move || {
                (0..250).map(|_| seq.next()).collect::<Vec<_>>()
            }));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate id issued: {id}");
            }
        }
        assert_eq!(seen.len(), 1000);
    }
}

//! Busy indicator with scoped release

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared busy flag
///
/// Each in-flight operation holds a [`BusyGuard`]; the flag reads true
/// while at least one guard is alive. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct BusyFlag {
    holders: Arc<AtomicUsize>,
}

impl BusyFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.holders.load(Ordering::SeqCst) > 0
    }

    /// Mark busy until the returned guard is dropped
    pub fn hold(&self) -> BusyGuard {
        self.holders.fetch_add(1, Ordering::SeqCst);
        BusyGuard {
            holders: Arc::clone(&self.holders),
        }
    }
}

/// Releases its hold on the busy flag when dropped
#[derive(Debug)]
pub struct BusyGuard {
    holders: Arc<AtomicUsize>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.holders.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_releases_on_drop() {
        let flag = BusyFlag::new();
        assert!(!flag.is_busy());
        {
            let _guard = flag.hold();
            assert!(flag.is_busy());
        }
        assert!(!flag.is_busy());
    }

    #[test]
    fn test_nested_holds() {
        let flag = BusyFlag::new();
        let outer = flag.hold();
        let inner = flag.clone().hold();
        drop(inner);
        assert!(flag.is_busy());
        drop(outer);
        assert!(!flag.is_busy());
    }
}

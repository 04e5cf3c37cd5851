//! In-progress flag for draws

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Allows at most one draw in flight at a time.
///
/// Cloning shares the flag.
#[derive(Debug, Clone, Default)]
pub struct DrawGate {
    in_progress: Arc<AtomicBool>,
}

impl DrawGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the gate, or `None` while another draw holds it.
    pub fn try_begin(&self) -> Option<DrawGuard> {
        self.in_progress
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| DrawGuard {
                in_progress: Arc::clone(&self.in_progress),
            })
    }

    pub fn is_in_progress(&self) -> bool {
        self.in_progress.load(Ordering::Acquire)
    }
}

/// Releases the gate when dropped
#[derive(Debug)]
pub struct DrawGuard {
    in_progress: Arc<AtomicBool>,
}

impl Drop for DrawGuard {
    fn drop(&mut self) {
        self.in_progress.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_reentry_while_held() {
        let gate = DrawGate::new();
        let guard = gate.try_begin();
        assert!(guard.is_some());
        assert!(gate.is_in_progress());
        assert!(gate.try_begin().is_none());
    }

    #[test]
    fn test_releases_on_drop() {
        let gate = DrawGate::new();
        {
            let _guard = gate.try_begin().unwrap();
        }
        assert!(!gate.is_in_progress());
        assert!(gate.try_begin().is_some());
    }

    #[test]
    fn test_clones_share_flag() {
        let gate = DrawGate::new();
        let other = gate.clone();
        let _guard = gate.try_begin().unwrap();
        assert!(other.try_begin().is_none());
    }

    #[tokio::test]
    async fn test_concurrent_claims_admit_one() {
        let gate = DrawGate::new();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let gate = gate.clone();
                tokio::spawn(async move { gate.try_begin() })
            })
            .collect();

        let mut guards = Vec::new();
        for handle in handles {
            if let Some(guard) = handle.await.unwrap() {
                guards.push(guard);
            }
        }
        assert_eq!(guards.len(), 1);
    }
}

//! Page mount generations.
//!
//! Every mount (and every identifier change) starts a new generation.
//! Async completions carry the token of the generation that started them and
//! become no-ops once that generation is over.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct PageLifecycle {
    generation: AtomicU64,
    mounted: AtomicBool,
}

impl PageLifecycle {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Starts a new generation and returns its token.
    pub fn begin(self: &Arc<Self>) -> PageToken {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.mounted.store(true, Ordering::SeqCst);
        PageToken {
            generation,
            lifecycle: Arc::clone(self),
        }
    }

    /// Ends the current generation (page teardown).
    pub fn end(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.mounted.store(false, Ordering::SeqCst);
    }

    /// Token for the running generation.
    pub fn current(self: &Arc<Self>) -> PageToken {
        PageToken {
            generation: self.generation.load(Ordering::SeqCst),
            lifecycle: Arc::clone(self),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone)]
pub struct PageToken {
    generation: u64,
    lifecycle: Arc<PageLifecycle>,
}

impl PageToken {
    /// Whether state mutations for this token may still be applied.
    pub fn is_current(&self) -> bool {
        self.lifecycle.is_mounted()
            && self.lifecycle.generation.load(Ordering::SeqCst) == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_expires_on_end() {
        let lifecycle = PageLifecycle::new();
        let token = lifecycle.begin();
        assert!(token.is_current());

        lifecycle.end();
        assert!(!token.is_current());
        assert!(!lifecycle.current().is_current());
    }

    #[test]
    fn test_token_expires_on_new_generation() {
        let lifecycle = PageLifecycle::new();
        let first = lifecycle.begin();
        let second = lifecycle.begin();

        assert!(!first.is_current());
        assert!(second.is_current());
        assert!(lifecycle.current().is_current());
    }
}

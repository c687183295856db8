//! Element ID generation
//!
//! Components that need an `id` (accordions, modals, ...) only generate one
//! when the caller didn't supply it. The generator is injected through the
//! mount context so tests can use predictable IDs.

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

pub trait IdGenerator: Send + Sync {
    /// Produce a fresh ID of the form `{prefix}-{suffix}`
    fn generate(&self, prefix: &str) -> String;
}

/// IDs made of a random per-generator seed plus a counter
#[derive(Debug)]
pub struct RandomIdGenerator {
    seed: u64,
    counter: AtomicU64,
}

impl RandomIdGenerator {
    pub fn new() -> Self {
        // RandomState gives a random value without pulling in an RNG crate
        let seed = RandomState::new().build_hasher().finish();
        Self {
            seed,
            counter: AtomicU64::new(0),
        }
    }
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for RandomIdGenerator {
    fn generate(&self, prefix: &str) -> String {
        let count = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{}-{:06x}{:x}", prefix, self.seed & 0xFF_FFFF, count)
    }
}

/// Deterministic IDs (`prefix-1`, `prefix-2`, ...) for tests and snapshots
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self, prefix: &str) -> String {
        let count = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{}-{}", prefix, count)
    }
}

/// Keep an explicit non-empty ID, otherwise generate one
pub fn ensure_id(id: &mut Option<String>, ids: &dyn IdGenerator, prefix: &str) {
    if id.as_deref().is_some_and(|s| !s.trim().is_empty()) {
        return;
    }
    let generated = ids.generate(prefix);
    tracing::trace!("Generated element id {}", generated);
    *id = Some(generated);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialIdGenerator::new();
        assert_eq!(ids.generate("modal"), "modal-1");
        assert_eq!(ids.generate("toast"), "toast-2");
    }

    #[test]
    fn test_random_ids_are_unique() {
        let ids = RandomIdGenerator::new();
        let a = ids.generate("accordion");
        let b = ids.generate("accordion");
        assert!(a.starts_with("accordion-"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_ensure_id_only_when_absent() {
        let ids = SequentialIdGenerator::new();
        let mut id = Some("given".to_string());
        ensure_id(&mut id, &ids, "x");
        assert_eq!(id.as_deref(), Some("given"));

        let mut id = Some("  ".to_string());
        ensure_id(&mut id, &ids, "x");
        assert_eq!(id.as_deref(), Some("x-1"));

        let mut id = None;
        ensure_id(&mut id, &ids, "x");
        assert_eq!(id.as_deref(), Some("x-2"));
    }
}

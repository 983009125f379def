//! Concurrent per-vehicle event counts.

use dashmap::{mapref::entry::Entry, DashMap};

/// Per-vehicle counts of successfully processed events.
///
/// Entries are created on first increment and never removed. Increments on
/// the same vehicle are serialized by the owning shard's write lock, so no
/// update is lost. [`total`](Self::total) visits shards one at a time and may
/// miss increments that land mid-iteration.
#[derive(Debug, Default)]
pub struct EventCounter {
    counts: DashMap<String, u64>,
}

impl EventCounter {
    /// Create an empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one to the count for `vehicle_id`.
    ///
    /// Returns the new count and whether this call created the entry.
    /// Exactly one caller observes `true` per vehicle.
    pub fn increment(&self, vehicle_id: &str) -> (u64, bool) {
        if let Some(mut count) = self.counts.get_mut(vehicle_id) {
            *count += 1;
            return (*count, false);
        }

        match self.counts.entry(vehicle_id.to_owned()) {
            Entry::Occupied(mut entry) => {
                *entry.get_mut() += 1;
                (*entry.get(), false)
            }
            Entry::Vacant(entry) => {
                entry.insert(1);
                (1, true)
            }
        }
    }

    /// Current count for `vehicle_id`, 0 if never seen.
    pub fn get(&self, vehicle_id: &str) -> u64 {
        self.counts.get(vehicle_id).map(|c| *c).unwrap_or(0)
    }

    /// Sum over all vehicles.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|entry| *entry.value()).sum()
    }

    /// Number of vehicles with at least one counted event.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Barrier};
    use std::thread;

    #[test]
    fn test_unknown_vehicle_is_zero() {
        let counter = EventCounter::new();
        assert_eq!(counter.get("nope"), 0);
        assert_eq!(counter.total(), 0);
        assert!(counter.is_empty());
    }

    #[test]
    fn test_increment_returns_new_count() {
        let counter = EventCounter::new();
        assert_eq!(counter.increment("v-1"), (1, true));
        assert_eq!(counter.increment("v-1"), (2, false));
        assert_eq!(counter.increment("v-2"), (1, true));
        assert_eq!(counter.get("v-1"), 2);
        assert_eq!(counter.len(), 2);
    }

    #[test]
    fn test_total_is_sum_of_entries() {
        let counter = EventCounter::new();
        for (vehicle, n) in [("a", 3), ("b", 1), ("c", 7)] {
            for _ in 0..n {
                counter.increment(vehicle);
            }
        }
        assert_eq!(counter.total(), 11);
        assert_eq!(
            counter.total(),
            counter.get("a") + counter.get("b") + counter.get("c")
        );
    }

    #[test]
    fn test_entry_created_once_under_contention() {
        let counter = Arc::new(EventCounter::new());
        let threads = 16;
        let barrier = Arc::new(Barrier::new(threads));

        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let counter = Arc::clone(&counter);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    counter.increment("contended").1
                })
            })
            .collect();

        let created = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|created| *created)
            .count();

        assert_eq!(created, 1);
        assert_eq!(counter.get("contended"), threads as u64);
    }

    #[test]
    fn test_concurrent_increments_are_not_lost() {
        let counter = Arc::new(EventCounter::new());
        let threads = 8;
        let per_thread = 1_000;

        let handles: Vec<_> = (0..threads)
            .map(|i| {
                let counter = Arc::clone(&counter);
                thread::spawn(move || {
                    for _ in 0..per_thread {
                        counter.increment("shared");
                        counter.increment(&format!("own-{i}"));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(counter.get("shared"), (threads * per_thread) as u64);
        assert_eq!(counter.get("own-3"), per_thread as u64);
        assert_eq!(counter.total(), (2 * threads * per_thread) as u64);
        assert_eq!(counter.len(), threads + 1);
    }
}

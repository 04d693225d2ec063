//! Job model.
//!
//! A job is an atomic, unit-duration piece of work that earns its profit
//! only if it runs in a slot no later than its deadline.
//!
//! # Reference
//! Horowitz & Sahni (1978), "Fundamentals of Computer Algorithms", §4.4

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A unit-duration job with a deadline and a profit.
///
/// # Slot Representation
/// Slots are 1-based. A job with `deadline = d` may occupy any slot in
/// `1..=d`. A deadline of zero or below leaves no eligible slot; such a job
/// is valid input but is always rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Job identifier. Opaque to the sequencer; duplicates are allowed.
    pub id: String,
    /// Last 1-based slot in which the job may run.
    pub deadline: i64,
    /// Profit earned when the job is scheduled. May be zero or negative.
    pub profit: i64,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Domain-specific key-value metadata.
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

impl Job {
    /// Creates a new job.
    pub fn new(id: impl Into<String>, deadline: i64, profit: i64) -> Self {
        Self {
            id: id.into(),
            deadline,
            profit,
            name: String::new(),
            attributes: HashMap::new(),
        }
    }

    /// Sets the job name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a domain-specific attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Latest slot this job may occupy under the given horizon.
    ///
    /// Returns `None` when no slot in `1..=horizon` is eligible.
    #[inline]
    pub fn latest_slot(&self, horizon: usize) -> Option<usize> {
        if self.deadline <= 0 || horizon == 0 {
            return None;
        }
        let deadline = usize::try_from(self.deadline).unwrap_or(usize::MAX);
        Some(deadline.min(horizon))
    }

    /// Whether this job can run in the given 1-based slot.
    #[inline]
    pub fn fits_slot(&self, slot: usize) -> bool {
        slot >= 1 && i64::try_from(slot).is_ok_and(|s| s <= self.deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_builder() {
        let job = Job::new("J1", 3, 40)
            .with_name("Nightly export")
            .with_attribute("customer", "ACME");

        assert_eq!(job.id, "J1");
        assert_eq!(job.deadline, 3);
        assert_eq!(job.profit, 40);
        assert_eq!(job.name, "Nightly export");
        assert_eq!(job.attributes.get("customer"), Some(&"ACME".to_string()));
    }

    #[test]
    fn test_latest_slot_clipped_to_horizon() {
        let job = Job::new("J1", 10, 5);
        assert_eq!(job.latest_slot(3), Some(3));
        assert_eq!(job.latest_slot(10), Some(10));
        assert_eq!(job.latest_slot(20), Some(10));
    }

    #[test]
    fn test_latest_slot_unreachable() {
        assert_eq!(Job::new("zero", 0, 5).latest_slot(4), None);
        assert_eq!(Job::new("neg", -2, 5).latest_slot(4), None);
        assert_eq!(Job::new("J1", 2, 5).latest_slot(0), None);
    }

    #[test]
    fn test_fits_slot() {
        let job = Job::new("J1", 2, 5);
        assert!(job.fits_slot(1));
        assert!(job.fits_slot(2));
        assert!(!job.fits_slot(3));
        assert!(!job.fits_slot(0));
    }

    #[test]
    fn test_job_deserialize_defaults() {
        let job: Job = serde_json::from_str(r#"{"id":"A","deadline":2,"profit":100}"#).unwrap();
        assert_eq!(job, Job::new("A", 2, 100));
    }
}

//! Schedule (solution) model.
//!
//! A schedule is a slot table over a horizon of `N` unit slots, numbered
//! `1..=N`. Each slot is empty or holds exactly one job. Jobs that could
//! not be placed are kept alongside, with the reason they were rejected.
//!
//! # Reference
//! Horowitz & Sahni (1978), "Fundamentals of Computer Algorithms", §4.4

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Job;

/// A complete schedule produced by one sequencing call.
///
/// `slots` maps each occupied 1-based slot to its job. Only occupied slots
/// are stored, so the table never grows with the horizon or with deadlines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Number of slots available (`N`).
    pub horizon: usize,
    /// Occupied slots, slot order.
    pub slots: BTreeMap<usize, Job>,
    /// Jobs left out of the schedule, in the order they were considered.
    pub rejections: Vec<Rejection>,
}

/// A job that was not placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    /// The rejected job.
    pub job: Job,
    /// Why it was rejected.
    pub reason: RejectionReason,
}

/// Why a job was left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectionReason {
    /// Deadline is zero or negative, or the horizon is zero.
    DeadlineBeforeFirstSlot,
    /// Every slot up to the job's deadline was already taken.
    NoFreeSlot,
    /// Filtered out before slot assignment because its profit was not positive.
    NonPositiveProfit,
}

/// Ordered job ids and total profit read off a schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projection {
    /// Scheduled job ids in slot order.
    pub job_ids: Vec<String>,
    /// Sum of profits of scheduled jobs. Wider than a single profit so the
    /// sum cannot overflow.
    pub total_profit: i128,
}

/// An invariant violation found by [`Schedule::verify`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Offending slot (1-based).
    pub slot: usize,
    /// Offending job id.
    pub job_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Classification of schedule violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// Job sits in a slot after its deadline.
    DeadlineMiss,
    /// Job sits in a slot past the horizon.
    BeyondHorizon,
}

impl Schedule {
    /// Creates an empty schedule over `horizon` slots.
    pub fn new(horizon: usize) -> Self {
        Self {
            horizon,
            slots: BTreeMap::new(),
            rejections: Vec::new(),
        }
    }

    /// Places a job in the given 1-based slot.
    ///
    /// Returns the job previously occupying that slot, if any.
    pub fn place(&mut self, slot: usize, job: Job) -> Option<Job> {
        debug_assert!(slot >= 1, "slots are 1-based");
        self.slots.insert(slot, job)
    }

    /// Records a rejected job.
    pub fn reject(&mut self, job: Job, reason: RejectionReason) {
        self.rejections.push(Rejection { job, reason });
    }

    /// Job occupying the given 1-based slot.
    pub fn job_at(&self, slot: usize) -> Option<&Job> {
        self.slots.get(&slot)
    }

    /// Scheduled jobs with their 1-based slot, in slot order.
    pub fn placements(&self) -> impl Iterator<Item = (usize, &Job)> + '_ {
        self.slots.iter().map(|(&slot, job)| (slot, job))
    }

    /// Slot of the first scheduled job with the given id.
    pub fn slot_of(&self, job_id: &str) -> Option<usize> {
        self.placements()
            .find(|(_, job)| job.id == job_id)
            .map(|(slot, _)| slot)
    }

    /// Whether a job with the given id was scheduled.
    pub fn is_scheduled(&self, job_id: &str) -> bool {
        self.slot_of(job_id).is_some()
    }

    /// Scheduled job ids in slot order.
    pub fn sequence(&self) -> Vec<&str> {
        self.placements().map(|(_, job)| job.id.as_str()).collect()
    }

    /// Sum of profits of scheduled jobs.
    pub fn total_profit(&self) -> i128 {
        self.slots.values().map(|job| i128::from(job.profit)).sum()
    }

    /// Number of occupied slots.
    pub fn filled_slots(&self) -> usize {
        self.slots.len()
    }

    /// Whether no job was scheduled.
    pub fn is_empty(&self) -> bool {
        self.filled_slots() == 0
    }

    /// Reads the schedule off in slot order.
    pub fn project(&self) -> Projection {
        Projection {
            job_ids: self.sequence().into_iter().map(str::to_owned).collect(),
            total_profit: self.total_profit(),
        }
    }

    /// Rejections with the given reason.
    pub fn rejections_for(&self, reason: RejectionReason) -> Vec<&Rejection> {
        self.rejections
            .iter()
            .filter(|r| r.reason == reason)
            .collect()
    }

    /// Re-checks slot invariants.
    ///
    /// Every schedule built by the sequencer verifies clean; this is for
    /// schedules that were deserialized or assembled by hand.
    pub fn verify(&self) -> Vec<Violation> {
        let mut violations = Vec::new();
        for (slot, job) in self.placements() {
            if slot > self.horizon {
                violations.push(Violation {
                    violation_type: ViolationType::BeyondHorizon,
                    slot,
                    job_id: job.id.clone(),
                    message: format!(
                        "Job '{}' in slot {slot} exceeds horizon {}",
                        job.id, self.horizon
                    ),
                });
            }
            if !job.fits_slot(slot) {
                violations.push(Violation {
                    violation_type: ViolationType::DeadlineMiss,
                    slot,
                    job_id: job.id.clone(),
                    message: format!(
                        "Job '{}' in slot {slot} misses deadline {}",
                        job.id, job.deadline
                    ),
                });
            }
        }
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Schedule {
        let mut s = Schedule::new(3);
        s.place(1, Job::new("C", 2, 27));
        s.place(2, Job::new("A", 2, 100));
        s.place(3, Job::new("E", 3, 15));
        s.reject(Job::new("D", 1, 25), RejectionReason::NoFreeSlot);
        s.reject(Job::new("B", 1, 19), RejectionReason::NoFreeSlot);
        s
    }

    #[test]
    fn test_projection() {
        let s = sample_schedule();
        let p = s.project();
        assert_eq!(p.job_ids, vec!["C", "A", "E"]);
        assert_eq!(p.total_profit, 142);
    }

    #[test]
    fn test_projection_skips_empty_slots() {
        let mut s = Schedule::new(4);
        s.place(2, Job::new("X", 2, 10));
        s.place(4, Job::new("Y", 4, 5));
        assert_eq!(s.sequence(), vec!["X", "Y"]);
        assert_eq!(s.total_profit(), 15);
        assert_eq!(s.filled_slots(), 2);
    }

    #[test]
    fn test_job_at_and_slot_of() {
        let s = sample_schedule();
        assert_eq!(s.job_at(2).map(|j| j.id.as_str()), Some("A"));
        assert!(s.job_at(0).is_none());
        assert!(s.job_at(9).is_none());
        assert_eq!(s.slot_of("E"), Some(3));
        assert_eq!(s.slot_of("B"), None);
        assert!(s.is_scheduled("C"));
        assert!(!s.is_scheduled("D"));
    }

    #[test]
    fn test_place_returns_previous() {
        let mut s = Schedule::new(2);
        assert!(s.place(1, Job::new("A", 1, 1)).is_none());
        let prev = s.place(1, Job::new("B", 1, 2));
        assert_eq!(prev.map(|j| j.id), Some("A".to_string()));
    }

    #[test]
    fn test_far_slot_stored_sparsely() {
        let far = usize::try_from(i64::MAX).unwrap();
        let mut s = Schedule::new(usize::MAX);
        s.place(far, Job::new("far", i64::MAX, 1));
        assert_eq!(s.slots.len(), 1);
        assert_eq!(s.slot_of("far"), Some(far));
        assert!(s.job_at(1).is_none());
        assert!(s.verify().is_empty());
    }

    #[test]
    fn test_total_profit_does_not_overflow() {
        let mut s = Schedule::new(2);
        s.place(1, Job::new("A", 1, i64::MAX));
        s.place(2, Job::new("B", 2, i64::MAX));
        assert_eq!(s.total_profit(), 2 * i128::from(i64::MAX));
        assert_eq!(s.project().total_profit, 2 * i128::from(i64::MAX));

        let mut losses = Schedule::new(2);
        losses.place(1, Job::new("A", 1, i64::MIN));
        losses.place(2, Job::new("B", 2, i64::MIN));
        assert_eq!(losses.total_profit(), 2 * i128::from(i64::MIN));
    }

    #[test]
    fn test_rejections_for() {
        let mut s = sample_schedule();
        s.reject(Job::new("Z", 0, 3), RejectionReason::DeadlineBeforeFirstSlot);
        assert_eq!(s.rejections_for(RejectionReason::NoFreeSlot).len(), 2);
        assert_eq!(
            s.rejections_for(RejectionReason::DeadlineBeforeFirstSlot).len(),
            1
        );
        assert!(s.rejections_for(RejectionReason::NonPositiveProfit).is_empty());
    }

    #[test]
    fn test_verify_clean() {
        assert!(sample_schedule().verify().is_empty());
    }

    #[test]
    fn test_verify_detects_violations() {
        let mut s = Schedule::new(2);
        s.place(2, Job::new("late", 1, 10));
        s.place(3, Job::new("outside", 5, 10));

        let violations = s.verify();
        assert_eq!(violations.len(), 2);
        assert!(violations
            .iter()
            .any(|v| v.violation_type == ViolationType::DeadlineMiss && v.job_id == "late"));
        assert!(violations
            .iter()
            .any(|v| v.violation_type == ViolationType::BeyondHorizon && v.slot == 3));
    }

    #[test]
    fn test_empty_schedule() {
        let s = Schedule::default();
        assert!(s.is_empty());
        assert_eq!(s.total_profit(), 0);
        assert!(s.project().job_ids.is_empty());
    }

    #[test]
    fn test_schedule_serde() {
        let s = sample_schedule();
        let json = serde_json::to_string(&s).unwrap();
        let back: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}

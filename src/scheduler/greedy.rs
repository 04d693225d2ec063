//! Greedy profit-maximizing job sequencer.
//!
//! # Algorithm
//!
//! 1. Rank jobs by non-increasing profit (ties per [`TieBreakPolicy`]).
//! 2. For each job in ranked order, claim the latest free slot at or
//!    before `min(horizon, deadline)`; reject the job if none is free.
//! 3. Read the slot table off in slot order.
//!
//! Reserving the latest feasible slot leaves the most early slots for the
//! jobs still to come. By the exchange argument the resulting profit is
//! maximal among all feasible schedules (the feasible job sets form a
//! matroid).
//!
//! # Complexity
//! O(n log n + n²) worst case with `LinearScan`, ~O(n log n) with
//! `DisjointSet`, where n = jobs. Memory is O(n) regardless of deadlines or
//! the horizon: only taken slots are stored.
//!
//! # Reference
//! Horowitz & Sahni (1978), "Fundamentals of Computer Algorithms", §4.4

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::slots::{SlotStrategy, SlotTable};
use crate::config::SequencerConfig;
use crate::error::Result;
use crate::models::{Job, Projection, RejectionReason, Schedule};
use crate::ranking::{RankingEngine, TieBreakPolicy};
use crate::validation::{self, NoticeKind};

/// Input container for sequencing.
///
/// `jobs` is optional so that a request deserialized without a job list is
/// representable; sequencing such a request fails with `InvalidArgument`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SequenceRequest {
    /// Jobs to sequence.
    #[serde(default)]
    pub jobs: Option<Vec<Job>>,
    /// Number of slots. `None` = largest deadline.
    #[serde(default)]
    pub horizon: Option<i64>,
}

impl SequenceRequest {
    /// Creates a request over the given jobs with the default horizon.
    pub fn new(jobs: Vec<Job>) -> Self {
        Self {
            jobs: Some(jobs),
            horizon: None,
        }
    }

    /// Sets an explicit horizon.
    pub fn with_horizon(mut self, horizon: i64) -> Self {
        self.horizon = Some(horizon);
        self
    }
}

/// Greedy sequencer for unit-duration jobs with deadlines.
///
/// # Example
///
/// ```
/// use u_sequence::models::Job;
/// use u_sequence::scheduler::JobSequencer;
///
/// let jobs = vec![
///     Job::new("A", 2, 100),
///     Job::new("B", 1, 19),
///     Job::new("C", 2, 27),
///     Job::new("D", 1, 25),
///     Job::new("E", 3, 15),
/// ];
///
/// let schedule = JobSequencer::new().schedule(&jobs, Some(3)).unwrap();
/// assert_eq!(schedule.sequence(), vec!["C", "A", "E"]);
/// assert_eq!(schedule.total_profit(), 142);
/// ```
#[derive(Debug, Clone)]
pub struct JobSequencer {
    ranking: RankingEngine,
    slot_strategy: SlotStrategy,
    skip_non_positive_profit: bool,
}

impl JobSequencer {
    /// Creates a sequencer with default settings: input-order tie-break,
    /// linear slot scan, non-positive-profit jobs kept.
    pub fn new() -> Self {
        Self::from_config(&SequencerConfig::default())
    }

    /// Creates a sequencer from configuration.
    pub fn from_config(config: &SequencerConfig) -> Self {
        Self {
            ranking: RankingEngine::for_policy(config.tie_break),
            slot_strategy: config.slot_strategy,
            skip_non_positive_profit: config.skip_non_positive_profit,
        }
    }

    /// Sets the tie-break policy for equal-profit jobs.
    pub fn with_tie_break(mut self, policy: TieBreakPolicy) -> Self {
        self.ranking = RankingEngine::for_policy(policy);
        self
    }

    /// Replaces the ranking engine.
    ///
    /// Only a profit-first ranking keeps the optimality guarantee.
    pub fn with_ranking_engine(mut self, engine: RankingEngine) -> Self {
        self.ranking = engine;
        self
    }

    /// Sets the slot search strategy.
    pub fn with_slot_strategy(mut self, strategy: SlotStrategy) -> Self {
        self.slot_strategy = strategy;
        self
    }

    /// Rejects zero- and negative-profit jobs before slot assignment.
    pub fn with_skip_non_positive_profit(mut self, skip: bool) -> Self {
        self.skip_non_positive_profit = skip;
        self
    }

    /// Sequences jobs into slots `1..=horizon`.
    ///
    /// `horizon` defaults to the largest deadline (floored at zero).
    ///
    /// # Errors
    /// `InvalidArgument` if `horizon` is negative. Nothing is computed in
    /// that case.
    pub fn schedule(&self, jobs: &[Job], horizon: Option<i64>) -> Result<Schedule> {
        let horizon = validation::resolve_horizon(jobs, horizon)?;
        self.report_notices(jobs, horizon);
        debug!(jobs = jobs.len(), horizon, strategy = ?self.slot_strategy, "sequencing jobs");

        let order = self.ranking.rank(jobs);
        let mut table = SlotTable::new(self.slot_strategy);
        let mut rejected: Vec<(usize, RejectionReason)> = Vec::new();

        for &idx in &order {
            let job = &jobs[idx];

            if self.skip_non_positive_profit && job.profit <= 0 {
                trace!(job = %job.id, profit = job.profit, "rejected: non-positive profit");
                rejected.push((idx, RejectionReason::NonPositiveProfit));
                continue;
            }

            let Some(latest) = job.latest_slot(horizon) else {
                trace!(job = %job.id, deadline = job.deadline, "rejected: no eligible slot");
                rejected.push((idx, RejectionReason::DeadlineBeforeFirstSlot));
                continue;
            };

            match table.claim(latest, idx) {
                Some(slot) => trace!(job = %job.id, slot, "placed"),
                None => {
                    trace!(job = %job.id, latest, "rejected: no free slot");
                    rejected.push((idx, RejectionReason::NoFreeSlot));
                }
            }
        }

        let mut schedule = Schedule::new(horizon);
        for (slot, idx) in table.into_occupants() {
            schedule.place(slot, jobs[idx].clone());
        }
        for (idx, reason) in rejected {
            schedule.reject(jobs[idx].clone(), reason);
        }

        debug!(
            placed = schedule.filled_slots(),
            rejected = schedule.rejections.len(),
            total_profit = %schedule.total_profit(),
            "sequencing complete"
        );
        Ok(schedule)
    }

    /// Sequences from a request.
    ///
    /// # Errors
    /// `InvalidArgument` if the request has no job list or a negative
    /// horizon.
    pub fn schedule_request(&self, request: &SequenceRequest) -> Result<Schedule> {
        validation::validate_request(request)?;
        let jobs = request.jobs.as_deref().unwrap_or_default();
        self.schedule(jobs, request.horizon)
    }

    fn report_notices(&self, jobs: &[Job], horizon: usize) {
        for notice in validation::inspect_jobs(jobs, horizon) {
            match notice.kind {
                NoticeKind::DuplicateId | NoticeKind::UnreachableDeadline => {
                    warn!(job = %notice.job_id, "{}", notice.message);
                }
                NoticeKind::DeadlineBeyondHorizon | NoticeKind::NonPositiveProfit => {
                    trace!(job = %notice.job_id, "{}", notice.message);
                }
            }
        }
    }
}

impl Default for JobSequencer {
    fn default() -> Self {
        Self::new()
    }
}

/// Sequences jobs with default settings and returns `(ordered ids, total profit)`.
///
/// ```
/// use u_sequence::models::Job;
///
/// let jobs = vec![Job::new("x", 1, 50), Job::new("y", 1, 30)];
/// let result = u_sequence::sequence_jobs(&jobs, None).unwrap();
/// assert_eq!(result.job_ids, vec!["x"]);
/// assert_eq!(result.total_profit, 50);
/// ```
pub fn sequence_jobs(jobs: &[Job], horizon: Option<i64>) -> Result<Projection> {
    Ok(JobSequencer::new().schedule(jobs, horizon)?.project())
}

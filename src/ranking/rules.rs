//! Built-in ranking rules.
//!
//! # Score Convention
//! All rules return lower scores for jobs that should be considered first.

use super::{RankScore, RankingRule};
use crate::models::Job;

/// Highest profit first.
///
/// The greedy priority for job sequencing: considering jobs by
/// non-increasing profit is what makes latest-slot placement optimal.
#[derive(Debug, Clone, Copy)]
pub struct HighestProfit;

impl RankingRule for HighestProfit {
    fn name(&self) -> &'static str {
        "PROFIT"
    }

    fn evaluate(&self, job: &Job) -> RankScore {
        -RankScore::from(job.profit)
    }

    fn description(&self) -> &'static str {
        "Highest Profit First"
    }
}

/// Earliest deadline first.
///
/// Used as a tie-breaker: among equal-profit jobs, the one with less room
/// claims its slot first.
///
/// # Reference
/// Jackson (1955), optimal for minimizing maximum lateness on single machine.
#[derive(Debug, Clone, Copy)]
pub struct EarliestDeadline;

impl RankingRule for EarliestDeadline {
    fn name(&self) -> &'static str {
        "EDD"
    }

    fn evaluate(&self, job: &Job) -> RankScore {
        RankScore::from(job.deadline)
    }

    fn description(&self) -> &'static str {
        "Earliest Deadline First"
    }
}

//! Rule engine for multi-key ranking.
//!
//! Chains ranking rules lexicographically: the next rule is consulted only
//! when all earlier rules tie. A final tie-breaker makes the order total.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{rules, RankScore, RankingRule};
use crate::models::Job;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Keep input order (stable).
    #[default]
    InputOrder,
    /// Lexicographic by job ID, then input order.
    ById,
}

/// Tie-break policy for equal-profit jobs in the greedy order.
///
/// Every policy ranks by non-increasing profit first; they differ only in
/// how equal-profit jobs are ordered. Each policy is total and
/// deterministic, so the same input always yields the same schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreakPolicy {
    /// Equal-profit jobs keep their input order.
    #[default]
    InputOrder,
    /// Equal-profit jobs by ascending deadline, then input order.
    EarliestDeadline,
    /// Equal-profit jobs by ascending id, then input order.
    ById,
}

/// A composable rule engine for job ranking.
///
/// # Example
/// ```
/// use u_sequence::ranking::{RankingEngine, TieBreakPolicy};
/// use u_sequence::models::Job;
///
/// let engine = RankingEngine::for_policy(TieBreakPolicy::ById);
/// let jobs = vec![Job::new("b", 1, 10), Job::new("a", 1, 10)];
/// assert_eq!(engine.rank(&jobs), vec![1, 0]);
/// ```
#[derive(Clone)]
pub struct RankingEngine {
    rules: Vec<Arc<dyn RankingRule>>,
    tie_breaker: TieBreaker,
}

impl RankingEngine {
    /// Creates an empty rule engine. With no rules, `rank` keeps input order.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::InputOrder,
        }
    }

    /// Greedy profit order with the given tie-break policy.
    pub fn for_policy(policy: TieBreakPolicy) -> Self {
        let engine = Self::new().with_rule(rules::HighestProfit);
        match policy {
            TieBreakPolicy::InputOrder => engine,
            TieBreakPolicy::EarliestDeadline => engine.with_rule(rules::EarliestDeadline),
            TieBreakPolicy::ById => engine.with_final_tie_breaker(TieBreaker::ById),
        }
    }

    /// Appends a rule. Rules are consulted in insertion order.
    pub fn with_rule<R: RankingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Ranks jobs (first = considered first).
    ///
    /// Returns indices into the input slice. The sort is stable, so jobs
    /// that tie on every rule and on the final tie-breaker keep input order.
    pub fn rank(&self, jobs: &[Job]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..jobs.len()).collect();
        if jobs.len() < 2 {
            return indices;
        }

        // Scores are computed once per job rather than per comparison.
        let scores: Vec<Vec<RankScore>> = jobs.iter().map(|j| self.evaluate(j)).collect();
        indices.sort_by(|&a, &b| {
            scores[a]
                .cmp(&scores[b])
                .then_with(|| self.break_tie(&jobs[a], &jobs[b]))
        });

        indices
    }

    /// Index of the job that would be considered first.
    pub fn select_best(&self, jobs: &[Job]) -> Option<usize> {
        self.rank(jobs).first().copied()
    }

    /// Evaluates a single job and returns scores from each rule.
    pub fn evaluate(&self, job: &Job) -> Vec<RankScore> {
        self.rules.iter().map(|rule| rule.evaluate(job)).collect()
    }

    /// Names of the configured rules, in order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    fn break_tie(&self, a: &Job, b: &Job) -> Ordering {
        match self.tie_breaker {
            TieBreaker::InputOrder => Ordering::Equal,
            TieBreaker::ById => a.id.cmp(&b.id),
        }
    }
}

impl Default for RankingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RankingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RankingEngine")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}

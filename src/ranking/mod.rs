//! Ranking rules and rule engine for the greedy order.
//!
//! The greedy sequencer considers jobs one at a time; the order it uses is
//! produced here. The default engine ranks by non-increasing profit and
//! keeps input order among equal-profit jobs.
//!
//! # Usage
//!
//! ```
//! use u_sequence::models::Job;
//! use u_sequence::ranking::{rules, RankingEngine};
//!
//! let engine = RankingEngine::new()
//!     .with_rule(rules::HighestProfit)
//!     .with_rule(rules::EarliestDeadline);
//!
//! let jobs = vec![Job::new("a", 3, 10), Job::new("b", 1, 10), Job::new("c", 2, 50)];
//! let order = engine.rank(&jobs);
//! assert_eq!(order, vec![2, 1, 0]);
//! ```
//!
//! # References
//!
//! - Horowitz & Sahni (1978), "Fundamentals of Computer Algorithms", §4.4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod engine;
pub mod rules;

pub use engine::{RankingEngine, TieBreakPolicy, TieBreaker};

use crate::models::Job;
use std::fmt::Debug;

/// Score returned by a ranking rule.
///
/// Lower scores = earlier in the ranking. Wide enough to negate any `i64`.
pub type RankScore = i128;

/// A rule that scores a job for the greedy order.
///
/// # Score Convention
/// **Lower score = considered first.**
pub trait RankingRule: Send + Sync + Debug {
    /// Rule name (e.g., "PROFIT", "EDD").
    fn name(&self) -> &'static str;

    /// Scores a job. Lower = considered earlier.
    fn evaluate(&self, job: &Job) -> RankScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

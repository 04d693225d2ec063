//! Deadline-constrained job sequencing for the U-Engine ecosystem.
//!
//! Given unit-duration jobs, each with a profit and a deadline, picks a
//! subset and assigns each chosen job a distinct slot no later than its
//! deadline so that total profit is maximal.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Job`, `Schedule`, `Projection`, `Rejection`
//! - **`ranking`**: Greedy order: `RankingEngine`, `TieBreakPolicy`, rules
//! - **`scheduler`**: `JobSequencer` (slot assignment) and `SequenceKpi`
//! - **`validation`**: Entry-point checks and non-fatal input notices
//! - **`config`**: Layered `SequencerConfig` (defaults, TOML, environment)
//! - **`demo`**: Classic and seeded random instances
//!
//! # Example
//!
//! ```
//! use u_sequence::models::Job;
//!
//! let jobs = vec![
//!     Job::new("A", 2, 100),
//!     Job::new("B", 1, 19),
//!     Job::new("C", 2, 27),
//!     Job::new("D", 1, 25),
//!     Job::new("E", 3, 15),
//! ];
//! let result = u_sequence::sequence_jobs(&jobs, Some(3)).unwrap();
//! assert_eq!(result.job_ids, vec!["C", "A", "E"]);
//! assert_eq!(result.total_profit, 142);
//! ```
//!
//! # References
//!
//! - Horowitz & Sahni (1978), "Fundamentals of Computer Algorithms", §4.4
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 16.5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod demo;
pub mod error;
pub mod models;
pub mod ranking;
pub mod scheduler;
pub mod validation;

pub use config::SequencerConfig;
pub use error::{Result, SequenceError};
pub use scheduler::{sequence_jobs, JobSequencer, SequenceRequest};

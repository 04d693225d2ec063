//! Greedy job sequencer and KPI evaluation.
//!
//! # Algorithm
//!
//! `JobSequencer` ranks jobs by profit and gives each the latest free slot
//! at or before its deadline. For unit-duration jobs on a single machine
//! this greedy choice is optimal.
//!
//! # KPI
//!
//! `SequenceKpi` computes profit capture, missed profit, and slot
//! utilization for a finished schedule.
//!
//! # References
//!
//! - Horowitz & Sahni (1978), "Fundamentals of Computer Algorithms", §4.4
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 16.5

mod greedy;
mod kpi;
mod slots;

pub use greedy::{sequence_jobs, JobSequencer, SequenceRequest};
pub use kpi::SequenceKpi;
pub use slots::SlotStrategy;

//! Input validation for sequencing problems.
//!
//! Two levels:
//! - [`validate_input`] is the hard gate run once at the entry point. It
//!   rejects an absent job collection or a negative horizon with
//!   [`SequenceError::InvalidArgument`].
//! - [`inspect_jobs`] collects non-fatal notices about jobs that are valid
//!   but will not behave as a caller might expect:
//!   - Duplicate IDs
//!   - Deadlines before the first slot
//!   - Deadlines past the horizon (clipped)
//!   - Non-positive profits

use std::collections::HashSet;

use crate::error::{Result, SequenceError};
use crate::models::Job;
use crate::scheduler::SequenceRequest;

/// A non-fatal observation about the input.
#[derive(Debug, Clone, PartialEq)]
pub struct InputNotice {
    /// Notice category.
    pub kind: NoticeKind,
    /// Job the notice refers to.
    pub job_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Categories of input notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Two jobs share the same ID.
    DuplicateId,
    /// Deadline is zero or negative; the job can never be scheduled.
    UnreachableDeadline,
    /// Deadline exceeds the horizon and is clipped to it.
    DeadlineBeyondHorizon,
    /// Profit is zero or negative.
    NonPositiveProfit,
}

impl InputNotice {
    fn new(kind: NoticeKind, job_id: &str, message: impl Into<String>) -> Self {
        Self {
            kind,
            job_id: job_id.to_string(),
            message: message.into(),
        }
    }
}

/// Validates the inputs of a sequencing call.
///
/// # Errors
/// [`SequenceError::InvalidArgument`] when `jobs` is `None` or `horizon`
/// is negative.
pub fn validate_input(jobs: Option<&[Job]>, horizon: Option<i64>) -> Result<()> {
    if jobs.is_none() {
        return Err(SequenceError::invalid_argument("job collection is absent"));
    }
    if let Some(h) = horizon {
        if h < 0 {
            return Err(SequenceError::invalid_argument(format!(
                "horizon must be non-negative, got {h}"
            )));
        }
    }
    Ok(())
}

/// Validates a sequencing request.
pub fn validate_request(request: &SequenceRequest) -> Result<()> {
    validate_input(request.jobs.as_deref(), request.horizon)
}

/// Resolves the effective horizon.
///
/// An explicit horizon is used as given; otherwise it is the largest
/// deadline, floored at zero.
///
/// # Errors
/// [`SequenceError::InvalidArgument`] when `horizon` is negative.
pub fn resolve_horizon(jobs: &[Job], horizon: Option<i64>) -> Result<usize> {
    validate_input(Some(jobs), horizon)?;
    let raw = match horizon {
        Some(h) => h,
        None => jobs.iter().map(|j| j.deadline).max().unwrap_or(0).max(0),
    };
    Ok(usize::try_from(raw).unwrap_or(usize::MAX))
}

/// Collects non-fatal notices about a job set under the given horizon.
///
/// Never fails; an empty vector means nothing noteworthy.
pub fn inspect_jobs(jobs: &[Job], horizon: usize) -> Vec<InputNotice> {
    let mut notices = Vec::new();
    let mut seen = HashSet::new();

    for job in jobs {
        if !seen.insert(job.id.as_str()) {
            notices.push(InputNotice::new(
                NoticeKind::DuplicateId,
                &job.id,
                format!("Duplicate job ID: {}", job.id),
            ));
        }

        if job.deadline <= 0 {
            notices.push(InputNotice::new(
                NoticeKind::UnreachableDeadline,
                &job.id,
                format!(
                    "Job '{}' has deadline {} and can never be scheduled",
                    job.id, job.deadline
                ),
            ));
        } else if usize::try_from(job.deadline).is_ok_and(|d| d > horizon) {
            notices.push(InputNotice::new(
                NoticeKind::DeadlineBeyondHorizon,
                &job.id,
                format!(
                    "Job '{}' deadline {} is clipped to horizon {horizon}",
                    job.id, job.deadline
                ),
            ));
        }

        if job.profit <= 0 {
            notices.push(InputNotice::new(
                NoticeKind::NonPositiveProfit,
                &job.id,
                format!("Job '{}' has non-positive profit {}", job.id, job.profit),
            ));
        }
    }

    notices
}

//! Sequencing domain models.
//!
//! Provides the data types for deadline-constrained job sequencing:
//! the input [`Job`] and the resulting [`Schedule`] slot table.
//!
//! # Domain Mappings
//!
//! | u-sequence | Manufacturing | Broadcasting | Computing |
//! |------------|--------------|--------------|-----------|
//! | Job | Rush order | Ad spot | Batch task |
//! | Slot | Shift | Break | Time quantum |
//! | Profit | Margin | Revenue | Value |
//! | Schedule | Shift plan | Break plan | Run queue |

mod job;
mod schedule;

pub use job::Job;
pub use schedule::{Projection, Rejection, RejectionReason, Schedule, Violation, ViolationType};

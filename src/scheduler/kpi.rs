//! Sequencing quality metrics (KPIs).
//!
//! Computes summary indicators from a completed schedule. The schedule
//! carries both placed and rejected jobs, so no other input is needed.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Profit | Sum of profits of placed jobs |
//! | Available Profit | Sum of positive profits over all jobs |
//! | Missed Profit | Sum of positive profits of rejected jobs |
//! | Capture Rate | Total / available profit |
//! | Slot Utilization | Filled slots / horizon |

use std::collections::HashMap;

use crate::models::{RejectionReason, Schedule};

/// Sequencing performance indicators.
#[derive(Debug, Clone)]
pub struct SequenceKpi {
    /// Sum of profits of scheduled jobs.
    pub total_profit: i128,
    /// Sum of positive profits across scheduled and rejected jobs.
    pub available_profit: i128,
    /// Sum of positive profits of rejected jobs.
    pub missed_profit: i128,
    /// Number of scheduled jobs.
    pub scheduled_count: usize,
    /// Number of rejected jobs.
    pub rejected_count: usize,
    /// Rejections broken down by reason.
    pub rejections_by_reason: HashMap<RejectionReason, usize>,
    /// Filled slots / horizon (0.0..1.0). Zero for an empty horizon.
    pub slot_utilization: f64,
    /// Total / available profit. 1.0 when nothing positive was available.
    pub profit_capture_rate: f64,
}

impl SequenceKpi {
    /// Computes KPIs from a schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let total_profit = schedule.total_profit();
        let scheduled_count = schedule.filled_slots();

        let placed_positive: i128 = schedule
            .placements()
            .map(|(_, job)| i128::from(job.profit.max(0)))
            .sum();
        let missed_profit: i128 = schedule
            .rejections
            .iter()
            .map(|r| i128::from(r.job.profit.max(0)))
            .sum();
        let available_profit = placed_positive + missed_profit;

        let mut rejections_by_reason: HashMap<RejectionReason, usize> = HashMap::new();
        for r in &schedule.rejections {
            *rejections_by_reason.entry(r.reason).or_insert(0) += 1;
        }

        let slot_utilization = if schedule.horizon == 0 {
            0.0
        } else {
            scheduled_count as f64 / schedule.horizon as f64
        };

        let profit_capture_rate = if available_profit == 0 {
            1.0
        } else {
            total_profit as f64 / available_profit as f64
        };

        Self {
            total_profit,
            available_profit,
            missed_profit,
            scheduled_count,
            rejected_count: schedule.rejections.len(),
            rejections_by_reason,
            slot_utilization,
            profit_capture_rate,
        }
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, min_capture_rate: f64, min_utilization: f64) -> bool {
        self.profit_capture_rate >= min_capture_rate && self.slot_utilization >= min_utilization
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Job;
    use crate::scheduler::JobSequencer;

    fn classic_schedule() -> Schedule {
        let jobs = vec![
            Job::new("A", 2, 100),
            Job::new("B", 1, 19),
            Job::new("C", 2, 27),
            Job::new("D", 1, 25),
            Job::new("E", 3, 15),
        ];
        JobSequencer::new().schedule(&jobs, Some(3)).unwrap()
    }

    #[test]
    fn test_kpi_classic() {
        let kpi = SequenceKpi::calculate(&classic_schedule());
        assert_eq!(kpi.total_profit, 142);
        assert_eq!(kpi.available_profit, 186);
        assert_eq!(kpi.missed_profit, 44); // D + B
        assert_eq!(kpi.scheduled_count, 3);
        assert_eq!(kpi.rejected_count, 2);
        assert_eq!(kpi.rejections_by_reason[&RejectionReason::NoFreeSlot], 2);
        assert!((kpi.slot_utilization - 1.0).abs() < 1e-10);
        assert!((kpi.profit_capture_rate - 142.0 / 186.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_partial_utilization() {
        let jobs = vec![Job::new("A", 4, 10)];
        let schedule = JobSequencer::new().schedule(&jobs, Some(4)).unwrap();
        let kpi = SequenceKpi::calculate(&schedule);
        assert!((kpi.slot_utilization - 0.25).abs() < 1e-10);
        assert!((kpi.profit_capture_rate - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_negative_profit_not_available() {
        let jobs = vec![Job::new("gain", 1, 10), Job::new("loss", 2, -4)];
        let schedule = JobSequencer::new().schedule(&jobs, None).unwrap();
        let kpi = SequenceKpi::calculate(&schedule);
        assert_eq!(kpi.total_profit, 6);
        assert_eq!(kpi.available_profit, 10);
        assert!((kpi.profit_capture_rate - 0.6).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_extreme_profits() {
        let jobs = vec![
            Job::new("A", 1, i64::MAX),
            Job::new("B", 2, i64::MAX),
            Job::new("C", 2, i64::MAX),
        ];
        let schedule = JobSequencer::new().schedule(&jobs, None).unwrap();
        let kpi = SequenceKpi::calculate(&schedule);
        let max = i128::from(i64::MAX);
        assert_eq!(kpi.total_profit, 2 * max);
        assert_eq!(kpi.missed_profit, max);
        assert_eq!(kpi.available_profit, 3 * max);
        assert!((kpi.profit_capture_rate - 2.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = SequenceKpi::calculate(&Schedule::default());
        assert_eq!(kpi.total_profit, 0);
        assert_eq!(kpi.rejected_count, 0);
        assert!((kpi.slot_utilization - 0.0).abs() < 1e-10);
        assert!((kpi.profit_capture_rate - 1.0).abs() < 1e-10);
        assert!(kpi.rejections_by_reason.is_empty());
    }

    #[test]
    fn test_meets_thresholds() {
        let kpi = SequenceKpi::calculate(&classic_schedule());
        assert!(kpi.meets_thresholds(0.7, 1.0));
        assert!(!kpi.meets_thresholds(0.8, 0.0));
        assert!(!kpi.meets_thresholds(0.0, 1.5));
    }
}

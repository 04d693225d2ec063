//! Demo instances for examples, benchmarks, and property checks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::SequenceError;
use crate::models::Job;

/// Named demo data sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoData {
    /// Five-job textbook instance; optimal profit 142 over 3 slots.
    Classic,
    /// 20 random jobs with deadlines up to 8.
    Small,
    /// 5,000 random jobs with deadlines up to 1,000.
    Large,
}

impl std::str::FromStr for DemoData {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CLASSIC" => Ok(DemoData::Classic),
            "SMALL" => Ok(DemoData::Small),
            "LARGE" => Ok(DemoData::Large),
            _ => Err(SequenceError::invalid_argument(format!(
                "unknown demo data set '{s}'"
            ))),
        }
    }
}

impl DemoData {
    /// Upper-case name, as accepted by `FromStr`.
    pub fn as_str(&self) -> &'static str {
        match self {
            DemoData::Classic => "CLASSIC",
            DemoData::Small => "SMALL",
            DemoData::Large => "LARGE",
        }
    }

    /// Generation parameters; `None` for the fixed classic instance.
    pub fn parameters(&self) -> Option<DemoParameters> {
        match self {
            DemoData::Classic => None,
            DemoData::Small => Some(DemoParameters {
                job_count: 20,
                max_deadline: 8,
                min_profit: 1,
                max_profit: 100,
            }),
            DemoData::Large => Some(DemoParameters {
                job_count: 5_000,
                max_deadline: 1_000,
                min_profit: 1,
                max_profit: 10_000,
            }),
        }
    }

    /// Builds the data set. `seed` is ignored for the classic instance.
    pub fn generate(&self, seed: u64) -> Vec<Job> {
        match self.parameters() {
            Some(params) => random_jobs(&params, seed),
            None => classic_jobs(),
        }
    }
}

/// Parameters for random instance generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoParameters {
    /// Number of jobs to generate.
    pub job_count: usize,
    /// Deadlines are drawn from `1..=max_deadline`.
    pub max_deadline: i64,
    /// Profits are drawn from `min_profit..=max_profit`.
    pub min_profit: i64,
    /// Upper profit bound; swapped with `min_profit` if smaller.
    pub max_profit: i64,
}

/// The textbook instance: jobs A–E, horizon 3, best schedule C → A → E.
pub fn classic_jobs() -> Vec<Job> {
    vec![
        Job::new("A", 2, 100),
        Job::new("B", 1, 19),
        Job::new("C", 2, 27),
        Job::new("D", 1, 25),
        Job::new("E", 3, 15),
    ]
}

/// Generates a reproducible random job set.
pub fn random_jobs(params: &DemoParameters, seed: u64) -> Vec<Job> {
    let mut rng = StdRng::seed_from_u64(seed);
    let max_deadline = params.max_deadline.max(1);
    let (lo, hi) = if params.min_profit <= params.max_profit {
        (params.min_profit, params.max_profit)
    } else {
        (params.max_profit, params.min_profit)
    };

    (0..params.job_count)
        .map(|i| {
            Job::new(
                format!("J{:04}", i + 1),
                rng.random_range(1..=max_deadline),
                rng.random_range(lo..=hi),
            )
        })
        .collect()
}

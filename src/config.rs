//! Sequencer configuration.
//!
//! Layered with figment: built-in defaults, then an optional TOML file,
//! then `U_SEQUENCE_*` environment variables.
//!
//! ```toml
//! tie_break = "earliest_deadline"   # input_order | earliest_deadline | by_id
//! slot_strategy = "disjoint_set"    # linear_scan | disjoint_set
//! skip_non_positive_profit = false
//! ```

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ranking::TieBreakPolicy;
use crate::scheduler::SlotStrategy;

/// Environment variable prefix, e.g. `U_SEQUENCE_TIE_BREAK=by_id`.
pub const ENV_PREFIX: &str = "U_SEQUENCE_";

/// Sequencer settings. Defaults reproduce the classic greedy behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequencerConfig {
    /// Ordering among equal-profit jobs.
    #[serde(default)]
    pub tie_break: TieBreakPolicy,
    /// Latest-free-slot search.
    #[serde(default)]
    pub slot_strategy: SlotStrategy,
    /// Reject zero- and negative-profit jobs instead of scheduling them.
    #[serde(default)]
    pub skip_non_positive_profit: bool,
}

impl SequencerConfig {
    /// Builds the layered figment without extracting it.
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(SequencerConfig::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// Loads configuration from defaults, `path` (if given), and environment.
    ///
    /// A missing file is not an error; figment treats it as empty.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::from_figment(&Self::figment(path))
    }

    /// Extracts configuration from an existing figment.
    pub fn from_figment(figment: &Figment) -> Result<Self> {
        Ok(figment.extract()?)
    }
}

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Output path used when none is given
pub const DEFAULT_OUTPUT_PATH: &str = "/tmp/cannon/output.tmp";

/// Prefix of every root string
pub const ROOT_PREFIX: &str = "0x";

/// Mock execution tree written for one checkpoint list
///
/// Field order is the order of keys in the output file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionTree {
    /// `0x` followed by the lowercase hex SHA-256 commitment to `checkpoints`
    pub root: String,

    /// Checkpoint values, opaque and in input order
    pub checkpoints: Vec<Value>,

    /// Step count per checkpoint, zero entries already backfilled
    #[serde(rename = "stepCount")]
    pub step_count: Vec<i64>,

    /// Hash preimages; never populated by the mock
    #[serde(default)]
    pub preimages: BTreeMap<String, String>,
}

impl ExecutionTree {
    /// Step count recorded for the checkpoint at `index`
    pub fn step_count_at(&self, index: usize) -> Option<i64> {
        self.step_count.get(index).copied()
    }
}

/// Inputs for one mock run
#[derive(Debug, Clone, PartialEq)]
pub struct ExecConfig {
    pub checkpoints: Vec<Value>,
    pub step_count: Vec<i64>,
    pub output_path: PathBuf,
}

impl Default for ExecConfig {
    fn default() -> Self {
        Self {
            checkpoints: Vec::new(),
            step_count: Vec::new(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl ExecConfig {
    /// Create a config with the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the checkpoint values
    pub fn with_checkpoints(mut self, checkpoints: Vec<Value>) -> Self {
        self.checkpoints = checkpoints;
        self
    }

    /// Set the raw step counts, zero entries are backfilled later
    pub fn with_step_count(mut self, step_count: Vec<i64>) -> Self {
        self.step_count = step_count;
        self
    }

    /// Set where the tree is written
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }
}

//! # MP Exec Tree
//!
//! Mock execution tree generator. Stands in for a real proof/execution-tree
//! generator by producing placeholder data of the right shape:
//!
//! - **Root**: `0x` + SHA-256 over the canonical JSON of `{"checkpoints": [...]}`
//! - **Step counts**: zero entries backfilled with `(index + 1) * 10`
//! - **Preimages**: always an empty map
//!
//! ## Quick Start
//!
//! ```no_run
//! use mp_exec_tree::{run, ExecConfig, ExecutionTree};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ExecConfig::new()
//!     .with_checkpoints(vec![json!(1), json!(2)])
//!     .with_step_count(vec![0, 5])
//!     .with_output_path("/tmp/cannon/output.tmp");
//!
//! // Build the tree and write it
//! let tree = run(&config)?;
//! assert_eq!(tree.step_count, vec![10, 5]);
//!
//! // Read it back and check the root
//! let loaded = ExecutionTree::load_from_file("/tmp/cannon/output.tmp")?;
//! loaded.verify()?;
//! # Ok(())
//! # }
//! ```

pub mod canonical;
pub mod cli;
pub mod error;
pub mod exec_tree;
pub mod root;
pub mod serialize;
pub mod step_count;
pub mod types;

// Re-export commonly used items
pub use canonical::{to_canonical_string, to_canonical_vec, CanonicalFormatter};
pub use error::{ExecTreeError, Result};
pub use exec_tree::{create_exec_tree, create_exec_tree_with_config, run};
pub use root::compute_root;
pub use step_count::{backfill_step_counts, backfill_step_counts_in_place};
pub use types::{ExecConfig, ExecutionTree, DEFAULT_OUTPUT_PATH, ROOT_PREFIX};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

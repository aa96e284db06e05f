use crate::error::{ExecTreeError, Result};
use crate::root::compute_root;
use crate::step_count::backfill_step_counts;
use crate::types::{ExecConfig, ExecutionTree};
use log::{debug, info};
use serde_json::Value;
use std::collections::BTreeMap;

/// Create a mock execution tree from checkpoints and raw step counts
pub fn create_exec_tree(checkpoints: Vec<Value>, step_count: Vec<i64>) -> Result<ExecutionTree> {
    if checkpoints.len() != step_count.len() {
        debug!(
            "checkpoint count {} differs from step count length {}",
            checkpoints.len(),
            step_count.len()
        );
    }

    let root = compute_root(&checkpoints)?;
    let step_count = backfill_step_counts(step_count);
    debug!("computed root {} over {} checkpoints", root, checkpoints.len());

    Ok(ExecutionTree {
        root,
        checkpoints,
        step_count,
        preimages: BTreeMap::new(),
    })
}

/// Create a mock execution tree from a config
pub fn create_exec_tree_with_config(config: &ExecConfig) -> Result<ExecutionTree> {
    create_exec_tree(config.checkpoints.clone(), config.step_count.clone())
}

/// Build the tree for `config` and write it to the configured output path
pub fn run(config: &ExecConfig) -> Result<ExecutionTree> {
    let tree = create_exec_tree_with_config(config)?;
    tree.save_to_file(&config.output_path)?;
    info!(
        "wrote execution tree {} to {}",
        tree.root,
        config.output_path.display()
    );
    Ok(tree)
}

impl ExecutionTree {
    /// Check that `root` commits to `checkpoints`
    pub fn verify(&self) -> Result<()> {
        let expected = compute_root(&self.checkpoints)?;
        if expected != self.root {
            return Err(ExecTreeError::RootMismatch {
                expected,
                got: self.root.clone(),
            });
        }
        Ok(())
    }
}

use crate::canonical::to_canonical_vec;
use crate::error::Result;
use crate::types::ROOT_PREFIX;
use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};

/// Hash input wrapping the checkpoint list
#[derive(Serialize)]
struct RootInput<'a> {
    checkpoints: &'a [Value],
}

/// Compute the root committing to a checkpoint list
///
/// The root is `0x` followed by the lowercase hex SHA-256 digest of the
/// canonical text of `{"checkpoints": <checkpoints>}`.
pub fn compute_root(checkpoints: &[Value]) -> Result<String> {
    let data = to_canonical_vec(&RootInput { checkpoints })?;

    let mut hasher = Sha256::new();
    hasher.update(&data);
    let digest = hasher.finalize();

    Ok(format!("{}{}", ROOT_PREFIX, hex::encode(digest)))
}

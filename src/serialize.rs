use crate::canonical::to_canonical_vec;
use crate::error::{ExecTreeError, Result};
use crate::types::ExecutionTree;
use std::fs;
use std::path::Path;

impl ExecutionTree {
    /// Serialize to canonical JSON
    pub fn to_json(&self) -> Result<Vec<u8>> {
        to_canonical_vec(self)
    }

    /// Serialize to pretty JSON
    pub fn to_json_pretty(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(self).map_err(|e| ExecTreeError::Serialization(e.to_string()))
    }

    /// Deserialize from JSON
    pub fn from_json(data: &[u8]) -> Result<Self> {
        serde_json::from_slice(data).map_err(|e| ExecTreeError::Deserialization(e.to_string()))
    }

    /// Save to file as canonical JSON, creating or truncating it.
    /// The parent directory must already exist.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let data = self.to_json()?;
        fs::write(path, data)?;
        Ok(())
    }

    /// Load from a JSON file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read(path)?;
        Self::from_json(&data)
    }
}

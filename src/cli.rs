//! Command-line surface of the `server` binary.
//!
//! Flags keep the names the challenge tooling passes (`--mp_checkpoints`,
//! `--mp_stepCount`, `--mp_execOutputPath`). List flags take JSON arrays and
//! are parsed before anything is hashed, so malformed input never reaches
//! the output file.

use crate::error::{ExecTreeError, Result};
use crate::types::{ExecConfig, DEFAULT_OUTPUT_PATH};
use clap::Parser;
use serde_json::Value;
use std::path::PathBuf;

pub const CHECKPOINTS_FLAG: &str = "mp_checkpoints";
pub const STEP_COUNT_FLAG: &str = "mp_stepCount";

#[derive(Parser, Debug)]
#[command(name = "server")]
#[command(about = "Mock execution tree generator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Checkpoints as a JSON array, e.g. [1,2]
    #[arg(
        long = "mp_checkpoints",
        value_name = "JSON",
        default_value = "[]",
        num_args = 0..=1,
        default_missing_value = "[]"
    )]
    pub checkpoints: String,

    /// Step counts as a JSON array of integers, e.g. [0,5]
    #[arg(
        long = "mp_stepCount",
        value_name = "JSON",
        default_value = "[]",
        num_args = 0..=1,
        default_missing_value = "[]"
    )]
    pub step_count: String,

    /// Path for saving the output
    #[arg(
        long = "mp_execOutputPath",
        value_name = "PATH",
        default_value = DEFAULT_OUTPUT_PATH,
        num_args = 0..=1,
        default_missing_value = DEFAULT_OUTPUT_PATH
    )]
    pub exec_output_path: PathBuf,
}

impl Cli {
    /// Parse the raw flag values into a run config
    pub fn into_config(self) -> Result<ExecConfig> {
        Ok(ExecConfig::new()
            .with_checkpoints(parse_checkpoints(&self.checkpoints)?)
            .with_step_count(parse_step_counts(&self.step_count)?)
            .with_output_path(self.exec_output_path))
    }
}

/// Parse a JSON array of opaque checkpoint values
pub fn parse_checkpoints(input: &str) -> Result<Vec<Value>> {
    serde_json::from_str(input).map_err(|e| ExecTreeError::InvalidInput {
        flag: CHECKPOINTS_FLAG,
        reason: e.to_string(),
    })
}

/// Parse a JSON array of integer step counts
pub fn parse_step_counts(input: &str) -> Result<Vec<i64>> {
    let values: Vec<Value> =
        serde_json::from_str(input).map_err(|e| ExecTreeError::InvalidInput {
            flag: STEP_COUNT_FLAG,
            reason: e.to_string(),
        })?;

    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            step_count_from_value(value).ok_or_else(|| ExecTreeError::InvalidInput {
                flag: STEP_COUNT_FLAG,
                reason: format!("expected an i64 at index {}, got {}", i, value),
            })
        })
        .collect()
}

/// Integer step count; any zero (`-0`, `0.0`) reads as 0
fn step_count_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| (number.as_f64() == Some(0.0)).then_some(0)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["server"]).unwrap();
        assert_eq!(cli.checkpoints, "[]");
        assert_eq!(cli.step_count, "[]");
        assert_eq!(cli.exec_output_path, PathBuf::from("/tmp/cannon/output.tmp"));

        let config = cli.into_config().unwrap();
        assert_eq!(config, ExecConfig::default());
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "server",
            "--mp_checkpoints",
            "[1,2]",
            "--mp_stepCount",
            "[0,5]",
            "--mp_execOutputPath",
            "/tmp/cannon/checkpoint/[1,2].json",
        ])
        .unwrap();

        let config = cli.into_config().unwrap();
        assert_eq!(config.checkpoints, vec![json!(1), json!(2)]);
        assert_eq!(config.step_count, vec![0, 5]);
        assert_eq!(
            config.output_path,
            PathBuf::from("/tmp/cannon/checkpoint/[1,2].json")
        );
    }

    #[test]
    fn test_equals_syntax() {
        let cli = Cli::try_parse_from(["server", "--mp_stepCount=[3, 0]"]).unwrap();
        assert_eq!(cli.into_config().unwrap().step_count, vec![3, 0]);
    }

    #[test]
    fn test_flag_without_value_uses_default() {
        let cli = Cli::try_parse_from(["server", "--mp_checkpoints"]).unwrap();
        assert_eq!(cli.checkpoints, "[]");
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["server", "--checkpoints", "[1]"]).is_err());
    }

    #[test]
    fn test_invalid_checkpoints() {
        let result = parse_checkpoints("1,2");
        match result {
            Err(ExecTreeError::InvalidInput { flag, .. }) => assert_eq!(flag, "mp_checkpoints"),
            other => panic!("expected invalid input, got {:?}", other),
        }
    }

    #[test]
    fn test_non_integer_step_count() {
        for input in ["[1.5]", "[\"1\"]", "{}", "[null]", ""] {
            match parse_step_counts(input) {
                Err(ExecTreeError::InvalidInput { flag, .. }) => assert_eq!(flag, "mp_stepCount"),
                other => panic!("expected invalid input for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_negative_zero_step_count_is_backfilled() {
        let step_count = parse_step_counts("[-0, 0, 7]").unwrap();
        assert_eq!(step_count, vec![0, 0, 7]);
        assert_eq!(
            crate::step_count::backfill_step_counts(step_count),
            vec![10, 20, 7]
        );

        assert_eq!(parse_step_counts("[-0.0, 0.0]").unwrap(), vec![0, 0]);
    }

    #[test]
    fn test_step_count_out_of_range() {
        match parse_step_counts("[9223372036854775808]") {
            Err(ExecTreeError::InvalidInput { reason, .. }) => assert!(reason.contains("index 0")),
            other => panic!("expected invalid input, got {:?}", other),
        }
    }

    #[test]
    fn test_opaque_checkpoints() {
        let checkpoints = parse_checkpoints(r#"[1, "two", {"x": [3]}, null]"#).unwrap();
        assert_eq!(checkpoints.len(), 4);
        assert_eq!(checkpoints[2], json!({"x": [3]}));
    }
}

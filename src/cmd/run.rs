use std::path::PathBuf;

use serde::Serialize;
use serde_json::{Value, json};

use crate::suite::{self, SuiteError, SuiteOptions};

/// Input arguments for suite execution through the CLI.
#[derive(Debug, Clone)]
pub struct RunCommandArgs {
    pub suite: PathBuf,
    /// Directory that `resource` payloads resolve against; defaults to the
    /// working directory.
    pub resources: Option<PathBuf>,
}

/// Structured command response that carries exit-code mapping and JSON payload.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RunCommandResponse {
    pub exit_code: i32,
    pub payload: Value,
}

pub fn run(args: &RunCommandArgs) -> RunCommandResponse {
    let options = SuiteOptions {
        resource_root: args
            .resources
            .clone()
            .unwrap_or_else(|| PathBuf::from(".")),
    };

    match suite::run_file(&args.suite, &options) {
        Ok(result) => {
            let exit_code = if result.valid { 0 } else { 2 };
            match serde_json::to_value(&result) {
                Ok(mut payload) => {
                    if let Some(map) = payload.as_object_mut() {
                        map.insert("error_count".to_string(), json!(result.errors.len()));
                    }
                    RunCommandResponse { exit_code, payload }
                }
                Err(_) => RunCommandResponse {
                    exit_code: 1,
                    payload: json!({
                        "error": "internal_error",
                        "message": "failed to serialize suite report"
                    }),
                },
            }
        }
        Err(SuiteError::Input(error)) => RunCommandResponse {
            exit_code: 3,
            payload: json!({
                "error": "input_usage_error",
                "message": error.to_string(),
            }),
        },
        Err(SuiteError::Load(error)) => RunCommandResponse {
            exit_code: 1,
            payload: json!({
                "error": "load_error",
                "message": error.to_string(),
            }),
        },
    }
}

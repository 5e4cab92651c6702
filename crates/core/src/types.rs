//! Invocation request and start payload.

use serde::{Deserialize, Deserializer, Serialize};

use crate::clock::EpochSeconds;
use crate::error::CoreError;
use crate::naming::ExecutionName;

/// Inbound event: `{ "taskId": "..." }`.
///
/// A missing or `null` `taskId` deserializes to the empty string; no
/// validation is applied here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub task_id: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl TriggerRequest {
    pub fn new(task_id: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
        }
    }
}

/// Input handed to the state machine, serialized as
/// `{"taskId":"...","timestamp":N}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionInput {
    pub task_id: String,
    pub timestamp: EpochSeconds,
}

impl ExecutionInput {
    pub fn new(task_id: impl Into<String>, timestamp: EpochSeconds) -> Self {
        Self {
            task_id: task_id.into(),
            timestamp,
        }
    }

    /// Execution name derived from the same timestamp as the payload.
    pub fn execution_name(&self) -> ExecutionName {
        ExecutionName::new(&self.task_id, self.timestamp)
    }

    /// Encode the payload as a JSON string.
    ///
    /// # Panics
    ///
    /// Never in practice: the record is a string and an integer, which
    /// `serde_json` always encodes. Callers that want the error anyway use
    /// [`try_to_json`](Self::try_to_json).
    pub fn to_json(&self) -> String {
        self.try_to_json().expect("ExecutionInput is always serialisable")
    }

    pub fn try_to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(self)?)
    }
}

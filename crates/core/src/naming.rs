//! Execution naming convention.
//!
//! Step Functions rejects a second execution with a name it has already
//! seen for the same state machine, so the name carries the invocation
//! timestamp. Resolution is one second: two invocations for the same task
//! within the same second collide and the second one is rejected upstream.

use std::fmt;

use serde::Serialize;

use crate::clock::EpochSeconds;

/// Name passed to `StartExecution`.
///
/// Convention: `{task_id}-{timestamp}` with the timestamp in plain decimal.
///
/// # Examples
///
/// ```
/// use stepstart_core::naming::ExecutionName;
///
/// let name = ExecutionName::new("job-42", 1_700_000_000);
/// assert_eq!(name.as_str(), "job-42-1700000000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ExecutionName(String);

impl ExecutionName {
    pub fn new(task_id: &str, timestamp: EpochSeconds) -> Self {
        Self(format!("{task_id}-{timestamp}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ExecutionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use stepstart_core::clock::FixedClock;
use stepstart_lambda::config::TriggerConfig;
use stepstart_lambda::trigger::ExecutionTrigger;
use stepstart_sfn::{
    ExecutionStarter, StartExecutionError, StartExecutionRequest, StartFailureKind,
    StartedExecution,
};

pub const TEST_ARN: &str = "arn:aws:states:us-east-1:123456789012:stateMachine:Tasks";

/// `2023-11-14T22:13:20Z`.
pub const TEST_EPOCH: i64 = 1_700_000_000;

/// In-memory stand-in for Step Functions.
///
/// Records every request and enforces the two engine rules the trigger
/// relies on: the ARN must be non-empty and execution names are unique.
/// A forced failure, when set, is returned for every call instead.
#[derive(Default)]
pub struct FakeEngine {
    requests: Mutex<Vec<StartExecutionRequest>>,
    names: Mutex<HashSet<String>>,
    forced: Mutex<Option<StartExecutionError>>,
}

impl FakeEngine {
    pub fn failing_with(err: StartExecutionError) -> Self {
        let engine = Self::default();
        *engine.forced.lock().unwrap() = Some(err);
        engine
    }

    pub fn requests(&self) -> Vec<StartExecutionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl ExecutionStarter for FakeEngine {
    async fn start_execution(
        &self,
        request: StartExecutionRequest,
    ) -> Result<StartedExecution, StartExecutionError> {
        self.requests.lock().unwrap().push(request.clone());

        if let Some(err) = self.forced.lock().unwrap().clone() {
            return Err(err);
        }

        if request.state_machine_arn.is_empty() {
            return Err(StartExecutionError::new(
                StartFailureKind::InvalidRequest,
                "Invalid Arn: 'Resource type not valid in this context: '",
            )
            .with_code("InvalidArn"));
        }

        if !self
            .names
            .lock()
            .unwrap()
            .insert(request.name.as_str().to_string())
        {
            return Err(already_exists(request.name.as_str()));
        }

        Ok(StartedExecution {
            execution_arn: format!(
                "{}:{}",
                request.state_machine_arn.replace(":stateMachine:", ":execution:"),
                request.name
            ),
            start_date: Some("2023-11-14T22:13:20Z".to_string()),
        })
    }
}

pub fn already_exists(name: &str) -> StartExecutionError {
    StartExecutionError::new(
        StartFailureKind::AlreadyExists,
        format!("Execution Already Exists: '{name}'"),
    )
    .with_code("ExecutionAlreadyExists")
}

/// Trigger wired to a fresh [`FakeEngine`] and a clock pinned at [`TEST_EPOCH`].
pub fn test_trigger() -> ExecutionTrigger<FakeEngine, FixedClock> {
    trigger_with(TEST_ARN, FakeEngine::default())
}

pub fn trigger_with(arn: &str, engine: FakeEngine) -> ExecutionTrigger<FakeEngine, FixedClock> {
    ExecutionTrigger::new(TriggerConfig::new(arn), engine, FixedClock(TEST_EPOCH))
}

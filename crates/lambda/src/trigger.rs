//! Maps one task identifier to one Step Functions execution.
//!
//! [`ExecutionTrigger`] samples the clock once, builds the
//! [`ExecutionInput`] payload and the [`ExecutionName`] from that single
//! timestamp, and makes exactly one `StartExecution` call. Failures are
//! logged and returned unchanged; there is no retry and no fallback name.

use stepstart_core::clock::{Clock, SystemClock};
use stepstart_core::naming::ExecutionName;
use stepstart_core::types::{ExecutionInput, TriggerRequest};
use stepstart_sfn::{ExecutionStarter, StartExecutionRequest};

use crate::config::TriggerConfig;
use crate::error::TriggerError;

/// Confirmation returned to the caller on success.
pub fn confirmation(name: &ExecutionName) -> String {
    format!("Started step function execution id {name}!")
}

/// Execution trigger with its collaborators injected at construction.
pub struct ExecutionTrigger<S, C = SystemClock> {
    config: TriggerConfig,
    starter: S,
    clock: C,
}

impl<S, C> ExecutionTrigger<S, C>
where
    S: ExecutionStarter,
    C: Clock,
{
    pub fn new(config: TriggerConfig, starter: S, clock: C) -> Self {
        Self {
            config,
            starter,
            clock,
        }
    }

    pub fn starter(&self) -> &S {
        &self.starter
    }

    /// Build the start request for `request`, reading the clock once.
    pub fn prepare(&self, request: &TriggerRequest) -> StartExecutionRequest {
        let timestamp = self.clock.now_epoch_secs();
        let input = ExecutionInput::new(request.task_id.as_str(), timestamp);
        let payload = input.to_json();

        tracing::debug!(input = %payload, "Built execution input");

        StartExecutionRequest {
            state_machine_arn: self.config.state_machine_arn.clone(),
            input: payload,
            name: input.execution_name(),
        }
    }

    /// Start one execution for `request` and return the confirmation.
    pub async fn trigger(&self, request: TriggerRequest) -> Result<String, TriggerError> {
        tracing::info!(task_id = %request.task_id, "Received task");

        if request.task_id.is_empty() {
            tracing::warn!("Empty taskId; execution name will be the bare timestamp");
        }

        let start = self.prepare(&request);
        let name = start.name.clone();

        tracing::info!(
            state_machine_arn = %start.state_machine_arn,
            execution_name = %name,
            "Starting execution",
        );

        match self.starter.start_execution(start).await {
            Ok(started) => {
                tracing::info!(
                    execution_arn = %started.execution_arn,
                    start_date = started.start_date.as_deref().unwrap_or("-"),
                    "Started step function execution",
                );
                Ok(confirmation(&name))
            }
            Err(e) => {
                tracing::error!(
                    execution_name = %name,
                    kind = ?e.kind,
                    error = %e,
                    "StartExecution failed",
                );
                Err(e.into())
            }
        }
    }
}

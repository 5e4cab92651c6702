//! Start-execution contract shared by every engine implementation.

use async_trait::async_trait;
use stepstart_core::naming::ExecutionName;

/// Everything `StartExecution` needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartExecutionRequest {
    /// Target state machine. Passed through unvalidated; an empty value is
    /// rejected by the engine.
    pub state_machine_arn: String,
    /// Opaque JSON payload handed to the first state.
    pub input: String,
    pub name: ExecutionName,
}

/// Acknowledgement returned by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartedExecution {
    pub execution_arn: String,
    /// RFC 3339, when the engine reports it.
    pub start_date: Option<String>,
}

/// Coarse classification of a start failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartFailureKind {
    /// An execution with the same name already exists.
    AlreadyExists,
    /// Malformed ARN, name or input.
    InvalidRequest,
    /// `StateMachineDoesNotExist` or `StateMachineDeleting`.
    StateMachineUnavailable,
    /// Execution limit or KMS throttling.
    Throttled,
    /// Authorization or KMS key state.
    AccessDenied,
    /// The request never got a modeled response (network, timeout).
    Transport,
    Other,
}

/// Failure reported by the engine.
///
/// Displays only the engine's own message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct StartExecutionError {
    pub kind: StartFailureKind,
    /// Service error code, e.g. `ExecutionAlreadyExists`.
    pub code: Option<String>,
    pub message: String,
}

impl StartExecutionError {
    pub fn new(kind: StartFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn is_already_exists(&self) -> bool {
        self.kind == StartFailureKind::AlreadyExists
    }
}

/// Starts one execution of a state machine.
///
/// Implementations make exactly one upstream call per invocation and do
/// not retry.
#[async_trait]
pub trait ExecutionStarter: Send + Sync {
    async fn start_execution(
        &self,
        request: StartExecutionRequest,
    ) -> Result<StartedExecution, StartExecutionError>;
}

#[async_trait]
impl<T> ExecutionStarter for std::sync::Arc<T>
where
    T: ExecutionStarter + ?Sized,
{
    async fn start_execution(
        &self,
        request: StartExecutionRequest,
    ) -> Result<StartedExecution, StartExecutionError> {
        (**self).start_execution(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_engine_message_only() {
        let err = StartExecutionError::new(
            StartFailureKind::AlreadyExists,
            "Execution Already Exists: 'arn:aws:states:eu-west-1:1:execution:sm:job-42-1'",
        )
        .with_code("ExecutionAlreadyExists");

        assert_eq!(
            err.to_string(),
            "Execution Already Exists: 'arn:aws:states:eu-west-1:1:execution:sm:job-42-1'"
        );
        assert_eq!(err.code.as_deref(), Some("ExecutionAlreadyExists"));
        assert!(err.is_already_exists());
    }

    #[test]
    fn other_kinds_are_not_already_exists() {
        let err = StartExecutionError::new(StartFailureKind::Transport, "dispatch failure");
        assert!(!err.is_already_exists());
        assert_eq!(err.code, None);
    }
}

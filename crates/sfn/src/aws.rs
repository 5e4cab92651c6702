//! AWS Step Functions implementation of [`ExecutionStarter`].

use async_trait::async_trait;
use aws_sdk_sfn::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_sfn::operation::start_execution::StartExecutionError as SdkStartExecutionError;
use aws_smithy_types::date_time::Format;

use crate::starter::{
    ExecutionStarter, StartExecutionError, StartExecutionRequest, StartFailureKind,
    StartedExecution,
};

/// Service error codes the SDK does not expose as typed predicates on
/// every release.
const INVALID_REQUEST_CODES: &[&str] = &["ValidationException"];
const THROTTLING_CODES: &[&str] = &["KmsThrottlingException", "ThrottlingException"];
const ACCESS_DENIED_CODES: &[&str] = &[
    "AccessDeniedException",
    "KmsAccessDeniedException",
    "KmsInvalidStateException",
    "UnrecognizedClientException",
];

/// Step Functions client handle.
///
/// Cloning is cheap; the underlying SDK client is reference counted.
#[derive(Debug, Clone)]
pub struct SfnStarter {
    client: aws_sdk_sfn::Client,
}

impl SfnStarter {
    pub fn new(client: aws_sdk_sfn::Client) -> Self {
        Self { client }
    }

    pub fn from_sdk_config(config: &aws_config::SdkConfig) -> Self {
        Self::new(aws_sdk_sfn::Client::new(config))
    }
}

#[async_trait]
impl ExecutionStarter for SfnStarter {
    async fn start_execution(
        &self,
        request: StartExecutionRequest,
    ) -> Result<StartedExecution, StartExecutionError> {
        tracing::debug!(
            state_machine_arn = %request.state_machine_arn,
            execution_name = %request.name,
            "Calling StartExecution",
        );

        let output = self
            .client
            .start_execution()
            .state_machine_arn(request.state_machine_arn)
            .input(request.input)
            .name(request.name.into_string())
            .send()
            .await
            .map_err(from_sdk_error)?;

        Ok(StartedExecution {
            execution_arn: output.execution_arn().to_string(),
            start_date: output.start_date().fmt(Format::DateTime).ok(),
        })
    }
}

/// Convert an SDK failure, keeping the SDK's rendering as the message.
pub(crate) fn from_sdk_error<R>(err: SdkError<SdkStartExecutionError, R>) -> StartExecutionError
where
    R: std::fmt::Debug,
{
    let message = DisplayErrorContext(&err).to_string();

    match &err {
        SdkError::ServiceError(ctx) => {
            let service_err = ctx.err();
            StartExecutionError {
                kind: classify(service_err),
                code: service_err.code().map(str::to_owned),
                message,
            }
        }
        SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) | SdkError::ResponseError(_) => {
            StartExecutionError::new(StartFailureKind::Transport, message)
        }
        SdkError::ConstructionFailure(_) => {
            StartExecutionError::new(StartFailureKind::InvalidRequest, message)
        }
        _ => StartExecutionError::new(StartFailureKind::Other, message),
    }
}

/// Map a modeled `StartExecution` error onto a [`StartFailureKind`].
pub fn classify(err: &SdkStartExecutionError) -> StartFailureKind {
    if err.is_execution_already_exists() {
        return StartFailureKind::AlreadyExists;
    }
    if err.is_invalid_arn() || err.is_invalid_name() || err.is_invalid_execution_input() {
        return StartFailureKind::InvalidRequest;
    }
    if err.is_state_machine_does_not_exist() || err.is_state_machine_deleting() {
        return StartFailureKind::StateMachineUnavailable;
    }
    if err.is_execution_limit_exceeded() {
        return StartFailureKind::Throttled;
    }

    match err.code() {
        Some(code) if INVALID_REQUEST_CODES.contains(&code) => StartFailureKind::InvalidRequest,
        Some(code) if THROTTLING_CODES.contains(&code) => StartFailureKind::Throttled,
        Some(code) if ACCESS_DENIED_CODES.contains(&code) => StartFailureKind::AccessDenied,
        _ => StartFailureKind::Other,
    }
}

use stepstart_sfn::StartExecutionError;

/// Failure of a single invocation.
#[derive(Debug, thiserror::Error)]
pub enum TriggerError {
    /// The engine rejected or never received the start request.
    #[error(transparent)]
    Start(#[from] StartExecutionError),
}

/// Failure before or outside the invocation loop.
///
/// Returned to `main`, which decides to exit.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// The default provider chain resolved no region, so no call to Step
    /// Functions can succeed.
    #[error("No AWS region configured (set AWS_REGION)")]
    MissingRegion,

    #[error("Lambda runtime error: {0}")]
    Runtime(lambda_runtime::Error),
}

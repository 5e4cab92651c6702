//! Contract tests for [`ExecutionStarter`] through shared handles.
//!
//! The trigger holds its starter behind an `Arc` when the runtime shares
//! it; the blanket impl must forward the call unchanged.

use std::sync::{Arc, Mutex};

use assert_matches::assert_matches;
use async_trait::async_trait;
use stepstart_core::naming::ExecutionName;
use stepstart_sfn::{
    ExecutionStarter, StartExecutionError, StartExecutionRequest, StartFailureKind,
    StartedExecution,
};

#[derive(Default)]
struct EchoStarter {
    seen: Mutex<Vec<StartExecutionRequest>>,
}

#[async_trait]
impl ExecutionStarter for EchoStarter {
    async fn start_execution(
        &self,
        request: StartExecutionRequest,
    ) -> Result<StartedExecution, StartExecutionError> {
        self.seen.lock().unwrap().push(request.clone());
        if request.state_machine_arn.is_empty() {
            return Err(StartExecutionError::new(
                StartFailureKind::InvalidRequest,
                "Invalid Arn: ''",
            )
            .with_code("InvalidArn"));
        }
        Ok(StartedExecution {
            execution_arn: format!("{}:{}", request.state_machine_arn, request.name),
            start_date: None,
        })
    }
}

fn request(arn: &str) -> StartExecutionRequest {
    StartExecutionRequest {
        state_machine_arn: arn.to_string(),
        input: r#"{"taskId":"job-42","timestamp":1700000000}"#.to_string(),
        name: ExecutionName::new("job-42", 1_700_000_000),
    }
}

#[tokio::test]
async fn arc_handle_forwards_request() {
    let inner = Arc::new(EchoStarter::default());
    let shared: Arc<dyn ExecutionStarter> = inner.clone();

    let started = shared
        .start_execution(request("arn:aws:states:eu-west-1:1:stateMachine:sm"))
        .await
        .expect("start should succeed");

    assert_eq!(
        started.execution_arn,
        "arn:aws:states:eu-west-1:1:stateMachine:sm:job-42-1700000000"
    );
    let seen = inner.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0], request("arn:aws:states:eu-west-1:1:stateMachine:sm"));
}

#[tokio::test]
async fn arc_handle_forwards_error_unchanged() {
    let shared = Arc::new(EchoStarter::default());

    let err = shared.start_execution(request("")).await.unwrap_err();

    assert_matches!(
        err,
        StartExecutionError { kind: StartFailureKind::InvalidRequest, ref code, .. }
            if code.as_deref() == Some("InvalidArn")
    );
    assert_eq!(err.to_string(), "Invalid Arn: ''");
}

//! `stepstart-lambda` -- starts one Step Functions execution per event.
//!
//! Receives `{ "taskId": "..." }`, starts the configured state machine with
//! input `{ "taskId": "...", "timestamp": <epoch secs> }` under the name
//! `<taskId>-<timestamp>`, and returns a confirmation string.
//!
//! # Environment variables
//!
//! | Variable          | Required | Default | Description                           |
//! |-------------------|----------|---------|---------------------------------------|
//! | `StateMachineArn` | yes      | --      | ARN of the state machine to start     |
//! | `LOG_FORMAT`      | no       | `text`  | `json` for JSON log lines             |
//! | `RUST_LOG`        | no       | `stepstart_lambda=info,stepstart_sfn=info` | Log filter |
//! | `AWS_REGION`      | yes      | --      | Set by the Lambda environment         |

use stepstart_lambda::config::{LogFormat, TriggerConfig};
use stepstart_lambda::{logging, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    logging::init(LogFormat::from_env());

    let config = TriggerConfig::from_env();

    tracing::info!(
        state_machine_arn = %config.state_machine_arn,
        "Starting stepstart-lambda",
    );

    let trigger = startup::build_trigger(config).await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "Startup failed");
        std::process::exit(1);
    });

    if let Err(e) = startup::run(trigger).await {
        tracing::error!(error = %e, "Invocation loop terminated");
        std::process::exit(1);
    }
}

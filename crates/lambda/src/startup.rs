//! Process bootstrap: AWS configuration, client construction and the
//! invocation loop.
//!
//! Everything here returns [`StartupError`]; only `main` exits.

use lambda_runtime::{service_fn, LambdaEvent};
use stepstart_core::clock::{Clock, SystemClock};
use stepstart_core::types::TriggerRequest;
use stepstart_sfn::{ExecutionStarter, SfnStarter};

use crate::config::TriggerConfig;
use crate::error::StartupError;
use crate::handler;
use crate::trigger::ExecutionTrigger;

/// Fail fast when the provider chain resolved no region.
pub fn check_sdk_config(sdk_config: &aws_config::SdkConfig) -> Result<(), StartupError> {
    match sdk_config.region() {
        Some(region) => {
            tracing::info!(region = %region, "AWS SDK config loaded");
            Ok(())
        }
        None => Err(StartupError::MissingRegion),
    }
}

/// Load the default AWS config and build a trigger backed by Step Functions.
pub async fn build_trigger(
    config: TriggerConfig,
) -> Result<ExecutionTrigger<SfnStarter, SystemClock>, StartupError> {
    let sdk_config = aws_config::load_from_env().await;
    check_sdk_config(&sdk_config)?;

    let starter = SfnStarter::from_sdk_config(&sdk_config);
    Ok(ExecutionTrigger::new(config, starter, SystemClock))
}

/// Serve invocations until the runtime shuts down.
pub async fn run<S, C>(trigger: ExecutionTrigger<S, C>) -> Result<(), StartupError>
where
    S: ExecutionStarter,
    C: Clock,
{
    let trigger = &trigger;

    lambda_runtime::run(service_fn(
        move |event: LambdaEvent<TriggerRequest>| async move {
            handler::handle(trigger, event)
                .await
                .map_err(lambda_runtime::Error::from)
        },
    ))
    .await
    .map_err(StartupError::Runtime)
}

//! Lambda event adapter around [`ExecutionTrigger`].

use lambda_runtime::LambdaEvent;
use stepstart_core::clock::Clock;
use stepstart_core::types::TriggerRequest;
use stepstart_sfn::ExecutionStarter;
use tracing::Instrument;

use crate::error::TriggerError;
use crate::trigger::ExecutionTrigger;

/// Handle one invocation. The returned string is serialized by the
/// runtime as a JSON string literal.
pub async fn handle<S, C>(
    trigger: &ExecutionTrigger<S, C>,
    event: LambdaEvent<TriggerRequest>,
) -> Result<String, TriggerError>
where
    S: ExecutionStarter,
    C: Clock,
{
    let (request, context) = event.into_parts();
    let span = tracing::info_span!("invocation", request_id = %context.request_id);

    trigger.trigger(request).instrument(span).await
}

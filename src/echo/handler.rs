use lambda_runtime::{Error, LambdaEvent};
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::core::models::InvocationContext;
use crate::response::Response;

pub use self::function_handler as handler;

/// Wraps `event` and `context` verbatim as `{"event": .., "context": ..}`.
///
/// Key order is `event` then `context`; nested objects keep the order they
/// arrived in.
#[must_use]
pub fn respond(event: &Value, context: &Value) -> Response {
    Response::json(&json!({
        "event": event,
        "context": context,
    }))
}

/// Lambda handler for the Echo entrypoint.
///
/// # Errors
///
/// Returns an error only if the runtime context cannot be turned into JSON.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Response, Error> {
    info!(request_id = %event.context.request_id, "Echo Lambda invoked");

    let context = serde_json::to_value(InvocationContext::from(&event.context))?;
    let response = respond(&event.payload, &context);
    debug!(body_len = response.body.len(), "Echo response built");

    Ok(response)
}

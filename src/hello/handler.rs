use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

use crate::response::Response;

pub const HELLO_HTML: &str = "<html><body><h1>Hello World!</h1></body></html>";

pub use self::function_handler as handler;

/// Builds the greeting. Both inputs are ignored.
#[must_use]
pub fn respond(_event: &Value, _context: &Value) -> Response {
    Response::html(HELLO_HTML)
}

/// Lambda handler for the Hello entrypoint.
///
/// # Errors
///
/// Never fails; the `Result` is what `lambda_runtime::service_fn` expects.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Response, Error> {
    info!(request_id = %event.context.request_id, "Hello Lambda invoked");

    // The greeting never looks at the context, so skip projecting it
    Ok(respond(&event.payload, &Value::Null))
}

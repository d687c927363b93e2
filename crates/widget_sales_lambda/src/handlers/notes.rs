use lambda_runtime::{Context, Error, LambdaEvent};
use serde_json::Value;
use widget_sales_core::contract::{compose_notes, MissingFieldError, NotesResponse};

/// Builds the confirmation notes for one submission. The invocation context is
/// accepted for parity with the platform signature and is not read.
pub fn handle_notes_event(
    event: Value,
    _context: &Context,
) -> Result<NotesResponse, MissingFieldError> {
    compose_notes(&event)
}

pub async fn handle_request(event: LambdaEvent<Value>) -> Result<NotesResponse, Error> {
    let (payload, context) = event.into_parts();
    tracing::info!(request_id = %context.request_id, "handling widget sales submission");

    match handle_notes_event(payload, &context) {
        Ok(response) => Ok(response),
        Err(error) => {
            tracing::warn!(
                request_id = %context.request_id,
                field = error.field(),
                "rejecting submission with missing field"
            );
            Err(Error::from(error))
        }
    }
}

use http::request::Request;

use crate::routes::HttpError;
use common_utils::consts;

/// Record the header's fields in request's trace
pub fn record_fields_from_header<B>(request: &Request<B>) -> tracing::Span {
    let url_path = request.uri().path();

    let span = tracing::debug_span!(
        "request",
        uri = %url_path,
        method = %request.method(),
        version = ?request.version(),
        request_id = tracing::field::Empty,
    );
    request
        .headers()
        .get(consts::X_REQUEST_ID)
        .and_then(|value| value.to_str().ok())
        .map(|request_id| span.record("request_id", request_id));

    span
}

/// Decode a JSON request body that may be left out entirely. An empty body or a JSON `null`
/// is `None`.
pub fn parse_optional_json<T>(body: &[u8]) -> Result<Option<T>, HttpError>
where
    T: serde::de::DeserializeOwned,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    serde_json::from_slice::<Option<T>>(body)
        .map_err(|error| HttpError::bad_request("IR_01", format!("Invalid request body: {error}")))
}

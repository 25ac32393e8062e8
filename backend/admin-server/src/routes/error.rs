use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain_types::{
    errors::{ApplicationErrorResponse, FactoryError},
    utils::ForeignFrom,
};
use serde::Serialize;

use crate::logger;

#[derive(Debug)]
pub struct HttpError {
    pub status: StatusCode,
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    message: String,
    code: String,
}

impl HttpError {
    pub fn bad_request(code: &str, message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code: code.to_owned(),
            message: message.into(),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: ErrorDetail {
                message: self.message,
                code: self.code,
            },
        });
        (self.status, body).into_response()
    }
}

impl From<ApplicationErrorResponse> for HttpError {
    fn from(response: ApplicationErrorResponse) -> Self {
        let api_error = response.get_api_error();

        Self {
            status: StatusCode::from_u16(api_error.error_identifier)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            code: api_error.sub_code.clone(),
            message: api_error.error_message.clone(),
        }
    }
}

impl From<error_stack::Report<FactoryError>> for HttpError {
    fn from(report: error_stack::Report<FactoryError>) -> Self {
        let response = ApplicationErrorResponse::foreign_from(report.current_context());

        match response {
            ApplicationErrorResponse::InternalServerError(_) => {
                logger::error!(error = ?report, "failed to prepare payment model");
            }
            ApplicationErrorResponse::BadRequest(_) => {
                logger::warn!(error = %report, "rejected payment model request");
            }
        }

        response.into()
    }
}

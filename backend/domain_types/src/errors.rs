use strum::Display;

/// Failures of the payment model factory.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum FactoryError {
    #[error("Required argument `{argument}` was not provided")]
    InvalidArgument { argument: &'static str },
    #[error("Failed to load countries")]
    CountryLookupFailed,
    #[error("Failed to load payment methods")]
    PaymentMethodLookupFailed,
    #[error("Failed to load restricted countries of payment method {system_name}")]
    RestrictionLookupFailed { system_name: String },
    #[error("Failed to resolve localized label {key}")]
    LocalizationFailed { key: &'static str },
}

/// Failures reported by the collaborating services the factory reads from.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum ProviderError {
    #[error("{resource} was not found")]
    NotFound { resource: String },
    #[error("Provider is unavailable: {reason}")]
    Unavailable { reason: String },
}

#[derive(Debug, Clone, thiserror::Error, Display)]
pub enum ApplicationErrorResponse {
    BadRequest(ApiError),
    InternalServerError(ApiError),
}

impl ApplicationErrorResponse {
    pub fn get_api_error(&self) -> &ApiError {
        match self {
            Self::BadRequest(error) | Self::InternalServerError(error) => error,
        }
    }
}

#[derive(Debug, serde::Serialize, Clone)]
pub struct ApiError {
    pub sub_code: String,
    pub error_identifier: u16,
    pub error_message: String,
    pub error_object: Option<serde_json::Value>,
}

use common_utils::CustomResult;
use error_stack::report;

use crate::{
    admin_models::{CountryModel, PaymentMethodDisplayModel},
    errors::{ApiError, ApplicationErrorResponse, FactoryError},
    payment_methods::{Country, PaymentMethodDescriptor},
};

pub trait ForeignFrom<F>: Sized {
    /// Convert from a foreign type to the current type
    fn foreign_from(from: F) -> Self;
}

/// Entry point for arguments that may be absent. Everything past this call takes the value
/// by construction.
pub fn required<T>(value: Option<T>, argument: &'static str) -> CustomResult<T, FactoryError> {
    value.ok_or_else(|| report!(FactoryError::InvalidArgument { argument }))
}

impl ForeignFrom<&Country> for CountryModel {
    fn foreign_from(country: &Country) -> Self {
        Self {
            id: country.id,
            name: country.name.clone(),
            published: country.published,
        }
    }
}

impl ForeignFrom<&PaymentMethodDescriptor> for PaymentMethodDisplayModel {
    fn foreign_from(method: &PaymentMethodDescriptor) -> Self {
        Self {
            id: method.id,
            system_name: method.system_name.clone(),
            friendly_name: method.friendly_name.clone(),
            display_order: method.display_order,
        }
    }
}

impl ForeignFrom<&FactoryError> for ApplicationErrorResponse {
    fn foreign_from(error: &FactoryError) -> Self {
        match error {
            FactoryError::InvalidArgument { .. } => Self::BadRequest(ApiError {
                sub_code: "IR_00".to_owned(),
                error_identifier: 400,
                error_message: error.to_string(),
                error_object: None,
            }),
            FactoryError::CountryLookupFailed
            | FactoryError::PaymentMethodLookupFailed
            | FactoryError::RestrictionLookupFailed { .. }
            | FactoryError::LocalizationFailed { .. } => Self::InternalServerError(ApiError {
                sub_code: "HE_00".to_owned(),
                error_identifier: 500,
                error_message: error.to_string(),
                error_object: None,
            }),
        }
    }
}

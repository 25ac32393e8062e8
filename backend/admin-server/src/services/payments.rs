use std::collections::HashSet;

use common_utils::CustomResult;
use domain_types::{
    errors::ProviderError,
    payment_methods::{CountryId, PaymentMethodDescriptor},
};
use error_stack::report;
use interfaces::api::PaymentService;

/// Installed payment methods, kept in registration order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPaymentService {
    methods: Vec<PaymentMethodDescriptor>,
}

impl InMemoryPaymentService {
    pub fn new(methods: Vec<PaymentMethodDescriptor>) -> Self {
        Self { methods }
    }
}

impl PaymentService for InMemoryPaymentService {
    fn load_all_payment_methods(
        &self,
    ) -> CustomResult<Vec<PaymentMethodDescriptor>, ProviderError> {
        Ok(self.methods.clone())
    }

    fn get_restricted_country_ids(
        &self,
        method: &PaymentMethodDescriptor,
    ) -> CustomResult<HashSet<CountryId>, ProviderError> {
        self.methods
            .iter()
            .find(|installed| installed.system_name == method.system_name)
            .map(|installed| installed.restricted_country_ids.clone())
            .ok_or_else(|| {
                report!(ProviderError::NotFound {
                    resource: format!("Payment method {}", method.system_name),
                })
            })
    }
}

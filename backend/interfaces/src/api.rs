//! Services the admin model factories read from.

use std::collections::HashSet;

use common_utils::CustomResult;
use domain_types::{
    errors::ProviderError,
    payment_methods::{Country, CountryId, Language, PaymentMethodDescriptor},
};

pub trait CountryService: Send + Sync {
    /// All countries, in display order. Unpublished countries are only included when
    /// `show_hidden` is set.
    fn get_all_countries(&self, show_hidden: bool) -> CustomResult<Vec<Country>, ProviderError>;
}

pub trait PaymentService: Send + Sync {
    /// Every installed payment method, in registration order.
    fn load_all_payment_methods(&self)
        -> CustomResult<Vec<PaymentMethodDescriptor>, ProviderError>;

    /// Countries the payment method may not be used in.
    fn get_restricted_country_ids(
        &self,
        method: &PaymentMethodDescriptor,
    ) -> CustomResult<HashSet<CountryId>, ProviderError>;
}

/// Decides whether an installed payment method is offered to customers.
pub trait ActiveMethodPolicy: Send + Sync {
    fn is_active(&self, method: &PaymentMethodDescriptor) -> bool;
}

pub trait LocalizationService: Send + Sync {
    fn get_resource(&self, key: &str, language: &Language) -> CustomResult<String, ProviderError>;
}

pub trait AssetResolver: Send + Sync {
    /// Absolute URL of the method's logo, or `None` when the method ships no logo.
    fn logo_url(&self, method: &PaymentMethodDescriptor, store_location: &url::Url)
        -> Option<String>;
}

use common_enums::LocalizedEnum;
use common_utils::CustomResult;
use domain_types::{errors::ProviderError, payment_methods::Language};

use crate::api::LocalizationService;

pub trait LocalizedEnumExt {
    /// Label of an enum variant in `language`.
    fn get_localized_enum<E: LocalizedEnum>(
        &self,
        value: E,
        language: &Language,
    ) -> CustomResult<String, ProviderError>;
}

impl<T> LocalizedEnumExt for T
where
    T: LocalizationService + ?Sized,
{
    fn get_localized_enum<E: LocalizedEnum>(
        &self,
        value: E,
        language: &Language,
    ) -> CustomResult<String, ProviderError> {
        self.get_resource(value.localization_key(), language)
    }
}

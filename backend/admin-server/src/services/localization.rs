use std::collections::HashMap;

use common_utils::CustomResult;
use domain_types::{errors::ProviderError, payment_methods::Language, types::LocalizationSettings};
use error_stack::report;
use interfaces::api::LocalizationService;

/// Locale string resources per language. Resource names are matched ignoring case.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLocalizationService {
    resources: HashMap<String, HashMap<String, String>>,
}

impl InMemoryLocalizationService {
    pub fn new(settings: &LocalizationSettings) -> Self {
        let resources = settings
            .languages
            .iter()
            .map(|language| {
                let strings = language
                    .resources
                    .iter()
                    .map(|resource| (resource.name.to_lowercase(), resource.value.clone()))
                    .collect();
                (language.culture.culture().to_lowercase(), strings)
            })
            .collect();

        Self { resources }
    }
}

impl LocalizationService for InMemoryLocalizationService {
    fn get_resource(&self, key: &str, language: &Language) -> CustomResult<String, ProviderError> {
        self.resources
            .get(&language.culture().to_lowercase())
            .and_then(|strings| strings.get(&key.to_lowercase()))
            .cloned()
            .ok_or_else(|| {
                report!(ProviderError::NotFound {
                    resource: format!("Locale string resource '{key}' for language {language}"),
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use domain_types::types::{LanguageResources, LocaleStringResource};

    use super::*;

    fn settings() -> LocalizationSettings {
        LocalizationSettings {
            default_language: Language::new("en-US"),
            languages: vec![LanguageResources {
                culture: Language::new("en-US"),
                resources: vec![LocaleStringResource {
                    name: "Enums.RecurringPaymentType.Manual".to_string(),
                    value: "Manual".to_string(),
                }],
            }],
        }
    }

    #[test]
    fn resources_are_matched_ignoring_case() {
        let service = InMemoryLocalizationService::new(&settings());

        let value = service
            .get_resource("enums.recurringpaymenttype.manual", &Language::new("EN-us"))
            .unwrap();

        assert_eq!(value, "Manual");
    }

    #[test]
    fn missing_resource_is_reported() {
        let service = InMemoryLocalizationService::new(&settings());

        let error = service
            .get_resource("Enums.RecurringPaymentType.Manual", &Language::new("de-DE"))
            .unwrap_err();

        assert!(matches!(
            error.current_context(),
            ProviderError::NotFound { .. }
        ));
    }
}

use common_utils::{consts, fp_utils::when, ValidationError};
use serde::Deserialize;
use url::Url;

use crate::payment_methods::{Country, Language, PaymentMethodDescriptor};

#[derive(Clone, Deserialize, Debug)]
pub struct StoreSettings {
    /// Base URL of the storefront host
    pub location: Url,
}

impl StoreSettings {
    pub fn validate(&self) -> Result<(), ValidationError> {
        when(!self.location.path().ends_with('/'), || {
            Err(ValidationError::InvalidValue {
                message: format!(
                    "Store location '{}' must end with a '/'",
                    self.location
                ),
            })
        })
    }
}

#[derive(Clone, Deserialize, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct AdminAreaSettings {
    pub default_grid_page_size: u32,
    pub grid_page_sizes: Vec<u32>,
}

impl Default for AdminAreaSettings {
    fn default() -> Self {
        Self {
            default_grid_page_size: consts::DEFAULT_GRID_PAGE_SIZE,
            grid_page_sizes: consts::DEFAULT_GRID_PAGE_SIZES.to_vec(),
        }
    }
}

impl AdminAreaSettings {
    pub fn validate(&self) -> Result<(), ValidationError> {
        when(self.default_grid_page_size == 0, || {
            Err(ValidationError::IncorrectValueProvided {
                field_name: "admin_area.default_grid_page_size",
            })
        })?;

        when(
            !self.grid_page_sizes.contains(&self.default_grid_page_size),
            || {
                Err(ValidationError::InvalidValue {
                    message: format!(
                        "Default grid page size {} is not one of {:?}",
                        self.default_grid_page_size, self.grid_page_sizes
                    ),
                })
            },
        )
    }
}

#[derive(Clone, Deserialize, Debug, Default)]
pub struct PaymentSettings {
    /// System names of installed payment methods switched off by an administrator
    #[serde(default)]
    pub disabled_payment_method_system_names: Vec<String>,
}

impl PaymentSettings {
    pub fn is_payment_method_disabled(&self, system_name: &str) -> bool {
        self.disabled_payment_method_system_names
            .iter()
            .any(|disabled| disabled.eq_ignore_ascii_case(system_name))
    }
}

#[derive(Clone, Deserialize, Debug)]
pub struct LocalizationSettings {
    pub default_language: Language,
    #[serde(default)]
    pub languages: Vec<LanguageResources>,
}

impl LocalizationSettings {
    pub fn validate(&self) -> Result<(), ValidationError> {
        when(
            !self
                .languages
                .iter()
                .any(|language| language.culture == self.default_language),
            || {
                Err(ValidationError::InvalidValue {
                    message: format!(
                        "Default language '{}' has no configured resources",
                        self.default_language
                    ),
                })
            },
        )
    }

    /// The configured language matching `culture`, ignoring case.
    pub fn find_language(&self, culture: &str) -> Option<&Language> {
        self.languages
            .iter()
            .map(|language| &language.culture)
            .find(|language| language.matches(culture))
    }
}

#[derive(Clone, Deserialize, Debug)]
pub struct LanguageResources {
    pub culture: Language,
    #[serde(default)]
    pub resources: Vec<LocaleStringResource>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct LocaleStringResource {
    pub name: String,
    pub value: String,
}

/// Countries and payment methods served by the in-memory providers.
#[derive(Clone, Deserialize, Debug, Default)]
pub struct Catalog {
    #[serde(default)]
    pub countries: Vec<Country>,
    #[serde(default)]
    pub payment_methods: Vec<PaymentMethodDescriptor>,
}

/// Request scoped state the admin models are prepared for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkContext {
    pub working_language: Language,
    pub store_location: Url,
}

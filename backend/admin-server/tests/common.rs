#![allow(dead_code, clippy::unwrap_used)]

use std::{collections::HashSet, sync::Arc};

use admin_server::{
    factories::PaymentModelFactory,
    services::{
        InMemoryCountryService, InMemoryLocalizationService, InMemoryPaymentService,
        PluginAssetResolver, SettingsActiveMethodPolicy,
    },
};
use common_enums::RecurringPaymentType;
use common_utils::CustomResult;
use domain_types::{
    errors::ProviderError,
    payment_methods::{Country, CountryId, Language, PaymentMethodDescriptor, PaymentMethodId},
    types::{
        AdminAreaSettings, LanguageResources, LocaleStringResource, LocalizationSettings,
        PaymentSettings, WorkContext,
    },
};
use error_stack::report;
use interfaces::api::{CountryService, PaymentService};

pub const STORE_LOCATION: &str = "https://shop.example.com/";

pub fn country(id: u32, name: &str, published: bool) -> Country {
    Country {
        id: CountryId(id),
        name: name.to_string(),
        published,
    }
}

/// Five countries, the fifth one unpublished.
pub fn countries() -> Vec<Country> {
    vec![
        country(1, "United States", true),
        country(2, "Germany", true),
        country(3, "France", true),
        country(4, "Canada", true),
        country(5, "Atlantis", false),
    ]
}

pub fn payment_method(id: u32, system_name: &str, restricted: &[u32]) -> PaymentMethodDescriptor {
    PaymentMethodDescriptor {
        id: PaymentMethodId(id),
        system_name: system_name.to_string(),
        friendly_name: format!("Friendly {system_name}"),
        display_order: i32::try_from(id).unwrap(),
        supports_capture: false,
        supports_partially_refund: false,
        supports_refund: true,
        supports_void: false,
        recurring_payment_type: RecurringPaymentType::NotSupported,
        configuration_url: None,
        logo: Some("png".to_string()),
        restricted_country_ids: restricted.iter().copied().map(CountryId).collect(),
    }
}

/// `Payments.A` restricted in countries 2 and 4, `Payments.B` and `Payments.C` unrestricted.
pub fn payment_methods() -> Vec<PaymentMethodDescriptor> {
    let mut manual = payment_method(2, "Payments.B", &[]);
    manual.recurring_payment_type = RecurringPaymentType::Manual;
    manual.logo = None;

    let mut automatic = payment_method(3, "Payments.C", &[]);
    automatic.recurring_payment_type = RecurringPaymentType::Automatic;
    automatic.configuration_url = Some("Admin/PaymentC/Configure".to_string());

    vec![payment_method(1, "Payments.A", &[2, 4]), manual, automatic]
}

pub fn localization_settings() -> LocalizationSettings {
    let resource = |name: &str, value: &str| LocaleStringResource {
        name: name.to_string(),
        value: value.to_string(),
    };

    LocalizationSettings {
        default_language: Language::new("en-US"),
        languages: vec![
            LanguageResources {
                culture: Language::new("en-US"),
                resources: vec![
                    resource("Enums.RecurringPaymentType.NotSupported", "Not supported"),
                    resource("Enums.RecurringPaymentType.Manual", "Manual"),
                    resource("Enums.RecurringPaymentType.Automatic", "Automatic"),
                ],
            },
            LanguageResources {
                culture: Language::new("de-DE"),
                resources: vec![
                    resource("Enums.RecurringPaymentType.NotSupported", "Nicht unterstützt"),
                    resource("Enums.RecurringPaymentType.Manual", "Manuell"),
                ],
            },
        ],
    }
}

/// `Payments.B` is switched off by an administrator.
pub fn payment_settings() -> PaymentSettings {
    PaymentSettings {
        disabled_payment_method_system_names: vec!["payments.b".to_string()],
    }
}

pub fn work_context(culture: &str) -> WorkContext {
    WorkContext {
        working_language: Language::new(culture),
        store_location: url::Url::parse(STORE_LOCATION).unwrap(),
    }
}

pub struct FactoryBuilder {
    country_service: Arc<dyn CountryService>,
    payment_service: Arc<dyn PaymentService>,
    admin_area_settings: AdminAreaSettings,
}

impl Default for FactoryBuilder {
    fn default() -> Self {
        Self {
            country_service: Arc::new(InMemoryCountryService::new(countries())),
            payment_service: Arc::new(InMemoryPaymentService::new(payment_methods())),
            admin_area_settings: AdminAreaSettings::default(),
        }
    }
}

impl FactoryBuilder {
    pub fn country_service(mut self, service: impl CountryService + 'static) -> Self {
        self.country_service = Arc::new(service);
        self
    }

    pub fn payment_service(mut self, service: impl PaymentService + 'static) -> Self {
        self.payment_service = Arc::new(service);
        self
    }

    pub fn admin_area_settings(mut self, settings: AdminAreaSettings) -> Self {
        self.admin_area_settings = settings;
        self
    }

    pub fn build(self) -> PaymentModelFactory {
        PaymentModelFactory::new(
            self.country_service,
            Arc::new(InMemoryLocalizationService::new(&localization_settings())),
            self.payment_service,
            Arc::new(PluginAssetResolver),
            Arc::new(SettingsActiveMethodPolicy::new(payment_settings())),
            self.admin_area_settings,
        )
    }
}

/// A country provider whose backing store is down.
pub struct UnavailableCountryService;

impl CountryService for UnavailableCountryService {
    fn get_all_countries(&self, _show_hidden: bool) -> CustomResult<Vec<Country>, ProviderError> {
        Err(report!(ProviderError::Unavailable {
            reason: "country store is offline".to_string(),
        }))
    }
}

/// A payment method provider whose backing store is down.
pub struct UnavailablePaymentService;

impl PaymentService for UnavailablePaymentService {
    fn load_all_payment_methods(
        &self,
    ) -> CustomResult<Vec<PaymentMethodDescriptor>, ProviderError> {
        Err(report!(ProviderError::Unavailable {
            reason: "plugin store is offline".to_string(),
        }))
    }

    fn get_restricted_country_ids(
        &self,
        method: &PaymentMethodDescriptor,
    ) -> CustomResult<HashSet<CountryId>, ProviderError> {
        Err(report!(ProviderError::NotFound {
            resource: format!("Payment method {}", method.system_name),
        }))
    }
}

/// Loads its methods, but fails to report restrictions for `failing_system_name`.
pub struct FlakyRestrictionService {
    pub methods: Vec<PaymentMethodDescriptor>,
    pub failing_system_name: &'static str,
}

impl PaymentService for FlakyRestrictionService {
    fn load_all_payment_methods(
        &self,
    ) -> CustomResult<Vec<PaymentMethodDescriptor>, ProviderError> {
        Ok(self.methods.clone())
    }

    fn get_restricted_country_ids(
        &self,
        method: &PaymentMethodDescriptor,
    ) -> CustomResult<HashSet<CountryId>, ProviderError> {
        if method.system_name == self.failing_system_name {
            return Err(report!(ProviderError::Unavailable {
                reason: "restriction store is offline".to_string(),
            }));
        }
        Ok(method.restricted_country_ids.clone())
    }
}

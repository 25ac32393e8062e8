//! In-memory implementations of the services the factories read from, seeded from the
//! `[catalog]`, `[payment_settings]` and `[localization]` configuration sections.

pub mod assets;
pub mod countries;
pub mod localization;
pub mod payments;
pub mod policy;

pub use assets::PluginAssetResolver;
pub use countries::InMemoryCountryService;
pub use localization::InMemoryLocalizationService;
pub use payments::InMemoryPaymentService;
pub use policy::SettingsActiveMethodPolicy;

use std::sync::Arc;

use domain_types::types::{LocalizationSettings, WorkContext};
use http::HeaderMap;

use crate::{configs::Config, factories::PaymentModelFactory};

#[derive(Clone)]
pub struct AppState {
    pub payment_model_factory: Arc<PaymentModelFactory>,
    pub localization: Arc<LocalizationSettings>,
    pub store_location: url::Url,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self::with_factory(config, PaymentModelFactory::from_config(config))
    }

    pub fn with_factory(config: &Config, payment_model_factory: PaymentModelFactory) -> Self {
        Self {
            payment_model_factory: Arc::new(payment_model_factory),
            localization: Arc::new(config.localization.clone()),
            store_location: config.store.location.clone(),
        }
    }

    /// Work context of a request: the preferred language out of `Accept-Language` when it
    /// is configured, the default language otherwise.
    pub fn work_context(&self, headers: &HeaderMap) -> WorkContext {
        let working_language = headers
            .get(http::header::ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok())
            .and_then(preferred_culture)
            .and_then(|culture| self.localization.find_language(culture))
            .unwrap_or(&self.localization.default_language)
            .clone();

        WorkContext {
            working_language,
            store_location: self.store_location.clone(),
        }
    }
}

/// First language tag of an `Accept-Language` value, without its quality.
fn preferred_culture(accept_language: &str) -> Option<&str> {
    accept_language
        .split(',')
        .next()
        .and_then(|tag| tag.split(';').next())
        .map(str::trim)
        .filter(|tag| !tag.is_empty() && *tag != "*")
}

use std::{collections::HashSet, fmt};

use common_enums::RecurringPaymentType;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CountryId(pub u32);

impl fmt::Display for CountryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PaymentMethodId(pub u32);

impl fmt::Display for PaymentMethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A country known to the store. Unpublished countries are hidden from the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: CountryId,
    pub name: String,
    #[serde(default = "published_by_default")]
    pub published: bool,
}

fn published_by_default() -> bool {
    true
}

/// Metadata of an installed payment integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodDescriptor {
    pub id: PaymentMethodId,
    pub system_name: String,
    pub friendly_name: String,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default)]
    pub supports_capture: bool,
    #[serde(default)]
    pub supports_partially_refund: bool,
    #[serde(default)]
    pub supports_refund: bool,
    #[serde(default)]
    pub supports_void: bool,
    #[serde(default)]
    pub recurring_payment_type: RecurringPaymentType,
    /// Admin route of the method's configuration page, if it has one
    #[serde(default)]
    pub configuration_url: Option<String>,
    /// Extension of the logo file shipped with the plugin
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub restricted_country_ids: HashSet<CountryId>,
}

/// Culture name of a language, e.g. `en-US`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Language(String);

impl Language {
    pub fn new(culture: impl Into<String>) -> Self {
        Self(culture.into())
    }

    pub fn culture(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, culture: &str) -> bool {
        self.0.eq_ignore_ascii_case(culture)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

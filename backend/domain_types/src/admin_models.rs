//! View models rendered by the admin payment pages.

use common_utils::consts;
use serde::{Deserialize, Serialize};

use crate::{
    payment_methods::{CountryId, PaymentMethodId},
    restriction::RestrictionMatrix,
};

/// Grid parameters of the payment method list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentMethodSearchModel {
    /// Zero based page index
    pub page_index: u32,
    pub page_size: u32,
    pub available_page_sizes: Vec<u32>,
}

impl Default for PaymentMethodSearchModel {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: consts::DEFAULT_GRID_PAGE_SIZE,
            available_page_sizes: Vec::new(),
        }
    }
}

/// A payment method row of the admin grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentMethodModel {
    pub id: PaymentMethodId,
    pub system_name: String,
    pub friendly_name: String,
    pub display_order: i32,
    pub is_active: bool,
    pub logo_url: Option<String>,
    pub configuration_url: Option<String>,
    pub supports_capture: bool,
    pub supports_partially_refund: bool,
    pub supports_refund: bool,
    pub supports_void: bool,
    /// Localized label of the recurring payment type
    pub recurring_payment_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PaymentMethodListModel {
    pub items: Vec<PaymentMethodModel>,
    pub total_count: usize,
}

/// Identity of a payment method as shown in the restriction table header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentMethodDisplayModel {
    pub id: PaymentMethodId,
    pub system_name: String,
    pub friendly_name: String,
    pub display_order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryModel {
    pub id: CountryId,
    pub name: String,
    pub published: bool,
}

/// Country restrictions of every payment method.
///
/// Clients post an empty placeholder; everything is filled in by the factory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodRestrictionModel {
    #[serde(skip_deserializing)]
    pub available_countries: Vec<CountryModel>,
    #[serde(skip_deserializing)]
    pub available_payment_methods: Vec<PaymentMethodDisplayModel>,
    #[serde(skip_deserializing)]
    pub restricted: RestrictionMatrix,
}

/// The payment methods page: the list grid and the restriction table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentMethodsModel {
    pub payment_methods: PaymentMethodSearchModel,
    pub payment_method_restriction: PaymentMethodRestrictionModel,
}

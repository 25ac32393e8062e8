//! Prepares the view models of the admin payment method pages.

use std::sync::Arc;

use common_enums::LocalizedEnum;
use common_utils::{CustomResult, PagedList};
use domain_types::{
    admin_models::{
        CountryModel, PaymentMethodDisplayModel, PaymentMethodListModel, PaymentMethodModel,
        PaymentMethodRestrictionModel, PaymentMethodSearchModel, PaymentMethodsModel,
    },
    errors::FactoryError,
    payment_methods::PaymentMethodDescriptor,
    restriction::RestrictionMatrix,
    types::{AdminAreaSettings, WorkContext},
    utils::ForeignFrom,
};
use error_stack::ResultExt;
use interfaces::{
    api::{ActiveMethodPolicy, AssetResolver, CountryService, LocalizationService, PaymentService},
    localization::LocalizedEnumExt,
};

use crate::{
    configs::Config,
    logger,
    services::{
        InMemoryCountryService, InMemoryLocalizationService, InMemoryPaymentService,
        PluginAssetResolver, SettingsActiveMethodPolicy,
    },
};

#[derive(Clone)]
pub struct PaymentModelFactory {
    country_service: Arc<dyn CountryService>,
    localization_service: Arc<dyn LocalizationService>,
    payment_service: Arc<dyn PaymentService>,
    asset_resolver: Arc<dyn AssetResolver>,
    active_method_policy: Arc<dyn ActiveMethodPolicy>,
    admin_area_settings: AdminAreaSettings,
}

impl PaymentModelFactory {
    pub fn new(
        country_service: Arc<dyn CountryService>,
        localization_service: Arc<dyn LocalizationService>,
        payment_service: Arc<dyn PaymentService>,
        asset_resolver: Arc<dyn AssetResolver>,
        active_method_policy: Arc<dyn ActiveMethodPolicy>,
        admin_area_settings: AdminAreaSettings,
    ) -> Self {
        Self {
            country_service,
            localization_service,
            payment_service,
            asset_resolver,
            active_method_policy,
            admin_area_settings,
        }
    }

    /// Factory backed by the in-memory services described in `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(InMemoryCountryService::new(config.catalog.countries.clone())),
            Arc::new(InMemoryLocalizationService::new(&config.localization)),
            Arc::new(InMemoryPaymentService::new(
                config.catalog.payment_methods.clone(),
            )),
            Arc::new(PluginAssetResolver),
            Arc::new(SettingsActiveMethodPolicy::new(
                config.payment_settings.clone(),
            )),
            config.admin_area.clone(),
        )
    }

    /// Prepare the payment methods page: grid parameters of the list and the restriction table.
    #[logger::instrument(skip_all)]
    pub fn prepare_payment_methods_model(
        &self,
        mut methods_model: PaymentMethodsModel,
    ) -> CustomResult<PaymentMethodsModel, FactoryError> {
        methods_model.payment_methods =
            self.prepare_payment_method_search_model(methods_model.payment_methods);
        methods_model.payment_method_restriction = self
            .prepare_payment_method_restriction_model(methods_model.payment_method_restriction)?;

        Ok(methods_model)
    }

    /// Reset the grid to its first page with the configured page sizes.
    pub fn prepare_payment_method_search_model(
        &self,
        mut search_model: PaymentMethodSearchModel,
    ) -> PaymentMethodSearchModel {
        search_model.page_index = 0;
        search_model.page_size = self.admin_area_settings.default_grid_page_size;
        search_model
            .available_page_sizes
            .clone_from(&self.admin_area_settings.grid_page_sizes);

        search_model
    }

    /// Prepare one page of the payment method grid.
    #[logger::instrument(
        skip_all,
        fields(
            page_index = search_model.page_index,
            page_size = search_model.page_size,
            language = %work_context.working_language,
        )
    )]
    pub fn prepare_payment_method_list_model(
        &self,
        search_model: &PaymentMethodSearchModel,
        work_context: &WorkContext,
    ) -> CustomResult<PaymentMethodListModel, FactoryError> {
        let payment_methods = self
            .payment_service
            .load_all_payment_methods()
            .change_context(FactoryError::PaymentMethodLookupFailed)?;

        let page = PagedList::new(
            payment_methods,
            search_model.page_index,
            search_model.page_size,
        );
        let total_count = page.total_count();

        let items = page
            .items()
            .iter()
            .map(|method| self.prepare_payment_method_model(method, work_context))
            .collect::<Result<Vec<_>, _>>()?;

        logger::debug!(total_count, rows = items.len(), "prepared payment method list");

        Ok(PaymentMethodListModel { items, total_count })
    }

    /// Prepare the restriction table of every payment method over every country, hidden ones
    /// included.
    #[logger::instrument(skip_all)]
    pub fn prepare_payment_method_restriction_model(
        &self,
        mut model: PaymentMethodRestrictionModel,
    ) -> CustomResult<PaymentMethodRestrictionModel, FactoryError> {
        let countries = self
            .country_service
            .get_all_countries(true)
            .change_context(FactoryError::CountryLookupFailed)?;
        let payment_methods = self
            .payment_service
            .load_all_payment_methods()
            .change_context(FactoryError::PaymentMethodLookupFailed)?;

        let mut restricted =
            RestrictionMatrix::builder(countries.iter().map(|country| country.id).collect());
        let mut available_payment_methods = Vec::with_capacity(payment_methods.len());

        for method in &payment_methods {
            available_payment_methods.push(PaymentMethodDisplayModel::foreign_from(method));

            let restricted_country_ids = self
                .payment_service
                .get_restricted_country_ids(method)
                .change_context_lazy(|| FactoryError::RestrictionLookupFailed {
                    system_name: method.system_name.clone(),
                })?;
            restricted.push_row(method.system_name.as_str(), &restricted_country_ids);
        }

        logger::debug!(
            countries = countries.len(),
            payment_methods = payment_methods.len(),
            "prepared payment method restrictions"
        );

        model.available_countries = countries.iter().map(CountryModel::foreign_from).collect();
        model.available_payment_methods = available_payment_methods;
        model.restricted = restricted.build();

        Ok(model)
    }

    fn prepare_payment_method_model(
        &self,
        method: &PaymentMethodDescriptor,
        work_context: &WorkContext,
    ) -> CustomResult<PaymentMethodModel, FactoryError> {
        let recurring_payment_type = self
            .localization_service
            .get_localized_enum(method.recurring_payment_type, &work_context.working_language)
            .change_context(FactoryError::LocalizationFailed {
                key: method.recurring_payment_type.localization_key(),
            })?;

        Ok(PaymentMethodModel {
            id: method.id,
            system_name: method.system_name.clone(),
            friendly_name: method.friendly_name.clone(),
            display_order: method.display_order,
            is_active: self.active_method_policy.is_active(method),
            logo_url: self
                .asset_resolver
                .logo_url(method, &work_context.store_location),
            configuration_url: method.configuration_url.clone(),
            supports_capture: method.supports_capture,
            supports_partially_refund: method.supports_partially_refund,
            supports_refund: method.supports_refund,
            supports_void: method.supports_void,
            recurring_payment_type,
        })
    }
}

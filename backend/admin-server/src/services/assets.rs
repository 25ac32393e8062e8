use common_utils::consts::{LOGO_FILE_STEM, PLUGINS_PATH_SEGMENT, SUPPORTED_LOGO_EXTENSIONS};
use domain_types::payment_methods::PaymentMethodDescriptor;
use interfaces::api::AssetResolver;

/// Serves plugin logos from `{store}/Plugins/{system_name}/logo.{ext}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PluginAssetResolver;

impl AssetResolver for PluginAssetResolver {
    fn logo_url(
        &self,
        method: &PaymentMethodDescriptor,
        store_location: &url::Url,
    ) -> Option<String> {
        let extension = method.logo.as_deref()?.trim_start_matches('.');
        if !SUPPORTED_LOGO_EXTENSIONS
            .iter()
            .any(|supported| supported.eq_ignore_ascii_case(extension))
        {
            tracing::warn!(
                system_name = %method.system_name,
                extension,
                "ignoring logo with unsupported extension"
            );
            return None;
        }

        let logo_file = format!("{LOGO_FILE_STEM}.{extension}");
        let mut url = store_location.clone();
        url.path_segments_mut().ok()?.pop_if_empty().extend([
            PLUGINS_PATH_SEGMENT,
            method.system_name.as_str(),
            logo_file.as_str(),
        ]);

        Some(url.into())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use common_enums::RecurringPaymentType;
    use domain_types::payment_methods::PaymentMethodId;

    use super::*;

    fn method(logo: Option<&str>) -> PaymentMethodDescriptor {
        PaymentMethodDescriptor {
            id: PaymentMethodId(1),
            system_name: "Payments.PayPal".to_string(),
            friendly_name: "PayPal".to_string(),
            display_order: 0,
            supports_capture: false,
            supports_partially_refund: false,
            supports_refund: false,
            supports_void: false,
            recurring_payment_type: RecurringPaymentType::NotSupported,
            configuration_url: None,
            logo: logo.map(str::to_string),
            restricted_country_ids: HashSet::new(),
        }
    }

    #[test]
    fn logo_url_is_built_under_the_plugin_directory() {
        let store = url::Url::parse("https://shop.example.com/").unwrap();

        assert_eq!(
            PluginAssetResolver.logo_url(&method(Some("png")), &store),
            Some("https://shop.example.com/Plugins/Payments.PayPal/logo.png".to_string())
        );
    }

    #[test]
    fn logo_url_keeps_the_store_path() {
        let store = url::Url::parse("https://example.com/shop/").unwrap();

        assert_eq!(
            PluginAssetResolver.logo_url(&method(Some(".gif")), &store),
            Some("https://example.com/shop/Plugins/Payments.PayPal/logo.gif".to_string())
        );
    }

    #[test]
    fn missing_or_unknown_logo_resolves_to_none() {
        let store = url::Url::parse("https://shop.example.com/").unwrap();

        assert_eq!(PluginAssetResolver.logo_url(&method(None), &store), None);
        assert_eq!(PluginAssetResolver.logo_url(&method(Some("exe")), &store), None);
    }
}

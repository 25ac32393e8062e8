use domain_types::{payment_methods::PaymentMethodDescriptor, types::PaymentSettings};
use interfaces::api::ActiveMethodPolicy;

/// A method is active unless an administrator listed it as disabled.
#[derive(Debug, Clone, Default)]
pub struct SettingsActiveMethodPolicy {
    settings: PaymentSettings,
}

impl SettingsActiveMethodPolicy {
    pub fn new(settings: PaymentSettings) -> Self {
        Self { settings }
    }
}

impl ActiveMethodPolicy for SettingsActiveMethodPolicy {
    fn is_active(&self, method: &PaymentMethodDescriptor) -> bool {
        !self
            .settings
            .is_payment_method_disabled(&method.system_name)
    }
}

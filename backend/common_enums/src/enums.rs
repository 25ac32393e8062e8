/// Whether a payment method can bill a customer repeatedly.
/// - `not_supported`: recurring payments are not available.
/// - `manual`: the merchant triggers every recurring charge.
/// - `automatic`: the payment gateway schedules recurring charges itself.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RecurringPaymentType {
    #[default]
    NotSupported,
    Manual,
    Automatic,
}

/// Enums that are shown to administrators through a localized label.
pub trait LocalizedEnum: Copy {
    /// Resource key of the label for this variant.
    fn localization_key(self) -> &'static str;
}

impl LocalizedEnum for RecurringPaymentType {
    fn localization_key(self) -> &'static str {
        match self {
            Self::NotSupported => "Enums.RecurringPaymentType.NotSupported",
            Self::Manual => "Enums.RecurringPaymentType.Manual",
            Self::Automatic => "Enums.RecurringPaymentType.Automatic",
        }
    }
}

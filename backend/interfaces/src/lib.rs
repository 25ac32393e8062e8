pub mod api;
pub mod localization;

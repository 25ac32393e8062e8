pub mod admin_models;
pub mod errors;
pub mod payment_methods;
pub mod restriction;
pub mod types;
pub mod utils;

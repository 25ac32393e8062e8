/// Name the service reports in logs
pub const SERVICE_NAME: &str = "payment_admin";

/// Prefix of environment variables overriding configuration values
pub const CONFIG_ENV_PREFIX: &str = "PA";

pub const HEALTH_RESPONSE: &str = "health is good";

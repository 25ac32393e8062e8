//! Consolidated constants for the payment admin service

// =============================================================================
// Environment
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Env {
    Development,
    Release,
}

impl Env {
    pub const fn current_env() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Release
        }
    }

    pub const fn config_path(self) -> &'static str {
        match self {
            Self::Development => "development.toml",
            Self::Release => "production.toml",
        }
    }
}

impl std::fmt::Display for Env {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Release => write!(f, "release"),
        }
    }
}

// =============================================================================
// HTTP Headers
// =============================================================================

/// Header key for request ID
pub const X_REQUEST_ID: &str = "x-request-id";

// =============================================================================
// Admin grid defaults
// =============================================================================

/// Page size used by admin grids when none is configured
pub const DEFAULT_GRID_PAGE_SIZE: u32 = 15;
/// Page sizes offered by admin grids when none are configured
pub const DEFAULT_GRID_PAGE_SIZES: [u32; 5] = [10, 15, 20, 50, 100];

// =============================================================================
// Plugin assets
// =============================================================================

/// Path segment under the store location where plugin assets are served
pub const PLUGINS_PATH_SEGMENT: &str = "Plugins";
/// File stem of a plugin logo
pub const LOGO_FILE_STEM: &str = "logo";
/// Logo extensions a plugin may ship
pub const SUPPORTED_LOGO_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

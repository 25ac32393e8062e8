pub mod error;
pub mod payment_methods;
pub mod state;

pub use error::HttpError;
pub use state::AppState;

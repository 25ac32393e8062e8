pub mod consts;
pub mod errors;
pub mod fp_utils;
pub mod pagination;

pub use errors::{CustomResult, ValidationError};
pub use pagination::PagedList;

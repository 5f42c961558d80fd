pub mod constants;
mod errors;
mod timeout;

pub use errors::{CiteError, CiteResult};
pub use timeout::{DEFAULT_NAVIGATION_TIMEOUT_MS, MAX_NAVIGATION_TIMEOUT_MS, validate_navigation_timeout};

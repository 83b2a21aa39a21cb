mod context;
mod error_body;
mod internal_error;

pub use context::Context;
pub use error_body::{ErrorBody, Sanitized, internal_error, not_found};
pub use internal_error::InternalError;

//! Wire-level protocol pieces shared by every endpoint.

pub mod constants;
pub mod envelope;

pub use constants::{DEFAULT_LIMIT, DEFAULT_OFFSET, RESULT_ERROR, RESULT_SUCCESS};
pub use envelope::Envelope;

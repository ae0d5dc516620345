pub mod errors;
pub mod goals;

pub use errors::{Error, Result};

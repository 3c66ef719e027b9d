pub mod errors;

pub use errors::{ConfigError, QuadstripError};

pub type Result<T> = std::result::Result<T, QuadstripError>;

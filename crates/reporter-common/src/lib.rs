pub mod errors;

pub use errors::{ConfigError, ConnectionError, ReporterError};

pub type Result<T> = std::result::Result<T, ReporterError>;

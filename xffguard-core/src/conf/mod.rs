mod error;
mod loader;
mod lower;
#[cfg(test)]
mod tests;
pub mod types;
pub mod validation;

pub use error::{ConfigError, config_error_hint};
pub use loader::{load_config, parse_config};
pub use lower::lower_spec;
pub use types::{Policy, SanitizerConfig, SanitizerSpec};
pub use validation::{ValidatedConfig, ValidationReport, validate_spec};

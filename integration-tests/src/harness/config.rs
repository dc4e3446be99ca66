use std::path::PathBuf;
use xffguard_core::conf::{ConfigError, ValidatedConfig, load_config};

pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

pub fn load_fixture(file: &str) -> Result<ValidatedConfig, ConfigError> {
    load_config(&fixture_path(file))
}

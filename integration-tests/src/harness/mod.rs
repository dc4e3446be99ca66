mod config;
pub mod pipeline;
pub mod tracing;

pub use config::{fixture_path, load_fixture};
pub use pipeline::{RewriteRun, run_pipeline};
pub use tracing::{CapturedEvent, capture_events};

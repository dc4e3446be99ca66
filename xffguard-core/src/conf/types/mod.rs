mod runtime;
mod spec;

pub use runtime::{Policy, SanitizerConfig};
pub use spec::{PolicyShape, SanitizerSpec};

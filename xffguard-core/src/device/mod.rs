pub mod builtin;
pub mod core;

pub use self::builtin::header_rewrite::{
    HeaderRewriteDevice, RewriteIssue, RewriteOutcome, RewriteState,
};
pub use self::core::pipeline::DevicePipeline;
pub use self::core::{Device, DeviceError, DeviceResult};

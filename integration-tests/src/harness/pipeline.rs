use std::sync::Arc;
use xffguard_core::conf::SanitizerConfig;
use xffguard_core::ctx::RequestCtx;
use xffguard_core::device::{
    Device, DevicePipeline, DeviceResult, HeaderRewriteDevice, RewriteOutcome,
};
use xffguard_core::headers::HeaderStore;

/// Everything a single pipeline pass produced.
pub struct RewriteRun {
    pub result: DeviceResult,
    pub outcome: Option<RewriteOutcome>,
}

/// Run `headers` through a pipeline holding one header rewrite device.
pub fn run_pipeline(config: &SanitizerConfig, headers: &mut dyn HeaderStore) -> RewriteRun {
    let devices: Vec<Arc<dyn Device>> = vec![Arc::new(HeaderRewriteDevice::from_config(config))];

    let mut ctx = RequestCtx::new(headers).with_request_id("integration");
    let result = DevicePipeline::run_on_request(&devices, &mut ctx);

    RewriteRun {
        result,
        outcome: ctx.extensions.remove::<RewriteOutcome>(),
    }
}

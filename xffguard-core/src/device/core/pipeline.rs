use super::{Device, DeviceResult};
use crate::ctx::RequestCtx;
use std::sync::Arc;

pub struct DevicePipeline;

impl DevicePipeline {
    /// Run every device in order. Degraded devices get their `on_error` hook
    /// called and the pipeline moves on; the first degradation is returned.
    pub fn run_on_request(devices: &[Arc<dyn Device>], ctx: &mut RequestCtx<'_>) -> DeviceResult {
        let mut first_error = None;

        for dev in devices {
            match dev.on_request(ctx) {
                DeviceResult::Continue => continue,
                DeviceResult::Degraded(err) => {
                    dev.on_error(&err);
                    if first_error.is_none() {
                        first_error = Some(err);
                    }
                }
            }
        }

        match first_error {
            Some(err) => DeviceResult::Degraded(err),
            None => DeviceResult::Continue,
        }
    }
}

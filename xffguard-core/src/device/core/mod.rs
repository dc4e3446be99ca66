pub mod errors;
pub mod pipeline;
pub mod result;

pub use self::errors::DeviceError;
pub use self::result::DeviceResult;
use crate::ctx::RequestCtx;

/// A processing unit plugged into a hosting runtime's request path.
///
/// Devices are built once from configuration and then shared read-only by
/// every request, hence `Send + Sync`.
///
/// Hooks default to doing nothing, so runtimes and devices only implement the
/// operations they actually use.
pub trait Device: Send + Sync {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Called once the full request header set is available.
    fn on_request(&self, _ctx: &mut RequestCtx<'_>) -> DeviceResult {
        DeviceResult::Continue
    }

    /// Called by the pipeline for every degraded result of this device.
    fn on_error(&self, _err: &DeviceError) {}
}

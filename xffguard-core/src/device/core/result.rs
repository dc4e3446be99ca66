use crate::device::core::errors::DeviceError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceResult {
    /// Continue to the next device
    Continue,

    /// The device did what it could; the request still continues
    Degraded(DeviceError),
}

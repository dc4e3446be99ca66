use std::fmt::{Display, Formatter};

/// A non-fatal problem a device hit while processing a request.
///
/// Devices never fail a request; this only records that their work may be
/// incomplete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceError {
    /// Name of the device that reported the error
    pub device: &'static str,
    /// A descriptive message explaining the error that occurred
    pub message: String,
}

impl DeviceError {
    pub fn new(device: &'static str, message: impl Into<String>) -> Self {
        Self {
            device,
            message: message.into(),
        }
    }
}

impl Display for DeviceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.device, self.message)
    }
}

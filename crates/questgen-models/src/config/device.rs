//! Compute device configuration.

use candle_core::Device;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ModelError, ModelResult};

fn default_prefer_gpu() -> bool {
    true
}

/// Device used for models whose placement is `Preferred`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Use CUDA when it is compiled in and a device is present.
    /// Default: true
    #[serde(default = "default_prefer_gpu")]
    pub prefer_gpu: bool,

    /// CUDA ordinal.
    /// Default: 0
    #[serde(default)]
    pub cuda_device_id: usize,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            prefer_gpu: default_prefer_gpu(),
            cuda_device_id: 0,
        }
    }
}

impl DeviceConfig {
    /// Validate the configuration. Every combination is currently valid.
    pub fn validate(&self) -> ModelResult<()> {
        Ok(())
    }

    /// Resolve the preferred device, falling back to CPU when CUDA is absent.
    ///
    /// # Errors
    /// - `ModelError::DeviceError` if CUDA is available but the device fails to initialize
    pub fn resolve(&self) -> ModelResult<Device> {
        if self.prefer_gpu && candle_core::utils::cuda_is_available() {
            let device =
                Device::new_cuda(self.cuda_device_id).map_err(|e| ModelError::DeviceError {
                    message: format!("CUDA device {} init failed: {}", self.cuda_device_id, e),
                })?;
            info!("Preferred device: CUDA {}", self.cuda_device_id);
            return Ok(device);
        }
        debug!(
            "Preferred device: CPU (prefer_gpu={}, cuda compiled in={})",
            self.prefer_gpu,
            candle_core::utils::cuda_is_available()
        );
        Ok(Device::Cpu)
    }
}

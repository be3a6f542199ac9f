//! Named weight tensors of a checkpoint.

use std::collections::HashMap;
use std::path::Path;

use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use tracing::debug;

use crate::error::{ModelError, ModelResult};

use super::files::WeightsFormat;

/// Every tensor of a checkpoint, resident on one device.
///
/// Tensors are reference counted, so cloning is cheap and shares storage.
#[derive(Debug, Clone)]
pub struct ModelWeights {
    tensors: HashMap<String, Tensor>,
    device: Device,
}

impl ModelWeights {
    /// Read a weight file onto `device`.
    ///
    /// # Errors
    /// - `ModelError::WeightsError` if the file cannot be decoded, a tensor
    ///   cannot be moved to `device`, or the file holds no tensors
    pub fn load(
        repo_id: &str,
        path: &Path,
        format: WeightsFormat,
        device: &Device,
    ) -> ModelResult<Self> {
        let err = |message: String| ModelError::WeightsError {
            repo_id: repo_id.to_string(),
            message,
        };

        let tensors = match format {
            WeightsFormat::SafeTensors => candle_core::safetensors::load(path, device)
                .map_err(|e| err(format!("{}: {}", path.display(), e)))?,
            WeightsFormat::Pickle => {
                // Pickles always decode to host memory first.
                let raw = candle_core::pickle::read_all(path)
                    .map_err(|e| err(format!("{}: {}", path.display(), e)))?;
                let mut tensors = HashMap::with_capacity(raw.len());
                for (name, tensor) in raw {
                    let tensor = tensor
                        .to_device(device)
                        .map_err(|e| err(format!("moving '{}' to device: {}", name, e)))?;
                    tensors.insert(name, tensor);
                }
                tensors
            }
        };

        if tensors.is_empty() {
            return Err(err(format!("{} contains no tensors", path.display())));
        }

        let weights = Self {
            tensors,
            device: device.clone(),
        };
        debug!(
            "{}: {} tensors, {} parameters, {} bytes",
            repo_id,
            weights.len(),
            weights.parameter_count(),
            weights.size_in_bytes()
        );
        Ok(weights)
    }

    /// Wrap tensors that are already in memory.
    ///
    /// # Errors
    /// - `ModelError::WeightsError` if `tensors` is empty
    pub fn from_tensors(
        repo_id: &str,
        tensors: HashMap<String, Tensor>,
        device: &Device,
    ) -> ModelResult<Self> {
        if tensors.is_empty() {
            return Err(ModelError::WeightsError {
                repo_id: repo_id.to_string(),
                message: "no tensors".to_string(),
            });
        }
        Ok(Self {
            tensors,
            device: device.clone(),
        })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tensors.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensors.is_empty()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Tensor> {
        self.tensors.get(name)
    }

    /// Total number of scalar parameters.
    #[must_use]
    pub fn parameter_count(&self) -> usize {
        self.tensors.values().map(Tensor::elem_count).sum()
    }

    /// Bytes occupied by all tensors at their stored dtype.
    #[must_use]
    pub fn size_in_bytes(&self) -> usize {
        self.tensors
            .values()
            .map(|t| t.elem_count() * t.dtype().size_in_bytes())
            .sum()
    }

    #[must_use]
    pub fn device(&self) -> &Device {
        &self.device
    }

    /// Copy every tensor to `device`.
    ///
    /// # Errors
    /// - `ModelError::DeviceError` if any transfer fails
    pub fn to_device(&self, device: &Device) -> ModelResult<Self> {
        let mut tensors = HashMap::with_capacity(self.tensors.len());
        for (name, tensor) in &self.tensors {
            let moved = tensor.to_device(device).map_err(|e| ModelError::DeviceError {
                message: format!("moving '{}': {}", name, e),
            })?;
            tensors.insert(name.clone(), moved);
        }
        Ok(Self {
            tensors,
            device: device.clone(),
        })
    }

    /// A [`VarBuilder`] over these tensors for building an architecture.
    #[must_use]
    pub fn var_builder(&self, dtype: DType) -> VarBuilder<'static> {
        VarBuilder::from_tensors(self.tensors.clone(), dtype, &self.device)
    }
}

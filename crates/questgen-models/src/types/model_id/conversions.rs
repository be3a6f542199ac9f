//! String conversions for ModelFamily.

use std::str::FromStr;

use crate::error::ModelError;

use super::family::ModelFamily;

impl FromStr for ModelFamily {
    type Err = ModelError;

    /// Accepts the short names (`en_qg`) with `-` or `_` separators, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        ModelFamily::all()
            .iter()
            .copied()
            .find(|family| family.as_str() == normalized)
            .ok_or_else(|| {
                let valid: Vec<&str> = ModelFamily::all().iter().map(|f| f.as_str()).collect();
                ModelError::config(format!(
                    "Unknown model family '{}'. Valid names: {:?}",
                    s, valid
                ))
            })
    }
}

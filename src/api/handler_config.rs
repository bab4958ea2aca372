use serde::{Deserialize, Serialize};

use crate::core::ScaleMode;
use crate::error::{PrepError, PrepResult};

/// Settings the data handler reads on every call.
///
/// This type is serializable so host applications can persist/load their
/// series preparation setup next to the rest of their chart configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerConfig {
    #[serde(default = "default_scale_mode")]
    pub scale_mode: ScaleMode,
    #[serde(default = "default_roll_period")]
    pub roll_period: usize,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            scale_mode: default_scale_mode(),
            roll_period: default_roll_period(),
        }
    }
}

impl HandlerConfig {
    #[must_use]
    pub fn new(scale_mode: ScaleMode) -> Self {
        Self {
            scale_mode,
            ..Self::default()
        }
    }

    /// Sets the vertical scale mode used for gap detection.
    #[must_use]
    pub fn with_scale_mode(mut self, scale_mode: ScaleMode) -> Self {
        self.scale_mode = scale_mode;
        self
    }

    /// Sets the trailing window length used for smoothing.
    #[must_use]
    pub fn with_roll_period(mut self, roll_period: usize) -> Self {
        self.roll_period = roll_period;
        self
    }

    pub fn validate(self) -> PrepResult<Self> {
        if self.roll_period == 0 {
            return Err(PrepError::InvalidWindow {
                window_size: self.roll_period,
            });
        }
        Ok(self)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> PrepResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| PrepError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> PrepResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| PrepError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()
    }
}

fn default_scale_mode() -> ScaleMode {
    ScaleMode::Linear
}

fn default_roll_period() -> usize {
    1
}

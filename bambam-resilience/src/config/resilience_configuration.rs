use serde::{Deserialize, Serialize};

use super::{AccessibilityConfig, DisruptionConfig, NetworkConstants, TopologyConfig};
use crate::{app::ResilienceAppError, model::network::NetworkError};

/// defines a resilience analysis run. only the `network` section is required.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct ResilienceConfiguration {
    pub network: NetworkConstants,
    #[serde(default)]
    pub topology: TopologyConfig,
    #[serde(default)]
    pub disruption: DisruptionConfig,
    #[serde(default)]
    pub accessibility: AccessibilityConfig,
}

impl ResilienceConfiguration {
    /// checks value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), NetworkError> {
        self.network.validate()?;
        self.topology.validate()?;
        self.disruption.validate()?;
        self.accessibility.validate()?;
        Ok(())
    }
}

impl TryFrom<&String> for ResilienceConfiguration {
    type Error = ResilienceAppError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let conf: ResilienceConfiguration = if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                ResilienceAppError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                ResilienceAppError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                ResilienceAppError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                ResilienceAppError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else {
            return Err(ResilienceAppError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )));
        };
        conf.validate()?;
        Ok(conf)
    }
}

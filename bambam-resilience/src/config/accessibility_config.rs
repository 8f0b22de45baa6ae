use serde::{Deserialize, Serialize};

use crate::model::{accessibility::RepresentativeOrigin, network::NetworkError};

#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct AccessibilityConfig {
    /// travel time budgets, in minutes
    pub time_thresholds_minutes: Vec<f64>,
    pub representative_origin: RepresentativeOrigin,
    /// area credited to each reachable station when no hull area is available
    pub station_area_proxy_km2: f64,
    pub parallelize: bool,
}

impl Default for AccessibilityConfig {
    fn default() -> Self {
        Self {
            time_thresholds_minutes: vec![20.0, 30.0, 45.0, 60.0],
            representative_origin: RepresentativeOrigin::default(),
            station_area_proxy_km2: 2.0,
            parallelize: true,
        }
    }
}

impl AccessibilityConfig {
    pub fn validate(&self) -> Result<(), NetworkError> {
        if let Some(t) = self
            .time_thresholds_minutes
            .iter()
            .find(|t| !t.is_finite() || **t <= 0.0)
        {
            return Err(NetworkError::InvalidConfiguration(format!(
                "accessibility.time_thresholds_minutes must be strictly positive, found {t}"
            )));
        }
        if !self.station_area_proxy_km2.is_finite() || self.station_area_proxy_km2 < 0.0 {
            return Err(NetworkError::InvalidConfiguration(format!(
                "accessibility.station_area_proxy_km2 must be non-negative, found {}",
                self.station_area_proxy_km2
            )));
        }
        Ok(())
    }
}

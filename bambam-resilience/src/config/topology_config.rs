use serde::{Deserialize, Serialize};

use crate::model::{
    network::NetworkError,
    topology::{BoardingsModel, ConnectivityVariant, CoverageVariant},
};

/// selects and parameterizes the topology indicators.
#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct TopologyConfig {
    /// coverage variant feeding the boardings model
    pub coverage: CoverageVariant,
    /// connectivity variant feeding the boardings model
    pub connectivity: ConnectivityVariant,
    /// walking catchment radius of a station, used by the station catchment coverage
    pub catchment_radius_km: f64,
    pub boardings: BoardingsModel,
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            coverage: CoverageVariant::default(),
            connectivity: ConnectivityVariant::default(),
            catchment_radius_km: 0.5,
            boardings: BoardingsModel::default(),
        }
    }
}

impl TopologyConfig {
    pub fn validate(&self) -> Result<(), NetworkError> {
        if !self.catchment_radius_km.is_finite() || self.catchment_radius_km <= 0.0 {
            return Err(NetworkError::InvalidConfiguration(format!(
                "topology.catchment_radius_km must be strictly positive, found {}",
                self.catchment_radius_km
            )));
        }
        let b = &self.boardings;
        if [b.sigma, b.tau, b.rho, b.intercept]
            .iter()
            .any(|c| !c.is_finite())
        {
            return Err(NetworkError::InvalidConfiguration(String::from(
                "topology.boardings coefficients must be finite",
            )));
        }
        Ok(())
    }
}

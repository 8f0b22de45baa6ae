use serde::{Deserialize, Serialize};

use super::Dual;

/// linear model of annual boardings per capita from the three topology
/// indicators. defaults are the Derrible & Kennedy fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardingsModel {
    pub sigma: f64,
    pub tau: f64,
    pub rho: f64,
    pub intercept: f64,
}

impl Default for BoardingsModel {
    fn default() -> Self {
        Self {
            sigma: 44.963,
            tau: 7.579,
            rho: 92.316,
            intercept: 102.947,
        }
    }
}

impl BoardingsModel {
    pub fn predict(&self, sigma: f64, tau: f64, rho: f64) -> f64 {
        self.sigma * sigma + self.tau * tau + self.rho * rho + self.intercept
    }

    /// predicted boardings under both directness interpretations.
    pub fn predict_dual(&self, sigma: f64, tau: Dual<f64>, rho: f64) -> Dual<f64> {
        tau.map(|t| self.predict(sigma, t, rho))
    }
}

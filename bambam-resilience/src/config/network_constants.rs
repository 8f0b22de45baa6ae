use serde::{Deserialize, Serialize};

use crate::model::network::{network_ops, GraphSnapshot, NetworkError, TransitGraph};

/// per-city constants supplied alongside the network document.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct NetworkConstants {
    /// resident population served by the network
    pub population: f64,
    /// serving area used by the coverage indicators, in square kilometers
    pub area_km2: f64,
    /// city area used by the accessibility indicators. defaults to `area_km2`.
    #[serde(default)]
    pub city_area_km2: Option<f64>,
    /// published route length. defaults to the geometric length of the lines.
    #[serde(default)]
    pub route_length_km: Option<f64>,
    /// running speed used to estimate segments without an observed travel time
    #[serde(default)]
    pub fallback_speed_kmh: Option<f64>,
}

impl NetworkConstants {
    pub fn get_city_area_km2(&self) -> f64 {
        self.city_area_km2.unwrap_or(self.area_km2)
    }

    /// population in millions, the unit used by the per-capita indicators.
    pub fn population_millions(&self) -> f64 {
        self.population / 1e6
    }

    /// the configured route length, or the geometric route length of the
    /// intact network when none is configured.
    pub fn get_route_length_km(&self, graph: &TransitGraph) -> Result<f64, NetworkError> {
        match self.route_length_km {
            Some(length) => Ok(length),
            None => {
                let runs = GraphSnapshot::full(graph).line_runs();
                network_ops::route_length_km(graph, &runs)
            }
        }
    }

    pub fn validate(&self) -> Result<(), NetworkError> {
        let positive = [
            ("network.population", Some(self.population)),
            ("network.area_km2", Some(self.area_km2)),
            ("network.city_area_km2", self.city_area_km2),
            ("network.route_length_km", self.route_length_km),
            ("network.fallback_speed_kmh", self.fallback_speed_kmh),
        ];
        for (name, value) in positive.into_iter() {
            if let Some(v) = value {
                if !v.is_finite() || v <= 0.0 {
                    return Err(NetworkError::InvalidConfiguration(format!(
                        "{name} must be strictly positive, found {v}"
                    )));
                }
            }
        }
        Ok(())
    }
}

use serde::{Deserialize, Serialize};

/// reachable area normalized by network size, population and city area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyIndicators {
    /// isochrone efficiency, IE = A / L
    pub isochrone_efficiency: f64,
    /// per capita accessibility, PCA = A / (P / 1e6)
    pub per_capita_area: f64,
    /// density-normalized coverage, DNC = (A / A_city) / (L / (P / 1e6))
    pub density_normalized_coverage: f64,
    /// spatial mobility efficiency, SME = A / (L × P / 1e6)
    pub spatial_mobility_efficiency: f64,
}

impl EfficiencyIndicators {
    /// # Arguments
    ///
    /// * `area_km2` - reachable area A
    /// * `route_length_km` - track length L
    /// * `population` - served population P
    /// * `city_area_km2` - city area A_city
    pub fn new(
        area_km2: f64,
        route_length_km: f64,
        population: f64,
        city_area_km2: f64,
    ) -> EfficiencyIndicators {
        let population_millions = population / 1e6;
        EfficiencyIndicators {
            isochrone_efficiency: area_km2 / route_length_km,
            per_capita_area: area_km2 / population_millions,
            density_normalized_coverage: (area_km2 / city_area_km2)
                / (route_length_km / population_millions),
            spatial_mobility_efficiency: area_km2 / (route_length_km * population_millions),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values() {
        let e = EfficiencyIndicators::new(100.0, 200.0, 5_000_000.0, 700.0);
        assert!((e.isochrone_efficiency - 0.5).abs() < 1e-12);
        assert!((e.per_capita_area - 20.0).abs() < 1e-12);
        assert!((e.spatial_mobility_efficiency - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_dnc_is_scaled_ie() {
        for (a, l, p, c) in [
            (100.0, 200.0, 5_000_000.0, 700.0),
            (3.5, 42.0, 850_000.0, 120.0),
            (812.0, 230.0, 5_453_600.0, 734.3),
        ] {
            let e = EfficiencyIndicators::new(a, l, p, c);
            let expected = e.isochrone_efficiency * (p / 1e6) / c;
            assert!((e.density_normalized_coverage - expected).abs() < 1e-9);
        }
    }
}

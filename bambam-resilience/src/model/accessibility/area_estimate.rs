use geo::{ChamberlainDuquetteArea, ConvexHull, MultiPoint, Point, Polygon};

use super::AreaMethod;

/// hulls smaller than this are degenerate, e.g. stations along one straight line.
const MIN_HULL_AREA_KM2: f64 = 1e-9;

/// area reachable from a station within a time budget.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaEstimate {
    pub area_km2: f64,
    pub method: AreaMethod,
    /// the hull, when the hull area was used
    pub hull: Option<Polygon<f64>>,
}

impl AreaEstimate {
    /// estimates the area spanned by a set of reachable station coordinates.
    /// with fewer than three points, or a hull of zero area, each station is
    /// credited a fixed proxy area instead.
    ///
    /// # Arguments
    ///
    /// * `points` - WGS84 coordinates of the reachable stations
    /// * `station_area_proxy_km2` - area credited per station by the fallback
    pub fn from_points(points: Vec<Point<f64>>, station_area_proxy_km2: f64) -> AreaEstimate {
        let n_points = points.len();
        if n_points >= 3 {
            let hull = MultiPoint(points).convex_hull();
            let area_km2 = hull.chamberlain_duquette_unsigned_area() / 1e6;
            if area_km2.is_finite() && area_km2 > MIN_HULL_AREA_KM2 {
                return AreaEstimate {
                    area_km2,
                    method: AreaMethod::ConvexHull,
                    hull: Some(hull),
                };
            }
        }
        AreaEstimate::proxy(n_points, station_area_proxy_km2)
    }

    pub fn proxy(n_points: usize, station_area_proxy_km2: f64) -> AreaEstimate {
        AreaEstimate {
            area_km2: n_points as f64 * station_area_proxy_km2,
            method: AreaMethod::StationProxy,
            hull: None,
        }
    }
}

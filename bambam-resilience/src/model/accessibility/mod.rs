mod accessibility_metrics;
pub mod accessibility_ops;
mod area_estimate;
mod area_method;
mod efficiency_indicators;
mod representative_origin;
pub mod shortest_path_ops;

pub use accessibility_metrics::AccessibilityMetrics;
pub use area_estimate::AreaEstimate;
pub use area_method::AreaMethod;
pub use efficiency_indicators::EfficiencyIndicators;
pub use representative_origin::{median_count, RepresentativeOrigin};

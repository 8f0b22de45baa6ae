mod accessibility_config;
mod disruption_config;
mod network_constants;
mod resilience_configuration;
mod topology_config;

pub use accessibility_config::AccessibilityConfig;
pub use disruption_config::DisruptionConfig;
pub use network_constants::NetworkConstants;
pub use resilience_configuration::ResilienceConfiguration;
pub use topology_config::TopologyConfig;

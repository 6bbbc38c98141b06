use std::collections::HashMap;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use serde::Deserialize;

use crate::core::Endpoint;
use crate::error::ConfigError;
use crate::load::{Snapshot, DEFAULT_WEIGHT};

/// A set of endpoints and the load they carry, as read from a JSON file.
///
/// ```json
/// {
///   "method": "sayHello",
///   "endpoints": [
///     { "addr": "10.0.0.1:20880", "weight": 50, "active": { "sayHello": 2 } },
///     { "addr": "10.0.0.2:20880" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    /// Method every simulated call invokes
    pub method: String,
    pub endpoints: Vec<EndpointConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EndpointConfig {
    pub addr: SocketAddr,
    /// Effective weight. Unconfigured endpoints get the default weight.
    #[serde(default = "default_weight")]
    pub weight: u32,
    /// Active calls per method. Methods not listed are idle.
    #[serde(default)]
    pub active: HashMap<String, u32>,
}

fn default_weight() -> u32 {
    DEFAULT_WEIGHT
}

impl Scenario {
    pub fn load(path: impl AsRef<Path>) -> Result<Scenario, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Scenario::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Scenario, ConfigError> {
        let scenario: Scenario = serde_json::from_str(raw)?;
        if scenario.endpoints.is_empty() {
            return Err(ConfigError::Empty);
        }
        Ok(scenario)
    }

    /// Candidate list in file order
    pub fn snapshots(&self) -> Vec<Snapshot<Endpoint>> {
        self.endpoints
            .iter()
            .map(|config| {
                config.active.iter().fold(
                    Snapshot::new(Endpoint::new(config.addr)).with_weight(config.weight),
                    |snapshot, (method, count)| snapshot.with_active(method.clone(), *count),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Invocation;
    use crate::load::{Load, Weighted};

    #[test]
    fn parses_scenario_with_defaults() {
        let scenario = Scenario::parse(
            r#"{
                "method": "sayHello",
                "endpoints": [
                    { "addr": "10.0.0.1:20880", "weight": 50, "active": { "sayHello": 2 } },
                    { "addr": "10.0.0.2:20880" }
                ]
            }"#,
        )
        .unwrap();

        let snapshots = scenario.snapshots();
        let invocation = Invocation::new("sayHello");
        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[0].addr, "10.0.0.1:20880".parse().unwrap());
        assert_eq!(snapshots[0].active("sayHello"), 2);
        assert_eq!(snapshots[0].weight(&invocation), 50);
        assert_eq!(snapshots[1].active("sayHello"), 0);
        assert_eq!(snapshots[1].weight(&invocation), DEFAULT_WEIGHT);
    }

    #[test]
    fn rejects_empty_endpoint_list() {
        let err = Scenario::parse(r#"{ "method": "m", "endpoints": [] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Empty));
    }

    #[test]
    fn rejects_negative_counts() {
        let err = Scenario::parse(
            r#"{ "method": "m", "endpoints": [{ "addr": "10.0.0.1:1", "active": { "m": -1 } }] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Scenario::load("/nonexistent/scenario.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/scenario.json"));
    }
}

//! Opt-in validation and behaviour switches for the algorithms.
//!
//! The defaults give the classical textbook semantics: Dijkstra trusts that weights are
//! non-negative, Prim trusts that the graph is undirected and returns the spanning tree of
//! whichever component contains the start vertex. Turning a check on converts the
//! corresponding precondition violation into a typed [`Error`](crate::errors::Error).

/// Algorithm configuration.
///
/// With the `serialize` feature, missing fields deserialize to their defaults:
///
/// ```
/// # #[cfg(feature = "serialize")]
/// # {
/// use wayfind_graph::Config;
///
/// let config = Config::from_json(r#"{ "check_non_negative": true }"#).unwrap();
/// assert!(config.check_non_negative);
/// assert!(!config.early_exit);
/// # }
/// ```
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct Config {
    /// Reject graphs with negative edge weights before running Dijkstra or A*.
    pub check_non_negative: bool,
    /// Reject graphs whose edges are not all mirrored with an equal weight before running Prim.
    pub check_symmetric: bool,
    /// Reject Prim runs whose start vertex cannot reach every vertex of the graph.
    pub check_connected: bool,
    /// Stop Bellman-Ford relaxation passes as soon as a full pass improves nothing.
    ///
    /// Distances and cycle detection are unaffected; only the number of passes changes.
    pub early_exit: bool,
}

impl Config {
    /// Configuration with every validation enabled.
    pub const fn strict() -> Self {
        Self {
            check_non_negative: true,
            check_symmetric: true,
            check_connected: true,
            early_exit: false,
        }
    }

    /// Returns this configuration with [`Config::check_non_negative`] set.
    pub const fn with_non_negative_check(mut self, enabled: bool) -> Self {
        self.check_non_negative = enabled;
        self
    }

    /// Returns this configuration with [`Config::check_symmetric`] set.
    pub const fn with_symmetric_check(mut self, enabled: bool) -> Self {
        self.check_symmetric = enabled;
        self
    }

    /// Returns this configuration with [`Config::check_connected`] set.
    pub const fn with_connected_check(mut self, enabled: bool) -> Self {
        self.check_connected = enabled;
        self
    }

    /// Returns this configuration with [`Config::early_exit`] set.
    pub const fn with_early_exit(mut self, enabled: bool) -> Self {
        self.early_exit = enabled;
        self
    }

    /// Parses a configuration from a JSON document.
    #[cfg(feature = "serialize")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes this configuration into a JSON document.
    #[cfg(feature = "serialize")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_permissive() {
        let config = Config::default();
        assert!(!config.check_non_negative);
        assert!(!config.check_symmetric);
        assert!(!config.check_connected);
        assert!(!config.early_exit);
    }

    #[test]
    fn test_builder_methods() {
        let config = Config::default()
            .with_symmetric_check(true)
            .with_early_exit(true);
        assert_eq!(
            Config {
                check_symmetric: true,
                early_exit: true,
                ..Config::default()
            },
            config
        );
        assert_eq!(Config::strict(), config.with_early_exit(false).with_non_negative_check(true).with_connected_check(true));
    }

    #[cfg(feature = "serialize")]
    #[test]
    fn test_json_defaults_missing_fields() {
        let config = Config::from_json(r#"{ "early_exit": true }"#).unwrap();
        assert_eq!(Config::default().with_early_exit(true), config);
        assert!(Config::from_json(r#"{ "early_exit": 3 }"#).is_err());
    }
}

use std::time::Duration;

use serde::{Deserialize, Serialize};

use local_search::LocalSearchKind;
use model::PfspError;

/// Which pheromone-update discipline to run. `MMmas` is the "modified
/// MMAS" preset from spec.md §6 — same [`Mmas`](crate::Mmas) policy, a
/// different `n_ants`/`rho` default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    Mmas,
    MMmas,
    Paco,
}

/// Hyperparameters for one ACO run. A plain data type: loading it from a
/// file or CLI flags is a collaborator's job, out of scope here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcoConfig {
    pub method: Method,
    pub n_ants: usize,
    pub rho: f64,
    pub local_search: LocalSearchKind,
    pub seed: Option<u64>,
    pub max_n_iterations: Option<u64>,
    pub early_stopping: Option<u64>,
    pub max_time: Option<Duration>,
}

impl AcoConfig {
    /// Defaults for `method`, per the CLI defaults table in spec.md §6.
    pub fn for_method(method: Method) -> AcoConfig {
        let (n_ants, rho) = match method {
            Method::Mmas => (22, 0.23),
            Method::MMmas => (34, 0.3),
            Method::Paco => (50, 0.4),
        };
        AcoConfig {
            method,
            n_ants,
            rho,
            local_search: LocalSearchKind::None,
            seed: None,
            max_n_iterations: None,
            early_stopping: None,
            max_time: Some(Duration::from_secs(30)),
        }
    }

    /// Rejects non-positive `n_ants` and `rho` outside `(0, 1)`, the
    /// configuration errors named in spec.md §7.
    pub fn validate(&self) -> Result<(), PfspError> {
        if self.n_ants == 0 {
            return Err(PfspError::Configuration {
                reason: "n_ants must be positive".to_string(),
            });
        }
        if !(self.rho > 0.0 && self.rho < 1.0) {
            return Err(PfspError::Configuration {
                reason: format!("rho must lie in (0, 1), got {}", self.rho),
            });
        }
        Ok(())
    }
}

impl Default for AcoConfig {
    fn default() -> AcoConfig {
        AcoConfig::for_method(Method::Mmas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_defaults_match_the_cli_table() {
        assert_eq!(AcoConfig::for_method(Method::Mmas).n_ants, 22);
        assert_eq!(AcoConfig::for_method(Method::MMmas).n_ants, 34);
        assert_eq!(AcoConfig::for_method(Method::Paco).n_ants, 50);
        assert_eq!(AcoConfig::for_method(Method::Paco).rho, 0.4);
    }

    #[test]
    fn rejects_non_positive_n_ants() {
        let mut config = AcoConfig::default();
        config.n_ants = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_rho_outside_unit_interval() {
        let mut config = AcoConfig::default();
        config.rho = 1.5;
        assert!(config.validate().is_err());

        config.rho = 0.0;
        assert!(config.validate().is_err());
    }
}

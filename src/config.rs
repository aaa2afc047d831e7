use crate::errors::{GoodiesError, Result};
use std::collections::HashMap;
use std::env;
use std::time::Duration;

/// How long a launch blocks while the explorer process starts.
pub const DEFAULT_WAIT: Duration = Duration::from_secs(1);

/// Environment variable overriding the wait, in milliseconds.
pub const WAIT_ENV_VAR: &str = "FILE_GOODIES_EXPLORER_WAIT_MS";

type EnvVarMap = HashMap<String, String>;

/// Launcher settings fixed at construction time.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ExplorerConfig {
    pub wait: Duration,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self { wait: DEFAULT_WAIT }
    }
}

impl ExplorerConfig {
    pub fn with_wait(mut self, wait: Duration) -> Self {
        self.wait = wait;
        self
    }

    /// Reads overrides from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_env_map(&env::vars().collect::<EnvVarMap>())
    }

    pub fn from_env_map(environ: &EnvVarMap) -> Result<Self> {
        let mut config = Self::default();
        if let Some(raw) = environ.get(WAIT_ENV_VAR) {
            let millis = raw.trim().parse::<u64>().map_err(|err| {
                GoodiesError::invalid_config(format!("{WAIT_ENV_VAR}={raw:?}: {err}"))
            })?;
            config.wait = Duration::from_millis(millis);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn environ(pairs: &[(&str, &str)]) -> EnvVarMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_to_one_second() {
        let config = ExplorerConfig::from_env_map(&EnvVarMap::new()).unwrap();
        assert_eq!(config.wait, Duration::from_secs(1));
    }

    #[test]
    fn reads_wait_override() {
        let config = ExplorerConfig::from_env_map(&environ(&[(WAIT_ENV_VAR, " 250 ")])).unwrap();
        assert_eq!(config.wait, Duration::from_millis(250));
    }

    #[test]
    fn rejects_non_numeric_wait() {
        let err = ExplorerConfig::from_env_map(&environ(&[(WAIT_ENV_VAR, "soon")])).unwrap_err();
        assert!(matches!(err, GoodiesError::InvalidConfig(_)));
        assert!(err.to_string().contains(WAIT_ENV_VAR));
    }
}

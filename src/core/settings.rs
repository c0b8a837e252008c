use super::agent::{
    Agent, API_KEY_VARS, BASE_URL_VAR, DEFAULT_BASE_URL, DEFAULT_MAX_ITERATIONS, DEFAULT_MODEL,
    DEFAULT_TIMEOUT, MODEL_VAR,
};
use crate::{
    error::{AgentError, Result},
    tools::FunctionFactory,
};
use std::time::Duration;

/// Explicitly given values, e.g. from command-line flags; `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub timeout: Option<Duration>,
    pub max_iterations: Option<usize>,
}

/// Agent settings after applying override > environment > default precedence.
///
/// Blank strings count as "not given" at every level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
    pub max_iterations: usize,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

impl Settings {
    /// Resolve settings, reading the environment through `env`.
    pub fn resolve<F>(overrides: Overrides, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let from_env = |name: &str| non_blank(env(name));

        let api_key = non_blank(overrides.api_key)
            .or_else(|| API_KEY_VARS.iter().find_map(|name| from_env(*name)))
            .ok_or_else(|| {
                AgentError::Config(format!(
                    "An API key is required. Set {} or use --api-key",
                    API_KEY_VARS.join(" / ")
                ))
            })?;

        let max_iterations = overrides.max_iterations.unwrap_or(DEFAULT_MAX_ITERATIONS);
        if max_iterations == 0 {
            return Err(AgentError::Config(
                "--max-iterations must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            api_key,
            base_url: non_blank(overrides.base_url)
                .or_else(|| from_env(BASE_URL_VAR))
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: non_blank(overrides.model)
                .or_else(|| from_env(MODEL_VAR))
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            timeout: overrides.timeout.unwrap_or(DEFAULT_TIMEOUT),
            max_iterations,
        })
    }

    pub fn from_process_env(overrides: Overrides) -> Result<Self> {
        Self::resolve(overrides, |name| std::env::var(name).ok())
    }

    pub fn build_agent(self, function_factory: FunctionFactory) -> Agent {
        Agent::new(self.api_key, function_factory)
            .with_base_url(self.base_url)
            .with_model(self.model)
            .with_timeout(self.timeout)
            .with_max_iterations(self.max_iterations)
    }
}

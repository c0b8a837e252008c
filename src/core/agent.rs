use super::settings::{Overrides, Settings};
use crate::{error::Result, services::openai_client::OpenAIClient, tools::FunctionFactory};

pub use crate::services::openai_client::DEFAULT_BASE_URL;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

pub const DEFAULT_SYSTEM_PROMPT: &str = "Responda as perguntas de maneira formal e com vocabulário de advogados. Quando possível utilize o formato markdown nas respostas.";

/// Environment variables consulted for the API key, in order.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "OPENAI_API_KEY"];
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
pub const MODEL_VAR: &str = "LEGAL_AGENT_MODEL";

pub const DEFAULT_MAX_ITERATIONS: usize = 10;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Tool-calling agent bound to one chat-completions endpoint
#[derive(Debug)]
pub struct Agent {
    openai_client: OpenAIClient,
    function_factory: FunctionFactory,
    model: String,
    system_prompt: String,
    max_iterations: usize,
    max_tokens: Option<u32>,
    timeout: Duration,
}

impl Agent {
    pub fn new(api_key: String, function_factory: FunctionFactory) -> Self {
        Self {
            openai_client: OpenAIClient::new(api_key),
            function_factory,
            model: DEFAULT_MODEL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_tokens: Some(2048),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Build an agent from `GEMINI_API_KEY`/`OPENAI_API_KEY`, `OPENAI_BASE_URL`
    /// and `LEGAL_AGENT_MODEL`, with the same rules as the CLI.
    pub fn from_env(function_factory: FunctionFactory) -> Result<Self> {
        Ok(Settings::from_process_env(Overrides::default())?.build_agent(function_factory))
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.openai_client.set_base_url(base_url);
        self
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = system_prompt.into();
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn base_url(&self) -> &str {
        self.openai_client.base_url()
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn function_factory(&self) -> &FunctionFactory {
        &self.function_factory
    }

    pub(crate) fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub(crate) fn max_tokens(&self) -> Option<u32> {
        self.max_tokens
    }

    pub(crate) fn timeout(&self) -> Duration {
        self.timeout
    }

    pub(crate) fn openai_client(&self) -> &OpenAIClient {
        &self.openai_client
    }

    /// Answer a single question and return the final text
    pub async fn run(&self, prompt: &str) -> Result<String> {
        self.run_with_steps(prompt).await.map(|result| result.output)
    }
}

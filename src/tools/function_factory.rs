use super::{tool::ToolRegistry, Tool};
use crate::{schemas::validation::validate_arguments, AgentError, Result};
use serde_json::Value;
use tracing::debug;

/// Factory for creating and managing function/tool execution
#[derive(Debug, Default)]
pub struct FunctionFactory {
    registry: ToolRegistry,
}

impl FunctionFactory {
    pub fn new() -> Self {
        Self {
            registry: ToolRegistry::new(),
        }
    }

    /// Register a tool with the factory
    pub fn register_tool<T: Tool + 'static>(&mut self, tool: T) {
        self.registry.register(tool);
    }

    /// Execute a function call by name.
    ///
    /// Arguments are checked against the tool's parameter schema before the
    /// tool runs.
    pub async fn execute_function(&self, function_name: &str, parameters: Value) -> Result<Value> {
        let tool = self
            .registry
            .get(function_name)
            .ok_or_else(|| AgentError::ToolNotFound(function_name.to_string()))?;

        validate_arguments(tool.name(), &tool.parameters_schema(), &parameters)?;

        debug!(target: "legal_date_agent::tools", tool = function_name, %parameters, "dispatching tool");
        tool.execute(parameters).await
    }

    /// Get all available tools for OpenAI function calling
    pub fn get_openai_tools(&self) -> Vec<Value> {
        self.registry.to_openai_tools()
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.registry.get(name).is_some()
    }
}

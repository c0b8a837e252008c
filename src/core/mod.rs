pub mod agent;
pub mod memory;
pub mod settings;
pub mod steps;

pub use crate::types::result::{RunResult, TokenUsage};
pub use agent::{Agent, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_SYSTEM_PROMPT};
pub use memory::AgentMemory;
pub use settings::{Overrides, Settings};
pub use steps::AgentStep;

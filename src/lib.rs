//! legal-date-agent: an LLM agent that answers Brazilian legal date questions
//!
//! The model is given five date-arithmetic tools (day counts, durations, date
//! differences, date shifts and sentence-reduction fractions) and answers in
//! formal Portuguese. The arithmetic itself lives in [`calc`] and is usable
//! without any agent.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use legal_date_agent::{tools::register_date_tools, Agent, FunctionFactory};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut function_factory = FunctionFactory::new();
//!     register_date_tools(&mut function_factory);
//!
//!     let agent = Agent::from_env(function_factory)?;
//!
//!     let response = agent.run("Quantos dias tem em 1 ano e 4 meses?").await?;
//!     println!("{}", response);
//!     Ok(())
//! }
//! ```

extern crate self as legal_date_agent;

pub mod calc;
pub mod core;
pub mod error;
pub(crate) mod schemas;
pub(crate) mod services;
pub mod tools;
pub mod types;

pub use calc::CalcError;
pub use self::core::{
    Agent, AgentMemory, AgentStep, RunResult, TokenUsage, DEFAULT_BASE_URL, DEFAULT_MODEL,
    DEFAULT_SYSTEM_PROMPT,
};
pub use error::{AgentError, Result};
pub use legal_date_macros::plain_tool;
pub use tools::{FunctionFactory, Tool};

pub use self::core as agent;

#[cfg(feature = "cli")]
pub mod cli;

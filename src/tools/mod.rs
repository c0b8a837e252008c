//! Tools module containing the tool abstraction, the registry and the date tools

pub mod date_tools;
pub mod function_factory;
pub mod tool;

pub use date_tools::{
    register_date_tools, DateDifferenceTool, DaysFromDurationTool, DurationFromDaysTool,
    FractionAndPercentageTool, ShiftDateTool,
};
pub use function_factory::FunctionFactory;
pub use tool::{Tool, ToolRegistry};

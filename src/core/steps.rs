use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Represents a single step in the agent's reasoning process
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AgentStep {
    /// Question provided by the user
    Task { content: String },
    /// The model asked for a tool call
    Action {
        tool_name: String,
        tool_call_id: String,
        arguments: Value,
    },
    /// Result of a tool execution, fed back to the model
    Observation {
        tool_call_id: String,
        result: String,
        is_error: bool,
    },
    /// Nudge sent when the model replied with neither text nor tool calls
    Reminder { content: String },
    /// Final answer from the agent
    FinalAnswer { answer: String },
}

impl AgentStep {
    /// Convert step to OpenAI message format
    pub fn to_message(&self) -> Value {
        match self {
            AgentStep::Task { content } | AgentStep::Reminder { content } => {
                serde_json::json!({
                    "role": "user",
                    "content": content
                })
            }
            AgentStep::Action {
                tool_name,
                tool_call_id,
                arguments,
            } => {
                let encoded = match arguments {
                    Value::String(raw) => raw.clone(),
                    other => other.to_string(),
                };
                serde_json::json!({
                    "role": "assistant",
                    "content": null,
                    "tool_calls": [{
                        "id": tool_call_id,
                        "type": "function",
                        "function": {
                            "name": tool_name,
                            "arguments": encoded
                        }
                    }]
                })
            }
            AgentStep::Observation {
                tool_call_id,
                result,
                ..
            } => {
                serde_json::json!({
                    "role": "tool",
                    "tool_call_id": tool_call_id,
                    "content": result
                })
            }
            AgentStep::FinalAnswer { answer } => {
                serde_json::json!({
                    "role": "assistant",
                    "content": answer
                })
            }
        }
    }

    /// Get a human-readable description of the step
    pub fn describe(&self) -> String {
        match self {
            AgentStep::Task { content } => format!("🧭 Task: {}", content),
            AgentStep::Action {
                tool_name,
                arguments,
                ..
            } => {
                format!("🔧 Action: {}({})", tool_name, arguments)
            }
            AgentStep::Observation {
                result, is_error, ..
            } => {
                if *is_error {
                    format!("❌ Error: {}", result)
                } else {
                    format!("👁 Observation: {}", result)
                }
            }
            AgentStep::Reminder { content } => format!("⏰ Reminder: {}", content),
            AgentStep::FinalAnswer { answer } => format!("✅ Final Answer: {}", answer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_action_message_encodes_arguments_as_string() {
        let step = AgentStep::Action {
            tool_name: "diferenca_entre_datas".to_string(),
            tool_call_id: "call_1".to_string(),
            arguments: json!({"data1": "01-01-2020", "data2": "01-01-2021"}),
        };

        let message = step.to_message();
        assert_eq!(message["role"], "assistant");
        assert_eq!(message["tool_calls"][0]["id"], "call_1");
        let arguments = message["tool_calls"][0]["function"]["arguments"]
            .as_str()
            .unwrap();
        assert!(arguments.contains("\"data1\":\"01-01-2020\""));
    }

    #[test]
    fn test_observation_message() {
        let step = AgentStep::Observation {
            tool_call_id: "call_1".to_string(),
            result: "366".to_string(),
            is_error: false,
        };

        let message = step.to_message();
        assert_eq!(message["role"], "tool");
        assert_eq!(message["content"], "366");
        assert!(step.describe().starts_with("👁"));
    }

    #[test]
    fn test_step_serializes_with_type_tag() {
        let step = AgentStep::FinalAnswer {
            answer: "485 dias".to_string(),
        };
        let value = serde_json::to_value(&step).unwrap();
        assert_eq!(value["type"], "final_answer");
    }
}

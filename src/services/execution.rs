use crate::{
    core::{agent::Agent, memory::AgentMemory, steps::AgentStep},
    error::{AgentError, Result},
    services::{
        openai_client::ChatCompletionRequest,
        tool_call_utils::{
            extract_function_name, extract_message_text, extract_tool_call_id,
            parse_function_arguments, raw_arguments,
        },
    },
    types::result::{RunResult, TokenUsage},
};
use serde_json::{json, Value};
use std::time::Instant;
use tracing::{debug, info, warn};

const EMPTY_REPLY_REMINDER: &str =
    "Sua última resposta veio vazia. Use as ferramentas se necessário e responda à pergunta.";

impl Agent {
    /// Answer `prompt`, recording every step of the tool-calling loop.
    ///
    /// Tool failures are fed back to the model as error observations; only
    /// transport/API failures and the iteration cap end the run with an error.
    pub async fn run_with_steps(&self, prompt: &str) -> Result<RunResult> {
        let start_time = Instant::now();
        let mut memory = AgentMemory::new(Some(self.system_prompt().to_string()));
        let tools = self.function_factory().get_openai_tools();
        let mut token_usage: Option<TokenUsage> = None;

        memory.add_step(AgentStep::Task {
            content: prompt.to_string(),
        });

        for iteration in 1..=self.max_iterations() {
            let mut chat_request = ChatCompletionRequest::new(self.model(), memory.as_messages())
                .with_max_tokens(self.max_tokens());

            if !tools.is_empty() {
                chat_request = chat_request
                    .with_tools(tools.clone())
                    .with_tool_choice(json!("auto"));
            }

            let request_body = chat_request.into_value();
            debug!(target: "legal_date_agent::agent", iteration, model = self.model(), "requesting completion");

            // Each attempt is bounded by the timeout; retries get their own.
            let response = self
                .openai_client()
                .chat_completion(&request_body, self.timeout())
                .await?;

            token_usage = TokenUsage::combine(token_usage, TokenUsage::from_response(&response));
            let assistant_message = extract_assistant_message(&response)?;

            let tool_calls = assistant_message
                .get("tool_calls")
                .and_then(Value::as_array)
                .filter(|calls| !calls.is_empty());

            if let Some(tool_calls) = tool_calls {
                for tool_call in tool_calls {
                    self.execute_tool_call(tool_call, &mut memory).await;
                }
                continue;
            }

            let answer = extract_message_text(&assistant_message);
            if answer.is_empty() {
                memory.add_step(AgentStep::Reminder {
                    content: EMPTY_REPLY_REMINDER.to_string(),
                });
                continue;
            }

            memory.add_step(AgentStep::FinalAnswer {
                answer: answer.clone(),
            });
            info!(
                target: "legal_date_agent::agent",
                iterations = iteration,
                elapsed_ms = start_time.elapsed().as_millis() as u64,
                "run completed"
            );

            return Ok(RunResult::new(
                answer,
                memory.into_steps(),
                token_usage,
                start_time.elapsed(),
                iteration,
            ));
        }

        Err(AgentError::MaxIterations(self.max_iterations()))
    }

    /// Run one tool call and record its action and observation
    async fn execute_tool_call(&self, tool_call: &Value, memory: &mut AgentMemory) {
        let tool_call_id = extract_tool_call_id(tool_call).to_string();
        let function_name = extract_function_name(tool_call).unwrap_or_default();
        let raw = raw_arguments(tool_call);
        let parsed = parse_function_arguments(&raw, function_name);

        memory.add_step(AgentStep::Action {
            tool_name: function_name.to_string(),
            tool_call_id: tool_call_id.clone(),
            arguments: parsed.as_ref().cloned().unwrap_or(raw),
        });

        let outcome = if function_name.is_empty() {
            Err(AgentError::InvalidFunctionCall(
                "Tool call missing function name".to_string(),
            ))
        } else {
            match parsed {
                Ok(arguments) => {
                    self.function_factory()
                        .execute_function(function_name, arguments)
                        .await
                }
                Err(err) => Err(err),
            }
        };

        let (result, is_error) = match outcome {
            Ok(Value::String(text)) => (text, false),
            Ok(other) => (other.to_string(), false),
            Err(err) => {
                warn!(target: "legal_date_agent::agent", tool = function_name, error = %err, "tool call failed");
                (err.to_error_payload().to_string(), true)
            }
        };

        memory.add_step(AgentStep::Observation {
            tool_call_id,
            result,
            is_error,
        });
    }
}

fn extract_assistant_message(response: &Value) -> Result<Value> {
    let choices = response
        .get("choices")
        .and_then(|value| value.as_array())
        .ok_or_else(|| {
            AgentError::Unknown("Missing 'choices' array in completion response".to_string())
        })?;

    let first_choice = choices.first().ok_or_else(|| {
        AgentError::Unknown("Completion response contained no choices".to_string())
    })?;

    first_choice.get("message").cloned().ok_or_else(|| {
        AgentError::Unknown("Completion response missing assistant message".to_string())
    })
}

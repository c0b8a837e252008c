use legal_date_agent::tools::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize, JsonSchema)]
struct WeeksParams {
    /// Number of weeks.
    semanas: i64,
}

legal_date_agent::plain_tool!(
    name = "semanas_em_dias",
    description = "Converte semanas em dias",
    params = WeeksParams,
    |params: WeeksParams| (params.semanas * 7).to_string(),
);

#[tokio::test]
async fn test_generated_tool_metadata() {
    let tool = SemanasEmDias;

    assert_eq!(tool.name(), "semanas_em_dias");
    assert_eq!(tool.description(), "Converte semanas em dias");

    let schema = tool.parameters_schema();
    assert_eq!(schema["type"], "object");
    assert_eq!(schema["properties"]["semanas"]["type"], "integer");
    assert_eq!(schema["required"], json!(["semanas"]));
}

#[tokio::test]
async fn test_generated_tool_returns_plain_text() {
    let result = SemanasEmDias.execute(json!({"semanas": 3})).await.unwrap();
    assert_eq!(result, json!("21"));
}

#[tokio::test]
async fn test_generated_tool_reports_argument_path() {
    let err = SemanasEmDias
        .execute(json!({"semanas": "três"}))
        .await
        .unwrap_err();

    assert_eq!(err.error_code(), "INVALID_FUNCTION_CALL");
    assert!(err.to_string().contains("semanas_em_dias"));
    assert!(err.to_string().contains("semanas"));
}

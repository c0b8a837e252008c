//! The five date-arithmetic tools offered to the model.
//!
//! Tool names, argument names and descriptions are in Portuguese, the language
//! the agent converses in. Validation failures come back as the plain
//! [`CalcError`](crate::calc::CalcError) message so the model can relay it.

use super::FunctionFactory;
use crate::calc::{self, CalcResult};
use legal_date_macros::plain_tool;
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DurationParams {
    /// Número de anos.
    #[serde(rename = "anos")]
    pub years: i64,
    /// Número de meses.
    #[serde(rename = "meses")]
    pub months: i64,
    /// Número de dias.
    #[serde(rename = "dias")]
    pub days: i64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DayCountParams {
    /// Número de dias.
    #[serde(rename = "dias")]
    pub days: i64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DateDifferenceParams {
    /// Data inicial no formato 'DD-MM-YYYY'.
    #[serde(rename = "data1")]
    pub date1: String,
    /// Data final no formato 'DD-MM-YYYY'.
    #[serde(rename = "data2")]
    pub date2: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ShiftDateParams {
    /// Data no formato 'DD-MM-YYYY'.
    #[serde(rename = "data")]
    pub date: String,
    /// Operação a ser realizada ('soma' ou 'subtrai').
    #[serde(rename = "operacao")]
    pub operation: String,
    /// Número de dias a serem somados ou subtraídos.
    #[serde(rename = "dias")]
    pub days: i64,
}

fn reply<T: ToString>(result: CalcResult<T>) -> String {
    match result {
        Ok(value) => value.to_string(),
        Err(err) => err.to_string(),
    }
}

plain_tool!(
    struct_name = DaysFromDurationTool,
    name = "converte_para_dias",
    description = "Converte anos, meses e dias em dias (1 ano = 365 dias, 1 mês = 30 dias). Retorna o total de dias.",
    params = DurationParams,
    |params: DurationParams| reply(calc::days_from_duration(params.years, params.months, params.days))
);

plain_tool!(
    struct_name = DurationFromDaysTool,
    name = "converte_dias_em_anos_meses_dias_por_extenso",
    description = "Converte dias em anos, meses e dias por extenso (1 ano = 365 dias, 1 mês = 30 dias).",
    params = DayCountParams,
    |params: DayCountParams| reply(calc::describe_days(params.days))
);

plain_tool!(
    struct_name = DateDifferenceTool,
    name = "diferenca_entre_datas",
    description = "Calcula a diferença em dias entre duas datas no formato 'DD-MM-YYYY'.",
    params = DateDifferenceParams,
    |params: DateDifferenceParams| reply(calc::date_difference(&params.date1, &params.date2))
);

plain_tool!(
    struct_name = ShiftDateTool,
    name = "soma_ou_subtrai_dias_em_data",
    description = "Soma ou subtrai dias de uma data no formato 'DD-MM-YYYY'. A operação deve ser 'soma' ou 'subtrai'. Retorna a nova data no formato 'DD-MM-YYYY'.",
    params = ShiftDateParams,
    |params: ShiftDateParams| reply(
        calc::shift_date(&params.date, &params.operation, params.days).map(calc::format_date)
    )
);

plain_tool!(
    struct_name = FractionAndPercentageTool,
    name = "calcula_fracao_e_porcentagem_baseado_em_dias",
    description = "Calcula o número de dias correspondentes a 1/6, 1/5, 1/4, 1/3, 3/8, 2/5, 5/12, 11/24, 1/2, 3/5, 2/3 do valor e também as porcentagens correspondentes a 16%, 20%, 25%, 30%, 40%, 50%, 60% e 70% do valor.",
    params = DayCountParams,
    |params: DayCountParams| reply(calc::fraction_and_percentage(params.days))
);

/// Register all five date tools.
pub fn register_date_tools(factory: &mut FunctionFactory) {
    factory.register_tool(DaysFromDurationTool);
    factory.register_tool(DurationFromDaysTool);
    factory.register_tool(DateDifferenceTool);
    factory.register_tool(ShiftDateTool);
    factory.register_tool(FractionAndPercentageTool);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::Tool;
    use serde_json::json;

    fn run(tool: &dyn Tool, arguments: serde_json::Value) -> serde_json::Value {
        tokio_test::block_on(tool.execute(arguments)).unwrap()
    }

    #[test]
    fn test_days_from_duration_tool() {
        let output = run(
            &DaysFromDurationTool,
            json!({"anos": 1, "meses": 4, "dias": 0}),
        );
        assert_eq!(output, json!("485"));

        let output = run(
            &DaysFromDurationTool,
            json!({"anos": -1, "meses": 0, "dias": 0}),
        );
        assert_eq!(output, json!("Por favor, informe um valor válido."));
    }

    #[test]
    fn test_duration_words_tool() {
        let output = run(&DurationFromDaysTool, json!({"dias": 380}));
        assert_eq!(output, json!("1 ano e 15 dias"));
    }

    #[test]
    fn test_shift_date_tool_invalid_operation_is_a_message() {
        let output = run(
            &ShiftDateTool,
            json!({"data": "01-01-2025", "operacao": "divide", "dias": 3}),
        );
        assert_eq!(output, json!("Operação inválida. Use 'soma' ou 'subtrai'."));
    }

    #[test]
    fn test_wrong_argument_type_is_an_error() {
        let result = tokio_test::block_on(
            DateDifferenceTool.execute(json!({"data1": "01-01-2020", "data2": 5})),
        );
        let err = result.unwrap_err();
        assert_eq!(err.error_code(), "INVALID_FUNCTION_CALL");
        assert!(err.to_string().contains("data2"));
    }

    #[test]
    fn test_schema_uses_portuguese_argument_names() {
        let schema = ShiftDateTool.parameters_schema();
        let properties = schema["properties"].as_object().unwrap();

        assert!(properties.contains_key("data"));
        assert!(properties.contains_key("operacao"));
        assert!(properties.contains_key("dias"));
        assert_eq!(properties["dias"]["type"], "integer");
        assert_eq!(schema["required"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_register_date_tools() {
        let mut factory = FunctionFactory::new();
        register_date_tools(&mut factory);

        assert_eq!(factory.get_openai_tools().len(), 5);
        assert!(factory.has_function("diferenca_entre_datas"));
        assert!(factory.has_function("calcula_fracao_e_porcentagem_baseado_em_dias"));
    }
}

use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Declares a tool backed by a plain synchronous function.
///
/// Generates a unit struct implementing `legal_date_agent::tools::Tool`, with
/// the JSON Schema derived from `params` and the closure's `String` result
/// returned to the model verbatim. Argument errors carry the JSON path of the
/// offending field.
///
/// ```ignore
/// plain_tool!(
///     struct_name = DoubleTool,
///     name = "double",
///     description = "Doubles a value",
///     params = DoubleParams,
///     |params: DoubleParams| (params.value * 2).to_string()
/// );
/// ```
///
/// `struct_name` is optional; without it the struct name is the PascalCase
/// form of `name`.
#[proc_macro]
pub fn plain_tool(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as PlainToolDefinition);

    let name = input.name;
    let description = input.description;
    let params_type = input.params_type;
    let execute_body = input.execute_body;

    let tool_struct = input
        .struct_name
        .unwrap_or_else(|| quote::format_ident!("{}", pascal_case(&name.value())));

    let expanded = quote! {
        #[derive(Debug, Default, Clone, Copy)]
        pub struct #tool_struct;

        impl legal_date_agent::tools::Tool for #tool_struct {
            fn name(&self) -> &'static str {
                #name
            }

            fn description(&self) -> &'static str {
                #description
            }

            fn parameters_schema(&self) -> serde_json::Value {
                let schema = schemars::schema_for!(#params_type);
                serde_json::to_value(&schema.schema).unwrap_or_else(|_| {
                    serde_json::json!({
                        "type": "object",
                        "properties": {},
                        "required": []
                    })
                })
            }

            fn execute(
                &self,
                parameters: serde_json::Value,
            ) -> std::pin::Pin<
                Box<
                    dyn std::future::Future<
                            Output = Result<serde_json::Value, legal_date_agent::AgentError>,
                        > + Send
                        + '_,
                >,
            > {
                Box::pin(async move {
                    let params: #params_type = serde_path_to_error::deserialize(parameters)
                        .map_err(|err| {
                            legal_date_agent::AgentError::InvalidFunctionCall(format!(
                                "Invalid parameters for {} at `{}`: {}",
                                #name,
                                err.path(),
                                err.inner()
                            ))
                        })?;

                    let handler = #execute_body;
                    let output = ::std::string::String::from(handler(params));
                    Ok(serde_json::Value::String(output))
                })
            }
        }
    };

    TokenStream::from(expanded)
}

fn pascal_case(snake: &str) -> String {
    snake
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

struct PlainToolDefinition {
    struct_name: Option<syn::Ident>,
    name: syn::LitStr,
    description: syn::LitStr,
    params_type: syn::Type,
    execute_body: syn::ExprClosure,
}

fn parse_named_assignment<T: syn::parse::Parse>(
    input: syn::parse::ParseStream,
    keyword: &str,
) -> syn::Result<T> {
    let ident: syn::Ident = input.parse()?;
    if ident != keyword {
        return Err(syn::Error::new_spanned(
            ident,
            format!("expected '{keyword}'"),
        ));
    }
    input.parse::<syn::Token![=]>()?;
    let value = input.parse::<T>()?;
    input.parse::<syn::Token![,]>()?;
    Ok(value)
}

fn next_keyword_is(input: syn::parse::ParseStream, keyword: &str) -> bool {
    input
        .fork()
        .parse::<syn::Ident>()
        .map(|ident| ident == keyword)
        .unwrap_or(false)
}

impl syn::parse::Parse for PlainToolDefinition {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let struct_name = if next_keyword_is(input, "struct_name") {
            Some(parse_named_assignment::<syn::Ident>(input, "struct_name")?)
        } else {
            None
        };
        let name = parse_named_assignment::<syn::LitStr>(input, "name")?;
        let description = parse_named_assignment::<syn::LitStr>(input, "description")?;
        let params_type = parse_named_assignment::<syn::Type>(input, "params")?;
        let execute_body: syn::ExprClosure = input.parse()?;
        // Allow a trailing comma after the closure.
        let _ = input.parse::<Option<syn::Token![,]>>()?;

        Ok(PlainToolDefinition {
            struct_name,
            name,
            description,
            params_type,
            execute_body,
        })
    }
}

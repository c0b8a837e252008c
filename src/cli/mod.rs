pub mod console;
pub mod demo;
pub mod logging;

use crate::{
    core::{Overrides, Settings},
    tools::register_date_tools,
    FunctionFactory,
};
use anyhow::{bail, Context};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use console::Console;
use std::time::Duration;
use tracing::info;

fn command() -> Command {
    Command::new("legal-date-agent")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Answers legal date questions in formal Portuguese using date-arithmetic tools")
        .arg(
            Arg::new("question")
                .help("Questions to ask; the built-in demo questions run when none are given")
                .num_args(0..)
                .index(1),
        )
        .arg(
            Arg::new("model")
                .short('m')
                .long("model")
                .value_name("MODEL")
                .help("Model name (or set LEGAL_AGENT_MODEL)"),
        )
        .arg(
            Arg::new("api-key")
                .short('k')
                .long("api-key")
                .value_name("KEY")
                .help("API key (or set GEMINI_API_KEY / OPENAI_API_KEY)"),
        )
        .arg(
            Arg::new("base-url")
                .short('u')
                .long("base-url")
                .value_name("URL")
                .help("OpenAI-compatible base URL (or set OPENAI_BASE_URL)"),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .value_name("SECONDS")
                .help("Request timeout in seconds")
                .value_parser(value_parser!(u64))
                .default_value("120"),
        )
        .arg(
            Arg::new("max-iterations")
                .short('i')
                .long("max-iterations")
                .value_name("COUNT")
                .help("Maximum model round trips per question")
                .value_parser(value_parser!(usize))
                .default_value("10"),
        )
        .arg(
            Arg::new("trace")
                .long("trace")
                .help("Print the step-by-step replay of each run to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-tools")
                .long("list-tools")
                .help("Print the tool definitions sent to the model and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
}

fn overrides_from(matches: &ArgMatches) -> Overrides {
    Overrides {
        api_key: matches.get_one::<String>("api-key").cloned(),
        base_url: matches.get_one::<String>("base-url").cloned(),
        model: matches.get_one::<String>("model").cloned(),
        timeout: matches
            .get_one::<u64>("timeout")
            .copied()
            .map(Duration::from_secs),
        max_iterations: matches.get_one::<usize>("max-iterations").copied(),
    }
}

fn questions_from(matches: &ArgMatches) -> Vec<String> {
    let questions: Vec<String> = matches
        .get_many::<String>("question")
        .map(|values| {
            values
                .filter(|q| !q.trim().is_empty())
                .cloned()
                .collect()
        })
        .unwrap_or_default();

    if questions.is_empty() {
        demo::demo_questions()
    } else {
        questions
    }
}

/// CLI entry point
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let matches = command().get_matches();
    logging::init(matches.get_flag("verbose"));

    let mut function_factory = FunctionFactory::new();
    register_date_tools(&mut function_factory);

    if matches.get_flag("list-tools") {
        let tools = serde_json::to_string_pretty(&function_factory.get_openai_tools())
            .context("failed to serialize tool definitions")?;
        println!("{}", tools);
        return Ok(());
    }

    let settings = Settings::from_process_env(overrides_from(&matches))?;
    info!(
        target: "legal_date_agent::cli",
        model = %settings.model,
        base_url = %settings.base_url,
        "configured agent"
    );

    let agent = settings.build_agent(function_factory);
    let console = Console::new();
    let questions = questions_from(&matches);

    let failures =
        demo::run_questions(&agent, &console, &questions, matches.get_flag("trace")).await;
    if failures > 0 {
        bail!("{} of {} questions failed", failures, questions.len());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        command().debug_assert();
    }

    #[test]
    fn test_defaults_without_arguments() {
        let matches = command().get_matches_from(["legal-date-agent"]);
        let overrides = overrides_from(&matches);

        assert_eq!(overrides.timeout, Some(Duration::from_secs(120)));
        assert_eq!(overrides.max_iterations, Some(10));
        assert!(overrides.api_key.is_none());
        assert_eq!(questions_from(&matches).len(), demo::DEMO_QUESTIONS.len());
        assert!(!matches.get_flag("trace"));
    }

    #[test]
    fn test_flags_and_questions() {
        let matches = command().get_matches_from([
            "legal-date-agent",
            "-m",
            "gemini-2.5-flash",
            "-t",
            "30",
            "-i",
            "4",
            "--trace",
            "Quantos dias tem em 2 anos?",
            "380 dias são quantos anos?",
        ]);
        let overrides = overrides_from(&matches);

        assert_eq!(overrides.model.as_deref(), Some("gemini-2.5-flash"));
        assert_eq!(overrides.timeout, Some(Duration::from_secs(30)));
        assert_eq!(overrides.max_iterations, Some(4));
        assert!(matches.get_flag("trace"));
        assert_eq!(
            questions_from(&matches),
            vec![
                "Quantos dias tem em 2 anos?".to_string(),
                "380 dias são quantos anos?".to_string()
            ]
        );
    }

    #[test]
    fn test_non_numeric_timeout_rejected() {
        let result = command().try_get_matches_from(["legal-date-agent", "-t", "soon"]);
        assert!(result.is_err());
    }
}

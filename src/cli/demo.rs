use super::console::Console;
use crate::Agent;
use tracing::{error, info};

/// Questions asked when none are given on the command line
pub const DEMO_QUESTIONS: [&str; 7] = [
    "Quantos dias tem em 1 ano e 4 meses?",
    "380 dias são quantos anos, meses e dias?",
    "Qual a diferença em dias entre 01-01-2020 e 01-01-2021?",
    "Qual a diferença em dias entre 1 de abril de 2025 e 23 de agosto de 2025?",
    "Se somar 45 dias a 1º de janeiro de 2025, qual será a nova data?",
    "Se subtrair 30 dias de 5 de abril de 2025, qual será a nova data?",
    "Quais são as frações e porcentagens para uma pena de 300 dias? Formate o resultado como uma tabela.",
];

pub fn demo_questions() -> Vec<String> {
    DEMO_QUESTIONS.iter().map(|q| q.to_string()).collect()
}

/// Ask each question in order and return how many failed.
///
/// A failed question is reported and the remaining ones still run.
pub async fn run_questions(
    agent: &Agent,
    console: &Console,
    questions: &[String],
    trace: bool,
) -> usize {
    let mut failures = 0;

    for (index, question) in questions.iter().enumerate() {
        info!(
            target: "legal_date_agent::cli",
            question = index + 1,
            total = questions.len(),
            "asking question"
        );
        console.print_question(question);

        match agent.run_with_steps(question).await {
            Ok(result) => {
                if trace {
                    console.print_trace(&result.replay());
                }
                console.print_answer(&result.output);
            }
            Err(err) => {
                error!(
                    target: "legal_date_agent::cli",
                    code = err.error_code(),
                    error = %err,
                    "question failed"
                );
                console.print_error(question, &err);
                failures += 1;
            }
        }
    }

    failures
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_questions_cover_every_tool() {
        let questions = demo_questions();
        assert_eq!(questions.len(), 7);
        assert!(questions[0].contains("1 ano e 4 meses"));
        assert!(questions[2].contains("01-01-2020"));
        assert!(questions[6].contains("300 dias"));
    }
}

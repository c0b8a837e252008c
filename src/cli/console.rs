use termimad::MadSkin;

/// Terminal output for questions and the model's markdown answers
pub struct Console {
    skin: MadSkin,
}

impl Console {
    pub fn new() -> Self {
        Self {
            skin: MadSkin::default(),
        }
    }

    pub fn print_question(&self, question: &str) {
        self.skin.print_text(&question_markdown(question));
    }

    pub fn print_answer(&self, answer: &str) {
        self.skin.print_text(answer);
        println!();
    }

    /// Traces go to stderr so stdout stays the answers only.
    pub fn print_trace(&self, trace: &str) {
        eprintln!("{}\n", trace);
    }

    pub fn print_error(&self, question: &str, error: &dyn std::fmt::Display) {
        eprintln!("Falha ao responder \"{}\": {}\n", question, error);
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

fn question_markdown(question: &str) -> String {
    format!("**Pergunta:** {}", question.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_markdown() {
        assert_eq!(
            question_markdown("  Quantos dias tem em 1 ano e 4 meses? "),
            "**Pergunta:** Quantos dias tem em 1 ano e 4 meses?"
        );
    }
}

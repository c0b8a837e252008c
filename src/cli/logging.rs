use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "legal_date_agent=warn";
const VERBOSE_FILTER: &str = "legal_date_agent=debug,warn";

/// Install the stderr logger; `RUST_LOG` wins over the `--verbose` default.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_parse() {
        assert_eq!(default_directive(false), "legal_date_agent=warn");
        assert!(default_directive(true).contains("debug"));
        assert!(DEFAULT_FILTER.parse::<EnvFilter>().is_ok());
        assert!(VERBOSE_FILTER.parse::<EnvFilter>().is_ok());
    }
}

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable consulted after `RUST_LOG` for a log filter.
pub const LOG_ENV_VAR: &str = "SLIDE_SOLVER_LOG";

/// Initialize structured logging on stderr based on CLI arguments.
///
/// `RUST_LOG` takes precedence, then `SLIDE_SOLVER_LOG`, then `log_level`,
/// then the `verbose` flag (`debug` when set, `warn` otherwise).
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let level = match (verbose, log_level) {
        (_, Some(level)) => level,
        (true, None) => "debug",
        (false, None) => "warn",
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV_VAR))
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}

fn default_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("slide_solver={}", level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_scopes_bare_levels() {
        assert_eq!(default_directive("debug"), "slide_solver=debug");
        assert_eq!(default_directive("slide_solver=trace"), "slide_solver=trace");
    }
}

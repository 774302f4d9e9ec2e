use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "operation_name");
/// // Or with additional fields:
/// trace_time!(start, "operation_name", steps = trace.len());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Build the filter directive for the given CLI flags.
///
/// A bare level (`debug`) is scoped to the algotrace crates; a full directive
/// (`algotrace_core=trace`) is passed through untouched.
pub fn filter_directive(verbose: bool, log_level: Option<&str>) -> String {
    match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("algotrace={level},algotrace_core={level}"),
        (true, None) => "algotrace=debug,algotrace_core=debug".to_string(),
        (false, None) => "algotrace=warn,algotrace_core=warn".to_string(),
    }
}

/// Initialize structured logging based on CLI arguments
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let directive = filter_directive(verbose, log_level);

    // ALGOTRACE_LOG wins over RUST_LOG, both win over flags
    let filter = EnvFilter::try_from_env("ALGOTRACE_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(directive));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(
                        tracing_subscriber::fmt::format::FmtSpan::NEW
                            | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
                    ),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

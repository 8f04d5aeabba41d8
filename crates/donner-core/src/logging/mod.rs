use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_TARGETS: [&str; 2] = ["donner", "donner_core"];

/// Filter directives for the given verbosity with `RUST_LOG` appended.
///
/// Later directives for the same target replace earlier ones, so anything in
/// `RUST_LOG` wins over the verbosity default.
fn filter_directives(verbose: bool, rust_log: Option<&str>) -> String {
    let level = if verbose { "info" } else { "error" };

    let mut directives: Vec<String> = LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect();
    if let Some(env) = rust_log.map(str::trim).filter(|env| !env.is_empty()) {
        directives.push(env.to_string());
    }
    directives.join(",")
}

/// Initialize logging.
///
/// Logs are JSON lines on stderr so that stdout stays clean for alias output
/// and for the wrapped command. Only errors are emitted unless `verbose` is
/// set. `RUST_LOG` directives override the default level per target.
pub fn init_logging(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = EnvFilter::builder().parse_lossy(filter_directives(verbose, rust_log.as_deref()));

    // try_init: a subscriber may already be installed by an embedding binary
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .try_init();
}

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when neither `RUST_LOG` nor a configured level is present.
pub fn default_directive(verbose: bool) -> String {
    if verbose {
        "shopping_cart=debug,info".to_string()
    } else {
        "shopping_cart=info".to_string()
    }
}

/// Resolves the filter directive: `RUST_LOG` wins, then the configured level,
/// then the verbosity default.
pub fn resolve_directive(env: Option<String>, configured: Option<&str>, verbose: bool) -> String {
    if let Some(env) = env.filter(|v| !v.trim().is_empty()) {
        return env;
    }
    match configured {
        Some(level) if !verbose => format!("shopping_cart={}", level),
        _ => default_directive(verbose),
    }
}

pub fn init_cli_logger(verbose: bool, configured_level: Option<&str>) {
    let directive = resolve_directive(std::env::var("RUST_LOG").ok(), configured_level, verbose);
    let filter = EnvFilter::try_new(&directive)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

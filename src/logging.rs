use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, fmt};

/// Default filter for a `-v` count; `RUST_LOG` wins when set
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Logs go to stderr so `--apply` output stays clean.
pub fn init(verbosity: u8) {
    let use_ansi = std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let subscriber = fmt::fmt()
        .with_env_filter(filter)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

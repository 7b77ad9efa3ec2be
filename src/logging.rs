use tracing_subscriber::EnvFilter;

/// Sets up the global subscriber for the `calbucket` binary and library.
///
/// Each `-v` raises the `calbucket` target one step from `warn` through
/// `info` and `debug` to `trace`. A set `RUST_LOG` replaces that filter
/// entirely. Events are written to stderr; stdout carries only the report.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("calbucket={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the stderr logger. `RUST_LOG` wins over the `--verbose` default.
pub fn init_cli_logger(verbose: bool) {
    let default_directives = if verbose {
        "portfolio_view=debug,portfolio_view_cli=debug,portfolio_view_core=debug"
    } else {
        "portfolio_view=info,portfolio_view_cli=info,portfolio_view_core=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

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

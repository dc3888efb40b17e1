use tracing_subscriber::{prelude::*, EnvFilter};

const DEFAULT_DIRECTIVES: &str = "info,aws_config=warn,aws_smithy_runtime=warn,hyper=warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Installs a fmt subscriber filtered by `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

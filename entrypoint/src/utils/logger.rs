use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// INFO by default, `RUST_LOG` overrides
pub fn configure_logger() {
    let env_log = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let subscriber = FmtSubscriber::builder()
        .compact()
        .with_file(false)
        .with_target(false)
        .with_env_filter(env_log);

    if tracing::subscriber::set_global_default(subscriber.finish()).is_err() {
        eprintln!("A tracing subscriber is already installed");
    }
}

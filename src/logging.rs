use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "classroom_records=info";

/// Installs a global fmt subscriber filtered by `RUST_LOG`, falling back to
/// `DEFAULT_FILTER`. Returns false when a subscriber is already installed.
pub fn init() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

//! Logging setup shared by stockroom binaries.

use tracing_subscriber::EnvFilter;

/// Filter applied when the environment (`RUST_LOG`) sets none.
const DEFAULT_FILTER: &str = "info";

/// Initialize process-wide logging: JSON lines to stdout, filtered by
/// `RUST_LOG` (defaulting to `info`).
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_can_be_called_repeatedly() {
        init();
        init();
        tracing::info!("still alive after double init");
    }
}

use crate::config::ExplorerConfig;

use tracing_subscriber::{
	fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

/// Installs the global subscriber. `RUST_LOG` wins over `level` when set.
pub fn init(level: &str) -> Result<(), TryInitError> {
	let env_filter = format!("bv_core={level},bv_file_ext={level}");

	tracing_subscriber::registry()
		.with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter)))
		.with(fmt::layer().with_target(true))
		.try_init()
}

pub fn init_from_config(config: &ExplorerConfig) -> Result<(), TryInitError> {
	init(&config.log_level)
}

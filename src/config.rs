use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_LOG_PATH: &str = "transactions.log";
pub const DEFAULT_CURRENCY: &str = "USD";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
	pub api_key:  String,
	pub log_path: PathBuf,
	/// Used for requests that arrive without a currency code.
	pub currency: String,
}

impl Config {
	pub fn load() -> Result<Self, config::ConfigError> {
		let config_builder = config::Config::builder()
			.set_default("api_key", crate::legacy::API_KEY)?
			.set_default("log_path", DEFAULT_LOG_PATH)?
			.set_default("currency", DEFAULT_CURRENCY)?
			.add_source(config::Environment::with_prefix("APP"))
			.build()?;

		config_builder.try_deserialize()
	}
}

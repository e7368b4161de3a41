use std::io;

use payment_kata::config::Config;
use payment_kata::run;

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::init();

	let config = Config::load().expect("Failed to load configuration");
	run(&config, io::stdin().lock(), io::stdout().lock())?;
	Ok(())
}

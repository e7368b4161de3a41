use std::io::{Read, Write};

use log::{error, info};

use crate::config::Config;
use crate::domain::payment::PaymentRequest;
use crate::domain::payment_method::PaymentMethods;
use crate::infrastructure::gateway::simulated_gateway::SimulatedGateway;
use crate::infrastructure::logging::file_transaction_log::FileTransactionLog;
use crate::infrastructure::notification::console_notifier::ConsoleNotifier;
use crate::infrastructure::persistence::in_memory_transaction_repository::InMemoryTransactionRepository;
use crate::use_cases::get_transaction_summary::GetTransactionSummaryUseCase;
use crate::use_cases::process_payment::ProcessPaymentUseCase;

pub mod config;
pub mod legacy;

pub mod domain {
	pub mod errors;
	pub mod gateway;
	pub mod notifier;
	pub mod payment;
	pub mod payment_method;
	pub mod pricing;
	pub mod repository;
	pub mod transaction;
	pub mod transaction_log;
}

pub mod use_cases {
	pub mod dto;
	pub mod get_transaction_summary;
	pub mod process_payment;
	pub mod purge_transactions;
	pub mod quote_payment;
}

pub mod infrastructure {
	pub mod gateway {
		pub mod simulated_gateway;
	}
	pub mod logging {
		pub mod file_transaction_log;
	}
	pub mod methods {
		pub mod bank_transfer;
		pub mod credit_card;
		pub mod paypal;
		pub mod registry;

		pub use self::registry::last_four;
	}
	pub mod notification {
		pub mod console_notifier;
	}
	pub mod persistence {
		pub mod in_memory_transaction_repository;
	}
}

/// Reads a JSON array of payment requests from `input`, processes them in
/// order and writes one result line per request to `output`, followed by a
/// summary line. Returns the number of payments that went through.
pub fn run<I: Read, O: Write>(
	config: &Config,
	input: I,
	mut output: O,
) -> Result<usize, Box<dyn std::error::Error>> {
	let requests: Vec<PaymentRequest> = serde_json::from_reader(input)?;
	info!("Loaded {} payment requests", requests.len());

	let repository = InMemoryTransactionRepository::new();
	let process_payment = ProcessPaymentUseCase::new(
		PaymentMethods::default(),
		repository.clone(),
		SimulatedGateway::new(),
		FileTransactionLog::new(config.log_path.clone()),
		ConsoleNotifier::stdout(),
		config.api_key.clone(),
	)
	.with_default_currency(config.currency.clone());

	let mut processed = 0;
	for request in &requests {
		match process_payment.execute(request) {
			Ok(record) => {
				processed += 1;
				writeln!(output, "OK {}", record.id)?;
			}
			Err(e) if e.is_rejection() => {
				writeln!(output, "REJECTED {e}")?;
			}
			Err(e) => {
				error!("Payment processing failed: {e}");
				writeln!(output, "ERROR {e}")?;
			}
		}
	}

	let summary = GetTransactionSummaryUseCase::new(repository).execute()?;
	writeln!(
		output,
		"Processed {} of {} payments, total {:.2}",
		summary.overall.total_requests,
		requests.len(),
		summary.overall.total_amount
	)?;

	Ok(processed)
}

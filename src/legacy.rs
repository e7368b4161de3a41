//! Flat `process_payment` entry point: nothing is returned, failures
//! are only printed, and every processed transaction lands in one
//! process-wide list.

use std::io::Stdout;
use std::sync::{LazyLock, PoisonError, RwLock};

use crate::domain::errors::PaymentError;
use crate::domain::payment::PaymentRequest;
use crate::domain::payment_method::PaymentMethods;
use crate::domain::repository::TransactionRepository;
use crate::domain::transaction::TransactionRecord;
use crate::infrastructure::gateway::simulated_gateway::SimulatedGateway;
use crate::infrastructure::logging::file_transaction_log::FileTransactionLog;
use crate::infrastructure::notification::console_notifier::ConsoleNotifier;
use crate::use_cases::process_payment::ProcessPaymentUseCase;

pub const API_KEY: &str = "sk_test_4eC39HqLyjWDarjtT1zdp7dc";
pub const LOG_FILE_PATH: &str = "transactions.log";

static TRANSACTIONS: RwLock<Vec<TransactionRecord>> = RwLock::new(Vec::new());

type LegacyProcessor = ProcessPaymentUseCase<
	ProcessedTransactions,
	SimulatedGateway,
	FileTransactionLog,
	ConsoleNotifier<Stdout>,
>;

static PROCESSOR: LazyLock<LegacyProcessor> = LazyLock::new(|| {
	ProcessPaymentUseCase::new(
		PaymentMethods::default(),
		ProcessedTransactions,
		SimulatedGateway::new(),
		FileTransactionLog::new(LOG_FILE_PATH),
		ConsoleNotifier::stdout(),
		API_KEY,
	)
});

/// Repository view over the process-wide list.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessedTransactions;

impl TransactionRepository for ProcessedTransactions {
	fn save(&self, record: TransactionRecord) -> Result<(), PaymentError> {
		TRANSACTIONS
			.write()
			.unwrap_or_else(PoisonError::into_inner)
			.push(record);
		Ok(())
	}

	fn find_all(&self) -> Result<Vec<TransactionRecord>, PaymentError> {
		Ok(TRANSACTIONS
			.read()
			.unwrap_or_else(PoisonError::into_inner)
			.clone())
	}

	fn clear(&self) -> Result<(), PaymentError> {
		TRANSACTIONS
			.write()
			.unwrap_or_else(PoisonError::into_inner)
			.clear();
		Ok(())
	}
}

pub fn process_payment(request: &PaymentRequest) {
	match PROCESSOR.execute(request) {
		Ok(record) => println!("Payment successful: {}", record.id),
		Err(e) => println!("Payment failed: {e}"),
	}
}

/// Ids of every transaction processed so far, oldest first.
pub fn processed_transactions() -> Vec<String> {
	TRANSACTIONS
		.read()
		.unwrap_or_else(PoisonError::into_inner)
		.iter()
		.map(|record| record.id.clone())
		.collect()
}

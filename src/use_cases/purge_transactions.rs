use log::info;

use crate::domain::errors::PaymentError;
use crate::domain::repository::TransactionRepository;

#[derive(Clone)]
pub struct PurgeTransactionsUseCase<R: TransactionRepository> {
	repository: R,
}

impl<R: TransactionRepository> PurgeTransactionsUseCase<R> {
	pub fn new(repository: R) -> Self {
		Self { repository }
	}

	pub fn execute(&self) -> Result<(), PaymentError> {
		info!("Purging stored transactions");
		self.repository.clear()
	}
}

use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::errors::PaymentError;
use crate::domain::repository::TransactionRepository;
use crate::domain::transaction::TransactionRecord;

#[derive(Clone, Default)]
pub struct InMemoryTransactionRepository {
	records: Arc<RwLock<Vec<TransactionRecord>>>,
}

impl InMemoryTransactionRepository {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.records
			.read()
			.unwrap_or_else(PoisonError::into_inner)
			.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl TransactionRepository for InMemoryTransactionRepository {
	fn save(&self, record: TransactionRecord) -> Result<(), PaymentError> {
		self.records
			.write()
			.unwrap_or_else(PoisonError::into_inner)
			.push(record);
		Ok(())
	}

	fn find_all(&self) -> Result<Vec<TransactionRecord>, PaymentError> {
		Ok(self
			.records
			.read()
			.unwrap_or_else(PoisonError::into_inner)
			.clone())
	}

	fn clear(&self) -> Result<(), PaymentError> {
		self.records
			.write()
			.unwrap_or_else(PoisonError::into_inner)
			.clear();
		Ok(())
	}
}

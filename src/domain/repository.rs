use crate::domain::errors::PaymentError;
use crate::domain::transaction::TransactionRecord;

pub trait TransactionRepository: Send + Sync + 'static {
	fn save(&self, record: TransactionRecord) -> Result<(), PaymentError>;
	fn find_all(&self) -> Result<Vec<TransactionRecord>, PaymentError>;
	fn clear(&self) -> Result<(), PaymentError>;
}

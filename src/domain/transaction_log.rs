use crate::domain::errors::PaymentError;

/// Audit trail of processed payments, one line per entry.
pub trait TransactionLog: Send + Sync + 'static {
	fn append(&self, message: &str) -> Result<(), PaymentError>;
}

use crate::domain::errors::PaymentError;

pub trait Notifier: Send + Sync + 'static {
	fn notify(&self, recipient: &str, message: &str) -> Result<(), PaymentError>;
}

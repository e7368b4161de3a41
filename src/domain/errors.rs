use derive_more::derive::{Display, Error};

use crate::domain::payment::PaymentType;

#[derive(Debug, Display, Error)]
pub enum PaymentError {
	#[display("Invalid amount {amount}: must be greater than zero.")]
	InvalidAmount { amount: f64 },
	#[display("Invalid email '{email}'.")]
	InvalidEmail { email: String },
	#[display("Unsupported payment type '{payment_type}'.")]
	UnsupportedPaymentType { payment_type: String },
	#[display("Missing required field '{field}' for {payment_type} payment.")]
	MissingField {
		payment_type: PaymentType,
		field:        &'static str,
	},
	#[display("Payment declined by gateway: {message}")]
	Declined { message: String },
	#[display("Gateway error: {message}")]
	Gateway { message: String },
	#[display("Could not store transaction: {message}")]
	Storage { message: String },
	#[display("Could not write transaction log: {source}")]
	Log { source: std::io::Error },
	#[display("Could not send notification: {source}")]
	Notification { source: std::io::Error },
}

impl PaymentError {
	/// Whether the failure was caused by the request itself rather than by
	/// one of the collaborators.
	pub fn is_rejection(&self) -> bool {
		matches!(
			self,
			PaymentError::InvalidAmount { .. } |
				PaymentError::InvalidEmail { .. } |
				PaymentError::UnsupportedPaymentType { .. } |
				PaymentError::MissingField { .. } |
				PaymentError::Declined { .. }
		)
	}
}

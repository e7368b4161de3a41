use std::collections::BTreeMap;
use std::str::FromStr;

use derive_more::derive::Display;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::errors::PaymentError;

#[derive(Debug, Display, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
	#[display("credit_card")]
	CreditCard,
	#[display("paypal")]
	#[serde(rename = "paypal")]
	PayPal,
	#[display("bank_transfer")]
	BankTransfer,
}

impl PaymentType {
	pub const ALL: [PaymentType; 3] = [
		PaymentType::CreditCard,
		PaymentType::PayPal,
		PaymentType::BankTransfer,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			PaymentType::CreditCard => "credit_card",
			PaymentType::PayPal => "paypal",
			PaymentType::BankTransfer => "bank_transfer",
		}
	}
}

impl FromStr for PaymentType {
	type Err = PaymentError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		PaymentType::ALL
			.into_iter()
			.find(|payment_type| payment_type.as_str() == s)
			.ok_or_else(|| PaymentError::UnsupportedPaymentType {
				payment_type: s.to_string(),
			})
	}
}

/// Method-specific fields as they arrive from the caller.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct PaymentDetails(BTreeMap<String, Value>);

impl PaymentDetails {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
		self.0.insert(key.to_string(), value.into());
		self
	}

	/// Returns the field only when it holds a non-blank string.
	pub fn get_str(&self, key: &str) -> Option<&str> {
		self.0
			.get(key)
			.and_then(Value::as_str)
			.filter(|value| !value.trim().is_empty())
	}

	pub fn contains(&self, key: &str) -> bool {
		self.get_str(key).is_some()
	}
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PaymentRequest {
	pub payment_type:   String,
	pub amount:         f64,
	#[serde(default)]
	pub currency:       String,
	pub customer_email: String,
	#[serde(default)]
	pub details:        PaymentDetails,
}

pub fn validate_amount(amount: f64) -> Result<(), PaymentError> {
	if amount.is_finite() && amount > 0.0 {
		Ok(())
	} else {
		Err(PaymentError::InvalidAmount { amount })
	}
}

pub fn validate_email(email: &str) -> Result<(), PaymentError> {
	if email.contains('@') {
		Ok(())
	} else {
		Err(PaymentError::InvalidEmail {
			email: email.to_string(),
		})
	}
}

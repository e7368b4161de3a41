use serde::{Deserialize, Serialize};

use crate::domain::payment::PaymentType;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PaymentQuote {
	pub amount:            f64,
	pub discounted_amount: f64,
	pub fee:               f64,
	pub total:             f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct TransactionSummaryResult {
	pub total_requests: usize,
	pub total_amount:   f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct TransactionsSummaryResponse {
	pub credit_card:   TransactionSummaryResult,
	pub paypal:        TransactionSummaryResult,
	pub bank_transfer: TransactionSummaryResult,
	pub overall:       TransactionSummaryResult,
}

impl TransactionsSummaryResponse {
	pub fn for_type(&self, payment_type: PaymentType) -> &TransactionSummaryResult {
		match payment_type {
			PaymentType::CreditCard => &self.credit_card,
			PaymentType::PayPal => &self.paypal,
			PaymentType::BankTransfer => &self.bank_transfer,
		}
	}
}

use serde_json::{Value, json};

use crate::domain::payment::{PaymentRequest, PaymentType};
use crate::domain::payment_method::PaymentMethod;
use crate::infrastructure::methods::last_four;

pub const BANK_TRANSFER_ENDPOINT: &str = "https://api.bank.com/v1/transfers";

#[derive(Debug, Clone, Copy, Default)]
pub struct BankTransfer;

impl PaymentMethod for BankTransfer {
	fn payment_type(&self) -> PaymentType {
		PaymentType::BankTransfer
	}

	fn id_prefix(&self) -> &'static str {
		"BT"
	}

	fn endpoint(&self) -> &'static str {
		BANK_TRANSFER_ENDPOINT
	}

	fn required_fields(&self) -> &'static [&'static str] {
		&["account_number", "routing_number"]
	}

	fn build_payload(&self, request: &PaymentRequest) -> Value {
		let details = &request.details;
		json!({
			"amount": request.amount,
			"currency": request.currency,
			"account_last4": last_four(details.get_str("account_number").unwrap_or_default()),
			"routing_number": details.get_str("routing_number"),
		})
	}
}

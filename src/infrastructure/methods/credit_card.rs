use serde_json::{Value, json};

use crate::domain::payment::{PaymentRequest, PaymentType};
use crate::domain::payment_method::PaymentMethod;
use crate::infrastructure::methods::last_four;

pub const CREDIT_CARD_ENDPOINT: &str = "https://api.stripe.com/v1/charges";

#[derive(Debug, Clone, Copy, Default)]
pub struct CreditCard;

impl PaymentMethod for CreditCard {
	fn payment_type(&self) -> PaymentType {
		PaymentType::CreditCard
	}

	fn id_prefix(&self) -> &'static str {
		"CC"
	}

	fn endpoint(&self) -> &'static str {
		CREDIT_CARD_ENDPOINT
	}

	fn required_fields(&self) -> &'static [&'static str] {
		&["card_number", "cvv", "expiry_date"]
	}

	fn build_payload(&self, request: &PaymentRequest) -> Value {
		let details = &request.details;
		json!({
			"amount": request.amount,
			"currency": request.currency,
			"card_last4": last_four(details.get_str("card_number").unwrap_or_default()),
			"expiry_date": details.get_str("expiry_date"),
			"receipt_email": request.customer_email,
		})
	}
}

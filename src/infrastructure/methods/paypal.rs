use serde_json::{Value, json};

use crate::domain::payment::{PaymentRequest, PaymentType};
use crate::domain::payment_method::PaymentMethod;

pub const PAYPAL_ENDPOINT: &str = "https://api.paypal.com/v1/payments/payment";

#[derive(Debug, Clone, Copy, Default)]
pub struct PayPal;

impl PaymentMethod for PayPal {
	fn payment_type(&self) -> PaymentType {
		PaymentType::PayPal
	}

	fn id_prefix(&self) -> &'static str {
		"PP"
	}

	fn endpoint(&self) -> &'static str {
		PAYPAL_ENDPOINT
	}

	fn required_fields(&self) -> &'static [&'static str] {
		&["paypal_email"]
	}

	fn build_payload(&self, request: &PaymentRequest) -> Value {
		json!({
			"intent": "sale",
			"payer": { "email": request.details.get_str("paypal_email") },
			"transactions": [{
				"amount": { "total": format!("{:.2}", request.amount), "currency": request.currency },
			}],
		})
	}
}

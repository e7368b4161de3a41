#![allow(dead_code)]

pub mod fakes;

use payment_kata::domain::payment::{PaymentDetails, PaymentRequest};

pub fn credit_card_request(amount: f64) -> PaymentRequest {
	PaymentRequest {
		payment_type:   "credit_card".to_string(),
		amount,
		currency:       "USD".to_string(),
		customer_email: "jane@example.com".to_string(),
		details:        PaymentDetails::new()
			.with("card_number", "4111111111111111")
			.with("cvv", "123")
			.with("expiry_date", "12/30"),
	}
}

pub fn paypal_request(amount: f64) -> PaymentRequest {
	PaymentRequest {
		payment_type:   "paypal".to_string(),
		amount,
		currency:       "EUR".to_string(),
		customer_email: "jane@example.com".to_string(),
		details:        PaymentDetails::new().with("paypal_email", "jane@paypal.com"),
	}
}

pub fn bank_transfer_request(amount: f64) -> PaymentRequest {
	PaymentRequest {
		payment_type:   "bank_transfer".to_string(),
		amount,
		currency:       "GBP".to_string(),
		customer_email: "jane@example.com".to_string(),
		details:        PaymentDetails::new()
			.with("account_number", "000123456789")
			.with("routing_number", "021000021"),
	}
}

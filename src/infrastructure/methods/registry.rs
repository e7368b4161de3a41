use crate::domain::payment_method::PaymentMethods;
use crate::infrastructure::methods::bank_transfer::BankTransfer;
use crate::infrastructure::methods::credit_card::CreditCard;
use crate::infrastructure::methods::paypal::PayPal;

impl Default for PaymentMethods {
	fn default() -> Self {
		PaymentMethods::empty()
			.register(CreditCard)
			.register(PayPal)
			.register(BankTransfer)
	}
}

/// Last four characters of an account or card number, digits only.
pub fn last_four(number: &str) -> String {
	let digits: Vec<char> = number.chars().filter(char::is_ascii_digit).collect();
	digits[digits.len().saturating_sub(4)..].iter().collect()
}

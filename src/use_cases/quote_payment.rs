use crate::domain::errors::PaymentError;
use crate::domain::payment::validate_amount;
use crate::domain::pricing::{CustomerTier, calculate_fee};
use crate::use_cases::dto::PaymentQuote;

#[derive(Clone, Copy, Default)]
pub struct QuotePaymentUseCase;

impl QuotePaymentUseCase {
	pub fn new() -> Self {
		Self
	}

	/// The fee is charged on the amount left after the tier discount.
	pub fn execute(&self, amount: f64, tier: &str) -> Result<PaymentQuote, PaymentError> {
		validate_amount(amount)?;

		let discounted_amount = CustomerTier::from(tier).apply(amount);
		let fee = calculate_fee(discounted_amount);

		Ok(PaymentQuote {
			amount,
			discounted_amount,
			fee,
			total: discounted_amount + fee,
		})
	}
}

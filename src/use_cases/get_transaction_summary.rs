use crate::domain::errors::PaymentError;
use crate::domain::payment::PaymentType;
use crate::domain::repository::TransactionRepository;
use crate::use_cases::dto::{TransactionSummaryResult, TransactionsSummaryResponse};

#[derive(Clone)]
pub struct GetTransactionSummaryUseCase<R: TransactionRepository> {
	repository: R,
}

impl<R: TransactionRepository> GetTransactionSummaryUseCase<R> {
	pub fn new(repository: R) -> Self {
		Self { repository }
	}

	pub fn execute(&self) -> Result<TransactionsSummaryResponse, PaymentError> {
		let mut summary = TransactionsSummaryResponse::default();

		for record in self.repository.find_all()? {
			let bucket = match record.payment_type {
				PaymentType::CreditCard => &mut summary.credit_card,
				PaymentType::PayPal => &mut summary.paypal,
				PaymentType::BankTransfer => &mut summary.bank_transfer,
			};
			add(bucket, record.amount);
			add(&mut summary.overall, record.amount);
		}

		Ok(summary)
	}
}

fn add(result: &mut TransactionSummaryResult, amount: f64) {
	result.total_requests += 1;
	result.total_amount += amount;
}

use log::{info, warn};
use time::OffsetDateTime;

use crate::domain::errors::PaymentError;
use crate::domain::gateway::{GatewayRequest, PaymentGateway};
use crate::domain::notifier::Notifier;
use crate::domain::payment::{
	PaymentRequest, PaymentType, validate_amount, validate_email,
};
use crate::domain::payment_method::PaymentMethods;
use crate::domain::repository::TransactionRepository;
use crate::domain::transaction::TransactionRecord;
use crate::domain::transaction_log::TransactionLog;

pub struct ProcessPaymentUseCase<R, G, L, N>
where
	R: TransactionRepository,
	G: PaymentGateway,
	L: TransactionLog,
	N: Notifier,
{
	methods:          PaymentMethods,
	repository:       R,
	gateway:          G,
	transaction_log:  L,
	notifier:         N,
	api_key:          String,
	default_currency: String,
}

impl<R, G, L, N> ProcessPaymentUseCase<R, G, L, N>
where
	R: TransactionRepository,
	G: PaymentGateway,
	L: TransactionLog,
	N: Notifier,
{
	pub fn new(
		methods: PaymentMethods,
		repository: R,
		gateway: G,
		transaction_log: L,
		notifier: N,
		api_key: impl Into<String>,
	) -> Self {
		Self {
			methods,
			repository,
			gateway,
			transaction_log,
			notifier,
			api_key: api_key.into(),
			default_currency: crate::config::DEFAULT_CURRENCY.to_string(),
		}
	}

	pub fn with_default_currency(mut self, currency: impl Into<String>) -> Self {
		self.default_currency = currency.into();
		self
	}

	pub fn repository(&self) -> &R {
		&self.repository
	}

	pub fn execute(
		&self,
		request: &PaymentRequest,
	) -> Result<TransactionRecord, PaymentError> {
		self.process(request).inspect_err(|e| {
			warn!(
				"Payment for {} rejected: {e}",
				request.customer_email
			)
		})
	}

	fn with_resolved_currency(&self, request: &PaymentRequest) -> PaymentRequest {
		let mut request = request.clone();
		if request.currency.trim().is_empty() {
			request.currency = self.default_currency.clone();
		}
		request
	}

	fn process(
		&self,
		request: &PaymentRequest,
	) -> Result<TransactionRecord, PaymentError> {
		validate_amount(request.amount)?;
		validate_email(&request.customer_email)?;

		let payment_type: PaymentType = request.payment_type.parse()?;
		let method = self.methods.find(payment_type).ok_or_else(|| {
			PaymentError::UnsupportedPaymentType {
				payment_type: request.payment_type.clone(),
			}
		})?;
		method.validate(&request.details)?;

		let request = self.with_resolved_currency(request);
		let currency = request.currency.clone();

		info!(
			"Processing {payment_type} payment of {:.2} {currency}",
			request.amount
		);

		let response = self.gateway.submit(&GatewayRequest {
			endpoint: method.endpoint().to_string(),
			api_key:  self.api_key.clone(),
			payload:  method.build_payload(&request),
		})?;
		if !response.is_success() {
			return Err(PaymentError::Declined {
				message: response.message,
			});
		}

		let processed_at = OffsetDateTime::now_utc();
		let record = TransactionRecord {
			id: TransactionRecord::generate_id(method.id_prefix(), processed_at),
			payment_type,
			amount: request.amount,
			currency,
			customer_email: request.customer_email.clone(),
			gateway_reference: response.reference,
			processed_at,
		};

		self.repository.save(record.clone())?;
		self.transaction_log.append(&format!(
			"Payment processed: {} | {} | {:.2} {} | {}",
			record.id,
			record.payment_type,
			record.amount,
			record.currency,
			record.customer_email
		))?;
		self.notifier.notify(
			&record.customer_email,
			&format!(
				"Your payment of {:.2} {} was processed ({})",
				record.amount, record.currency, record.id
			),
		)?;

		info!("Payment {} processed", record.id);
		Ok(record)
	}
}

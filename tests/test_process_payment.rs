use payment_kata::domain::errors::PaymentError;
use payment_kata::domain::payment::{PaymentDetails, PaymentType};
use payment_kata::domain::payment_method::PaymentMethods;
use payment_kata::domain::repository::TransactionRepository;
use payment_kata::infrastructure::persistence::in_memory_transaction_repository::InMemoryTransactionRepository;
use payment_kata::use_cases::process_payment::ProcessPaymentUseCase;

mod support;

use crate::support::fakes::{
	RecordingNotifier, RecordingTransactionLog, ScriptedGateway,
};
use crate::support::{bank_transfer_request, credit_card_request, paypal_request};

struct Harness {
	use_case: ProcessPaymentUseCase<
		InMemoryTransactionRepository,
		ScriptedGateway,
		RecordingTransactionLog,
		RecordingNotifier,
	>,
	repository: InMemoryTransactionRepository,
	gateway:    ScriptedGateway,
	log:        RecordingTransactionLog,
	notifier:   RecordingNotifier,
}

fn harness(gateway: ScriptedGateway) -> Harness {
	let repository = InMemoryTransactionRepository::new();
	let log = RecordingTransactionLog::default();
	let notifier = RecordingNotifier::default();
	let use_case = ProcessPaymentUseCase::new(
		PaymentMethods::default(),
		repository.clone(),
		gateway.clone(),
		log.clone(),
		notifier.clone(),
		"sk_test_harness",
	);

	Harness {
		use_case,
		repository,
		gateway,
		log,
		notifier,
	}
}

fn assert_nothing_happened(harness: &Harness) {
	assert!(harness.repository.is_empty());
	assert!(harness.log.lines().is_empty());
	assert!(harness.notifier.sent().is_empty());
}

#[test]
fn test_process_payment_dispatches_on_payment_type() {
	let harness = harness(ScriptedGateway::approving());

	let card = harness.use_case.execute(&credit_card_request(10.0)).unwrap();
	let paypal = harness.use_case.execute(&paypal_request(20.0)).unwrap();
	let bank = harness.use_case.execute(&bank_transfer_request(30.0)).unwrap();

	assert!(card.id.starts_with("CC_"));
	assert_eq!(card.payment_type, PaymentType::CreditCard);
	assert!(paypal.id.starts_with("PP_"));
	assert_eq!(paypal.payment_type, PaymentType::PayPal);
	assert!(bank.id.starts_with("BT_"));
	assert_eq!(bank.payment_type, PaymentType::BankTransfer);

	assert_eq!(harness.gateway.calls(), 3);
	assert_eq!(harness.repository.find_all().unwrap().len(), 3);
}

#[test]
fn test_process_payment_sends_to_method_endpoint_with_api_key() {
	let harness = harness(ScriptedGateway::approving());

	harness.use_case.execute(&paypal_request(20.0)).unwrap();

	let request = harness.gateway.last_request().unwrap();
	assert_eq!(request.endpoint, "https://api.paypal.com/v1/payments/payment");
	assert_eq!(request.api_key, "sk_test_harness");
	assert_eq!(request.payload["payer"]["email"], "jane@paypal.com");
}

#[test]
fn test_process_payment_logs_and_notifies_once() {
	let harness = harness(ScriptedGateway::approving());

	let record = harness.use_case.execute(&credit_card_request(100.0)).unwrap();

	let lines = harness.log.lines();
	assert_eq!(lines.len(), 1);
	assert_eq!(
		lines[0],
		format!(
			"Payment processed: {} | credit_card | 100.00 USD | jane@example.com",
			record.id
		)
	);

	let sent = harness.notifier.sent();
	assert_eq!(sent.len(), 1);
	assert_eq!(sent[0].0, "jane@example.com");
	assert!(sent[0].1.contains("100.00 USD"));
	assert!(sent[0].1.contains(&record.id));
	assert_eq!(record.gateway_reference, "ref-123");
}

#[test]
fn test_non_positive_amount_is_rejected_before_backend_call() {
	let harness = harness(ScriptedGateway::approving());

	for amount in [0.0, -1.0, -0.01, f64::NAN] {
		let result = harness.use_case.execute(&credit_card_request(amount));
		assert!(matches!(result, Err(PaymentError::InvalidAmount { .. })));
	}

	assert_eq!(harness.gateway.calls(), 0);
	assert_nothing_happened(&harness);
}

#[test]
fn test_email_without_at_sign_is_rejected() {
	let harness = harness(ScriptedGateway::approving());
	let mut request = paypal_request(15.0);
	request.customer_email = "jane.example.com".to_string();

	let result = harness.use_case.execute(&request);

	assert!(matches!(result, Err(PaymentError::InvalidEmail { .. })));
	assert_eq!(harness.gateway.calls(), 0);
	assert_nothing_happened(&harness);
}

#[test]
fn test_amount_is_checked_before_email() {
	let harness = harness(ScriptedGateway::approving());
	let mut request = paypal_request(0.0);
	request.customer_email = "nobody".to_string();

	let result = harness.use_case.execute(&request);

	assert!(matches!(result, Err(PaymentError::InvalidAmount { .. })));
}

#[test]
fn test_unsupported_payment_type_is_rejected() {
	let harness = harness(ScriptedGateway::approving());
	let mut request = paypal_request(15.0);
	request.payment_type = "crypto".to_string();

	let result = harness.use_case.execute(&request);

	match result {
		Err(PaymentError::UnsupportedPaymentType { payment_type }) => {
			assert_eq!(payment_type, "crypto")
		}
		other => panic!("unexpected result: {other:?}"),
	}
	assert_eq!(harness.gateway.calls(), 0);
}

#[test]
fn test_type_missing_from_registry_is_unsupported() {
	let gateway = ScriptedGateway::approving();
	let use_case = ProcessPaymentUseCase::new(
		PaymentMethods::empty(),
		InMemoryTransactionRepository::new(),
		gateway.clone(),
		RecordingTransactionLog::default(),
		RecordingNotifier::default(),
		"sk_test",
	);

	let result = use_case.execute(&paypal_request(15.0));

	assert!(matches!(
		result,
		Err(PaymentError::UnsupportedPaymentType { .. })
	));
	assert_eq!(gateway.calls(), 0);
}

#[test]
fn test_each_payment_type_requires_its_fields() {
	let harness = harness(ScriptedGateway::approving());

	let cases = [
		(credit_card_request(10.0), "card_number"),
		(paypal_request(10.0), "paypal_email"),
		(bank_transfer_request(10.0), "account_number"),
	];

	for (mut request, first_field) in cases {
		request.details = PaymentDetails::new();
		match harness.use_case.execute(&request) {
			Err(PaymentError::MissingField { field, .. }) => {
				assert_eq!(field, first_field)
			}
			other => panic!("unexpected result: {other:?}"),
		}
	}

	assert_eq!(harness.gateway.calls(), 0);
	assert_nothing_happened(&harness);
}

#[test]
fn test_details_of_another_method_do_not_count() {
	let harness = harness(ScriptedGateway::approving());
	let mut request = bank_transfer_request(10.0);
	request.details = paypal_request(10.0).details;

	let result = harness.use_case.execute(&request);

	assert!(matches!(result, Err(PaymentError::MissingField { .. })));
}

#[test]
fn test_declined_payment_leaves_no_trace() {
	let harness = harness(ScriptedGateway::declining());

	let result = harness.use_case.execute(&credit_card_request(50.0));

	match result {
		Err(PaymentError::Declined { message }) => {
			assert_eq!(message, "insufficient funds")
		}
		other => panic!("unexpected result: {other:?}"),
	}
	assert_eq!(harness.gateway.calls(), 1);
	assert_nothing_happened(&harness);
}

#[test]
fn test_blank_currency_uses_default() {
	let gateway = ScriptedGateway::approving();
	let use_case = ProcessPaymentUseCase::new(
		PaymentMethods::default(),
		InMemoryTransactionRepository::new(),
		gateway.clone(),
		RecordingTransactionLog::default(),
		RecordingNotifier::default(),
		"sk_test",
	)
	.with_default_currency("CHF");
	let mut request = credit_card_request(10.0);
	request.currency = String::new();

	let record = use_case.execute(&request).unwrap();

	assert_eq!(record.currency, "CHF");
	assert_eq!(use_case.repository().find_all().unwrap()[0].currency, "CHF");

	let sent = gateway.last_request().unwrap();
	assert_eq!(sent.payload["currency"], "CHF");
}

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use payment_kata::domain::errors::PaymentError;
use payment_kata::domain::gateway::{
	GatewayRequest, GatewayResponse, GatewayStatus, PaymentGateway,
};
use payment_kata::domain::notifier::Notifier;
use payment_kata::domain::transaction_log::TransactionLog;

#[derive(Clone, Default)]
pub struct RecordingTransactionLog {
	pub lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingTransactionLog {
	pub fn lines(&self) -> Vec<String> {
		self.lines.lock().unwrap().clone()
	}
}

impl TransactionLog for RecordingTransactionLog {
	fn append(&self, message: &str) -> Result<(), PaymentError> {
		self.lines.lock().unwrap().push(message.to_string());
		Ok(())
	}
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
	pub sent: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingNotifier {
	pub fn sent(&self) -> Vec<(String, String)> {
		self.sent.lock().unwrap().clone()
	}
}

impl Notifier for RecordingNotifier {
	fn notify(&self, recipient: &str, message: &str) -> Result<(), PaymentError> {
		self.sent
			.lock()
			.unwrap()
			.push((recipient.to_string(), message.to_string()));
		Ok(())
	}
}

/// Answers every submission with a fixed status and remembers the requests.
#[derive(Clone)]
pub struct ScriptedGateway {
	status:       GatewayStatus,
	pub calls:    Arc<AtomicUsize>,
	pub requests: Arc<Mutex<Vec<GatewayRequest>>>,
}

impl ScriptedGateway {
	pub fn approving() -> Self {
		Self::with_status(GatewayStatus::Success)
	}

	pub fn declining() -> Self {
		Self::with_status(GatewayStatus::Failed)
	}

	fn with_status(status: GatewayStatus) -> Self {
		Self {
			status,
			calls: Arc::new(AtomicUsize::new(0)),
			requests: Arc::new(Mutex::new(Vec::new())),
		}
	}

	pub fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}

	pub fn last_request(&self) -> Option<GatewayRequest> {
		self.requests.lock().unwrap().last().cloned()
	}
}

impl PaymentGateway for ScriptedGateway {
	fn submit(
		&self,
		request: &GatewayRequest,
	) -> Result<GatewayResponse, PaymentError> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		self.requests.lock().unwrap().push(request.clone());
		Ok(GatewayResponse {
			status:    self.status,
			reference: "ref-123".to_string(),
			message:   match self.status {
				GatewayStatus::Success => "ok".to_string(),
				GatewayStatus::Failed => "insufficient funds".to_string(),
			},
		})
	}
}

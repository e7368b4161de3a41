use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::errors::PaymentError;

#[derive(Debug, Serialize, Clone)]
pub struct GatewayRequest {
	pub endpoint: String,
	#[serde(skip_serializing)]
	pub api_key:  String,
	pub payload:  Value,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GatewayStatus {
	Success,
	Failed,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GatewayResponse {
	pub status:    GatewayStatus,
	pub reference: String,
	#[serde(default)]
	pub message:   String,
}

impl GatewayResponse {
	pub fn is_success(&self) -> bool {
		self.status == GatewayStatus::Success
	}
}

pub trait PaymentGateway: Send + Sync + 'static {
	fn submit(
		&self,
		request: &GatewayRequest,
	) -> Result<GatewayResponse, PaymentError>;
}

use log::{debug, info};
use serde_json::json;
use uuid::Uuid;

use crate::domain::errors::PaymentError;
use crate::domain::gateway::{GatewayRequest, GatewayResponse, PaymentGateway};

/// Stand-in for the real backends. Nothing leaves the process: every
/// submission is answered with a canned success body.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedGateway;

impl SimulatedGateway {
	pub fn new() -> Self {
		Self
	}

	fn canned_response(reference: Uuid) -> String {
		json!({
			"status": "success",
			"reference": reference.to_string(),
			"message": "Payment processed successfully",
		})
		.to_string()
	}
}

impl PaymentGateway for SimulatedGateway {
	fn submit(
		&self,
		request: &GatewayRequest,
	) -> Result<GatewayResponse, PaymentError> {
		if request.api_key.trim().is_empty() {
			return Err(PaymentError::Gateway {
				message: format!("no API key configured for {}", request.endpoint),
			});
		}

		info!("Simulating POST {}", request.endpoint);
		debug!("Payload: {}", request.payload);

		let body = Self::canned_response(Uuid::new_v4());
		serde_json::from_str(&body).map_err(|e| PaymentError::Gateway {
			message: format!("unreadable response from {}: {e}", request.endpoint),
		})
	}
}

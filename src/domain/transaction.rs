use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::payment::PaymentType;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TransactionRecord {
	pub id:                String,
	pub payment_type:      PaymentType,
	pub amount:            f64,
	pub currency:          String,
	pub customer_email:    String,
	pub gateway_reference: String,
	#[serde(with = "time::serde::rfc3339")]
	pub processed_at:      OffsetDateTime,
}

impl TransactionRecord {
	/// `PREFIX_<unix millis>`. Two payments of the same type in the same
	/// millisecond get the same id.
	pub fn generate_id(prefix: &str, at: OffsetDateTime) -> String {
		format!("{prefix}_{}", at.unix_timestamp_nanos() / 1_000_000)
	}
}

use serde_json::Value;

use crate::domain::errors::PaymentError;
use crate::domain::payment::{PaymentDetails, PaymentRequest, PaymentType};

pub trait PaymentMethod: Send + Sync + 'static {
	fn payment_type(&self) -> PaymentType;

	/// Prefix used for the ids of transactions made with this method.
	fn id_prefix(&self) -> &'static str;

	fn endpoint(&self) -> &'static str;

	fn required_fields(&self) -> &'static [&'static str];

	fn validate(&self, details: &PaymentDetails) -> Result<(), PaymentError> {
		match self
			.required_fields()
			.iter()
			.copied()
			.find(|field| !details.contains(field))
		{
			Some(field) => Err(PaymentError::MissingField {
				payment_type: self.payment_type(),
				field,
			}),
			None => Ok(()),
		}
	}

	/// Body sent to the backend. Must not carry secrets such as the CVV.
	fn build_payload(&self, request: &PaymentRequest) -> Value;
}

/// Dispatch table from payment type to the method that handles it.
pub struct PaymentMethods {
	methods: Vec<Box<dyn PaymentMethod>>,
}

impl PaymentMethods {
	pub fn empty() -> Self {
		Self {
			methods: Vec::new(),
		}
	}

	/// Registers a method, replacing any previous one for the same type.
	pub fn register(mut self, method: impl PaymentMethod) -> Self {
		self.methods
			.retain(|existing| existing.payment_type() != method.payment_type());
		self.methods.push(Box::new(method));
		self
	}

	pub fn find(&self, payment_type: PaymentType) -> Option<&dyn PaymentMethod> {
		self.methods
			.iter()
			.find(|method| method.payment_type() == payment_type)
			.map(|method| &**method)
	}

	pub fn len(&self) -> usize {
		self.methods.len()
	}

	pub fn is_empty(&self) -> bool {
		self.methods.is_empty()
	}
}

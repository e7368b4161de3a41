use serde::{Deserialize, Serialize};

/// Percentage charged on every processed amount.
pub const FEE_RATE: f64 = 0.029;
/// Flat fee added on top of the percentage.
pub const FIXED_FEE: f64 = 0.30;

pub fn calculate_fee(amount: f64) -> f64 {
	amount * FEE_RATE + FIXED_FEE
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CustomerTier {
	Gold,
	Silver,
	Bronze,
	#[default]
	Standard,
}

impl CustomerTier {
	pub fn discount_multiplier(&self) -> f64 {
		match self {
			CustomerTier::Gold => 0.95,
			CustomerTier::Silver => 0.97,
			CustomerTier::Bronze => 0.99,
			CustomerTier::Standard => 1.0,
		}
	}

	pub fn apply(&self, amount: f64) -> f64 {
		amount * self.discount_multiplier()
	}
}

impl From<&str> for CustomerTier {
	/// Unknown tiers get no discount.
	fn from(value: &str) -> Self {
		match value.trim().to_ascii_lowercase().as_str() {
			"gold" => CustomerTier::Gold,
			"silver" => CustomerTier::Silver,
			"bronze" => CustomerTier::Bronze,
			_ => CustomerTier::Standard,
		}
	}
}

pub fn apply_tier_discount(amount: f64, tier: &str) -> f64 {
	CustomerTier::from(tier).apply(amount)
}

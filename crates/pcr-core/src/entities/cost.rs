use serde::{Deserialize, Serialize};

/// Amounts actually paid out for a study, in minor currency units.
///
/// Kept as `f64` because the platform may send either `7000` or `7000.0`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct CostBreakdown {
    pub reward: f64,
    pub bonus: f64,
}

impl CostBreakdown {
    #[must_use]
    pub fn total_payout(&self) -> f64 {
        self.reward + self.bonus
    }
}

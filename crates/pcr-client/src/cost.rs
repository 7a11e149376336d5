//! Study cost breakdown.

use pcr_core::CostBreakdown;

use crate::{ClientError, ProlificClient};

#[derive(serde::Deserialize)]
struct CostResponse {
    rewards: CostSection,
    bonuses: CostSection,
}

#[derive(serde::Deserialize)]
struct CostSection {
    rewards: Amount,
}

#[derive(serde::Deserialize)]
struct Amount {
    amount: f64,
}

impl From<CostResponse> for CostBreakdown {
    fn from(data: CostResponse) -> Self {
        Self {
            reward: data.rewards.rewards.amount,
            bonus: data.bonuses.rewards.amount,
        }
    }
}

impl ProlificClient {
    /// Fetch what has been paid out for a study, split into rewards and bonuses.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API returns a
    /// non-success status, or the breakdown is missing either amount.
    pub async fn fetch_study_cost(&self, study_id: &str) -> Result<CostBreakdown, ClientError> {
        let url = self.endpoint(&["studies", study_id, "cost"])?;
        let data: CostResponse = self.get_json(url).await?;
        Ok(data.into())
    }
}

use serde::Deserialize;

/// Server-computed running total of income minus outgoing amounts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Balance {
    pub balance: f64,
    #[serde(rename = "_id", default)]
    pub record_id: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceTrend {
    Positive,
    Negative,
    Zero,
}

impl Balance {
    pub fn trend(&self) -> BalanceTrend {
        if self.balance > 0.0 {
            BalanceTrend::Positive
        } else if self.balance < 0.0 {
            BalanceTrend::Negative
        } else {
            BalanceTrend::Zero
        }
    }
}

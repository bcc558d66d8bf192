use serde::{Deserialize, Serialize};

/// Whether importing raw sugar is currently profitable against the domestic price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowStatus {
    Open,
    Closed,
}

impl WindowStatus {
    pub fn is_open(&self) -> bool {
        matches!(self, WindowStatus::Open)
    }
}

/// Banded strength of a Pearson coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CorrelationStrength {
    Weak,
    ModeratePositive,
    ModerateNegative,
    StrongPositive,
    StrongNegative,
}

impl CorrelationStrength {
    /// The label shown on the macro-driver cards.
    pub fn label(&self) -> &'static str {
        match self {
            CorrelationStrength::Weak => "弱相关",
            CorrelationStrength::ModeratePositive => "中等正相关",
            CorrelationStrength::ModerateNegative => "中等负相关",
            CorrelationStrength::StrongPositive => "强正相关",
            CorrelationStrength::StrongNegative => "强负相关",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            CorrelationStrength::StrongPositive | CorrelationStrength::StrongNegative => "#007AFF",
            CorrelationStrength::ModeratePositive | CorrelationStrength::ModerateNegative => {
                "#FF9500"
            }
            CorrelationStrength::Weak => "#86868B",
        }
    }
}

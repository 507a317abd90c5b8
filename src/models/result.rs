use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 订单校验失败原因
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidOrder {
    #[error("country is missing")]
    MissingCountry,

    #[error("no tax rate for country {0:?}")]
    UnknownCountry(String),

    #[error("reduction is missing")]
    MissingReduction,

    #[error("quantities are missing")]
    MissingQuantities,

    #[error("prices are missing")]
    MissingPrices,

    #[error("{quantities} quantities for {prices} prices")]
    LengthMismatch { quantities: usize, prices: usize },

    #[error("unknown reduction {0:?}")]
    UnknownReduction(String),
}

/// 定价结果: 算出总价, 或者 "无结果" (附带原因)
///
/// `Invalid` 与总价为 0 不同。
#[derive(Debug, Clone, PartialEq)]
pub enum PricingResult {
    Computed(f64),
    Invalid(InvalidOrder),
}

impl PricingResult {
    pub fn total(&self) -> Option<f64> {
        match self {
            PricingResult::Computed(total) => Some(*total),
            PricingResult::Invalid(_) => None,
        }
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, PricingResult::Computed(_))
    }
}

/// 响应体: `{"total": n}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderTotal {
    pub total: f64,
}

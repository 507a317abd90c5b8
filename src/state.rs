use crate::config::AppConfig;
use crate::service::PricingEngine;
use crate::taxes::{TaxTableError, TaxTableStore};
use std::sync::Arc;

/// 共享状态
#[derive(Clone)]
pub struct AppState {
    pub engine: PricingEngine,
    pub taxes: Arc<TaxTableStore>,
    /// 订单失败时返回 200 空响应 (兼容旧客户端)
    pub legacy_responses: bool,
}

impl AppState {
    pub fn new(taxes: TaxTableStore, legacy_responses: bool) -> Self {
        Self {
            engine: PricingEngine::new(),
            taxes: Arc::new(taxes),
            legacy_responses,
        }
    }

    /// 按配置加载税率表并构建状态
    pub async fn from_config(config: &AppConfig) -> Result<Self, TaxTableError> {
        let taxes = TaxTableStore::open(&config.taxes.path)
            .await?
            .reload_per_request(config.taxes.reload_per_request);
        Ok(Self::new(taxes, config.pricing.legacy_responses))
    }
}

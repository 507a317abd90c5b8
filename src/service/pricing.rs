use crate::models::{InvalidOrder, Order, PricingResult, Reduction};
use crate::taxes::TaxTable;

/// STANDARD 阶梯折扣: (门槛, 乘数), 从高到低, 只命中第一档
const STANDARD_TIERS: [(f64, f64); 5] = [
    (50_000.0, 0.85),
    (10_000.0, 0.90),
    (7_000.0, 0.93),
    (5_000.0, 0.95),
    (1_000.0, 0.97),
];

/// 定价引擎 (无状态, 可并发调用)
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingEngine;

/// 通过校验的订单
struct ValidOrder<'a> {
    rate: f64,
    reduction: Reduction,
    quantities: &'a [i64],
    prices: &'a [f64],
}

impl PricingEngine {
    pub fn new() -> Self {
        Self
    }

    /// 计算订单总价: 含税小计再按折扣策略调整
    ///
    /// 任一校验不通过时返回 `PricingResult::Invalid`, 不做任何计算。
    pub fn price(&self, order: &Order, taxes: &TaxTable) -> PricingResult {
        match validate(order, taxes) {
            Ok(valid) => PricingResult::Computed(compute(&valid)),
            Err(reason) => {
                tracing::debug!("Order rejected: {}", reason);
                PricingResult::Invalid(reason)
            }
        }
    }
}

fn validate<'a>(order: &'a Order, taxes: &TaxTable) -> Result<ValidOrder<'a>, InvalidOrder> {
    let country = order.country.as_deref().ok_or(InvalidOrder::MissingCountry)?;
    let rate = taxes
        .lookup(country)
        .ok_or_else(|| InvalidOrder::UnknownCountry(country.to_string()))?;
    let code = order.reduction.as_deref().ok_or(InvalidOrder::MissingReduction)?;
    let quantities = order.quantities.as_deref().ok_or(InvalidOrder::MissingQuantities)?;
    let prices = order.prices.as_deref().ok_or(InvalidOrder::MissingPrices)?;

    if quantities.len() != prices.len() {
        return Err(InvalidOrder::LengthMismatch {
            quantities: quantities.len(),
            prices: prices.len(),
        });
    }

    let reduction = code
        .parse::<Reduction>()
        .map_err(|_| InvalidOrder::UnknownReduction(code.to_string()))?;

    Ok(ValidOrder {
        rate,
        reduction,
        quantities,
        prices,
    })
}

fn compute(order: &ValidOrder<'_>) -> f64 {
    let raw_total: f64 = order
        .prices
        .iter()
        .zip(order.quantities)
        .map(|(price, qty)| price * *qty as f64)
        .sum();

    apply_reduction(order.reduction, raw_total * order.rate)
}

/// 对含税总价应用折扣
pub fn apply_reduction(reduction: Reduction, taxed_total: f64) -> f64 {
    match reduction {
        Reduction::Standard => STANDARD_TIERS
            .iter()
            .find(|(threshold, _)| taxed_total >= *threshold)
            .map_or(taxed_total, |(_, factor)| taxed_total * factor),
        Reduction::HalfPrice => taxed_total / 2.0,
        Reduction::PayThePrice => taxed_total,
    }
}

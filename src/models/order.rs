use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// 订单 (请求体原样反序列化, 字段均可为空, 校验由定价引擎负责)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub country: Option<String>,
    pub reduction: Option<String>,
    #[serde(default, deserialize_with = "lenient_quantities")]
    pub quantities: Option<Vec<i64>>,
    pub prices: Option<Vec<f64>>,
}

/// 数量允许写成小数, 截断取整 (`2.0` -> 2, `2.7` -> 2)
fn lenient_quantities<'de, D>(deserializer: D) -> Result<Option<Vec<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Quantity {
        Int(i64),
        Float(f64),
    }

    let raw = Option::<Vec<Quantity>>::deserialize(deserializer)?;
    Ok(raw.map(|quantities| {
        quantities
            .into_iter()
            .map(|q| match q {
                Quantity::Int(n) => n,
                Quantity::Float(f) => f.trunc() as i64,
            })
            .collect()
    }))
}

/// 折扣策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    /// 阶梯折扣
    Standard,
    /// 半价
    HalfPrice,
    /// 原价
    PayThePrice,
}

impl Reduction {
    pub fn code(self) -> &'static str {
        match self {
            Reduction::Standard => "STANDARD",
            Reduction::HalfPrice => "HALF PRICE",
            Reduction::PayThePrice => "PAY THE PRICE",
        }
    }
}

impl fmt::Display for Reduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Reduction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STANDARD" => Ok(Reduction::Standard),
            "HALF PRICE" => Ok(Reduction::HalfPrice),
            "PAY THE PRICE" => Ok(Reduction::PayThePrice),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduction_codes_are_exact() {
        assert_eq!("STANDARD".parse::<Reduction>(), Ok(Reduction::Standard));
        assert_eq!("HALF PRICE".parse::<Reduction>(), Ok(Reduction::HalfPrice));
        assert_eq!("PAY THE PRICE".parse::<Reduction>(), Ok(Reduction::PayThePrice));
        assert_eq!("standard".parse::<Reduction>(), Err(()));
        assert_eq!("HALF_PRICE".parse::<Reduction>(), Err(()));
    }

    #[test]
    fn test_order_with_missing_fields() {
        let order: Order = serde_json::from_str(r#"{"country":"US","prices":null}"#).unwrap();
        assert_eq!(order.country.as_deref(), Some("US"));
        assert!(order.reduction.is_none());
        assert!(order.quantities.is_none());
        assert!(order.prices.is_none());
    }

    #[test]
    fn test_order_full_body() {
        let order: Order = serde_json::from_str(
            r#"{"country":"FR","reduction":"STANDARD","quantities":[2,1],"prices":[100,15.5]}"#,
        )
        .unwrap();
        assert_eq!(order.quantities, Some(vec![2, 1]));
        assert_eq!(order.prices, Some(vec![100.0, 15.5]));
    }

    #[test]
    fn test_fractional_quantities_are_truncated() {
        let order: Order =
            serde_json::from_str(r#"{"quantities":[2.0,2.7,3],"prices":[1,1,1]}"#).unwrap();
        assert_eq!(order.quantities, Some(vec![2, 2, 3]));
    }

    #[test]
    fn test_non_numeric_quantity_is_rejected() {
        assert!(serde_json::from_str::<Order>(r#"{"quantities":["two"]}"#).is_err());
    }
}

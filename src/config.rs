use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 配置文件名 (不含扩展名, 可选)
const CONFIG_FILE: &str = "pricing";
/// 环境变量前缀, 如 PRICING_SERVER__PORT=9000
const ENV_PREFIX: &str = "PRICING";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub taxes: TaxConfig,
    pub pricing: PricingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxConfig {
    /// 税率文件, 每行 `<country>,<rate>`
    pub path: PathBuf,
    /// 每个订单请求都重新读取税率文件
    pub reload_per_request: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// 订单无效时返回 200 空响应, 而不是 400/500
    pub legacy_responses: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 9000,
            },
            taxes: TaxConfig {
                path: PathBuf::from("countries.csv"),
                reload_per_request: false,
            },
            pricing: PricingConfig {
                legacy_responses: true,
            },
        }
    }
}

impl AppConfig {
    /// 加载配置: 默认值 -> pricing.{toml,json,...} -> 环境变量
    pub fn load() -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let d = Self::default();
        Config::builder()
            .set_default("server.host", d.server.host)?
            .set_default("server.port", i64::from(d.server.port))?
            .set_default("taxes.path", d.taxes.path.to_string_lossy().into_owned())?
            .set_default("taxes.reload_per_request", d.taxes.reload_per_request)?
            .set_default("pricing.legacy_responses", d.pricing.legacy_responses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> AppConfig {
        AppConfig::defaults()
            .unwrap()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        assert_eq!(from_toml(""), AppConfig::default());
        assert_eq!(AppConfig::default().addr(), "0.0.0.0:9000");
    }

    #[test]
    fn test_partial_override() {
        let config = from_toml(
            r#"
            [server]
            port = 8080

            [taxes]
            path = "/etc/pricing/countries.csv"

            [pricing]
            legacy_responses = false
            "#,
        );
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.taxes.path, PathBuf::from("/etc/pricing/countries.csv"));
        assert!(!config.taxes.reload_per_request);
        assert!(!config.pricing.legacy_responses);
    }
}

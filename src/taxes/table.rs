use indexmap::IndexMap;
use std::num::ParseFloatError;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// 税率表加载错误
#[derive(Debug, Error)]
pub enum TaxTableError {
    #[error("failed to read tax table {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: missing ',' between country and rate")]
    MissingRate { line: usize },

    #[error("line {line}: invalid rate {value:?}: {source}")]
    InvalidRate {
        line: usize,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("line {line}: rate {value:?} is not a finite number")]
    NonFiniteRate { line: usize, value: String },

    #[error("tax table has no backing file to reload from")]
    NoSource,
}

/// 国家 -> 税率 (乘数, 如 1.2 表示加 20% 税)
///
/// 构建后不可变; 迭代顺序为国家在源数据中首次出现的顺序。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaxTable {
    rates: IndexMap<String, f64>,
}

impl TaxTable {
    /// 逐行解析 `<country>,<rate>`
    ///
    /// 按第一个逗号切分, 两侧去空白。重复的国家以最后一次为准。
    /// 任意一行税率非法则整体失败, 不做部分加载。空行跳过。
    pub fn from_lines<I, S>(lines: I) -> Result<Self, TaxTableError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rates = IndexMap::new();

        for (idx, raw) in lines.into_iter().enumerate() {
            let line = idx + 1;
            let raw = raw.as_ref();
            if raw.trim().is_empty() {
                continue;
            }

            let Some((country, value)) = raw.split_once(',') else {
                return Err(TaxTableError::MissingRate { line });
            };
            let value = value.trim();
            let rate: f64 = value.parse().map_err(|source| TaxTableError::InvalidRate {
                line,
                value: value.to_string(),
                source,
            })?;
            if !rate.is_finite() {
                return Err(TaxTableError::NonFiniteRate {
                    line,
                    value: value.to_string(),
                });
            }

            rates.insert(country.trim().to_string(), rate);
        }

        Ok(Self { rates })
    }

    /// 查询税率, 未知国家返回 None (不是 0)
    pub fn lookup(&self, country: &str) -> Option<f64> {
        self.rates.get(country).copied()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.rates.iter().map(|(country, rate)| (country.as_str(), *rate))
    }

    /// 导出为与加载格式相同的 CSV (无表头)
    pub fn to_csv(&self) -> Result<String, csv::Error> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());

        for (country, rate) in self.iter() {
            writer.write_record([country, rate.to_string().as_str()])?;
        }

        writer.flush()?;
        let bytes = writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl FromStr for TaxTable {
    type Err = TaxTableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_lines(s.lines())
    }
}

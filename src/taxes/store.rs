use super::table::{TaxTable, TaxTableError};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

/// 税率表持有者: 启动时加载一次, 之后共享只读快照, 支持显式重载
pub struct TaxTableStore {
    source: Option<PathBuf>,
    reload_per_request: bool,
    current: RwLock<Arc<TaxTable>>,
}

impl TaxTableStore {
    /// 从文件加载
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, TaxTableError> {
        let path = path.into();
        let table = load_file(&path).await?;
        Ok(Self {
            source: Some(path),
            reload_per_request: false,
            current: RwLock::new(Arc::new(table)),
        })
    }

    /// 无文件来源的内存表 (不可重载)
    pub fn in_memory(table: TaxTable) -> Self {
        Self {
            source: None,
            reload_per_request: false,
            current: RwLock::new(Arc::new(table)),
        }
    }

    /// 每次订单请求都重新读取文件 (兼容旧行为)
    pub fn reload_per_request(mut self, enabled: bool) -> Self {
        self.reload_per_request = enabled;
        self
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub async fn current(&self) -> Arc<TaxTable> {
        self.current.read().await.clone()
    }

    /// 重新读取文件并替换快照; 失败时保留旧表
    pub async fn reload(&self) -> Result<Arc<TaxTable>, TaxTableError> {
        let path = self.source.as_deref().ok_or(TaxTableError::NoSource)?;
        let table = Arc::new(load_file(path).await?);

        *self.current.write().await = table.clone();
        tracing::info!("Tax table reloaded from {:?}: {} countries", path, table.len());
        Ok(table)
    }

    /// 订单请求使用的税率表
    pub async fn for_request(&self) -> Result<Arc<TaxTable>, TaxTableError> {
        if self.reload_per_request {
            self.reload().await
        } else {
            Ok(self.current().await)
        }
    }
}

async fn load_file(path: &Path) -> Result<TaxTable, TaxTableError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| TaxTableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    text.parse()
}

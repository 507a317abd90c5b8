pub mod handlers;

pub use handlers::*;

use crate::state::AppState;
use axum::{
    routing::{any, get, post},
    Router,
};

/// 构建路由
///
/// `/ping`, `/feedback`, `/order` 接受任意方法 (非法请求在兼容模式下同样返回 200 空响应)。
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ping", any(ping))
        .route("/feedback", any(feedback))
        .route("/order", any(order))
        .route("/taxes", get(export_taxes))
        .route("/taxes/reload", post(reload_taxes))
        .with_state(state)
}

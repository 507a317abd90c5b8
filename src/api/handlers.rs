use crate::error::ApiError;
use crate::models::{FeedbackMessage, Order, OrderTotal, PricingResult};
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Json, State},
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// 重载响应体
#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub countries: usize,
}

/// 健康检查
pub async fn ping() -> &'static str {
    "pong"
}

/// 反馈: 只记日志, 总是返回 200
pub async fn feedback(body: Bytes) -> StatusCode {
    match serde_json::from_slice::<FeedbackMessage>(&body) {
        Ok(message) => tracing::info!("{}: {}", message.kind, message.content),
        Err(e) => tracing::error!("{}", e),
    }
    StatusCode::OK
}

/// 订单定价
pub async fn order(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    tracing::info!("{} {} {}", method, uri.path(), String::from_utf8_lossy(&body));

    match price_order(&state, &body).await {
        Ok(total) => (StatusCode::OK, Json(OrderTotal { total })).into_response(),
        Err(e) if state.legacy_responses => {
            tracing::warn!("Order not priced: {}", e);
            StatusCode::OK.into_response()
        }
        Err(e) => e.into_response(),
    }
}

async fn price_order(state: &AppState, body: &[u8]) -> Result<f64, ApiError> {
    let order: Order = serde_json::from_slice(body)?;
    tracing::info!("Unserialized order: {:?}", order);

    let taxes = state.taxes.for_request().await?;
    match state.engine.price(&order, &taxes) {
        PricingResult::Computed(total) => Ok(total),
        PricingResult::Invalid(reason) => Err(reason.into()),
    }
}

/// 导出当前税率表 (CSV)
pub async fn export_taxes(State(state): State<AppState>) -> Result<Response, ApiError> {
    let csv = state.taxes.current().await.to_csv()?;
    Ok(([(header::CONTENT_TYPE, "text/csv; charset=utf-8")], csv).into_response())
}

/// 从文件重新加载税率表
pub async fn reload_taxes(
    State(state): State<AppState>,
) -> Result<Json<ReloadResponse>, ApiError> {
    let table = state.taxes.reload().await?;
    Ok(Json(ReloadResponse {
        countries: table.len(),
    }))
}

use crate::models::InvalidOrder;
use crate::taxes::TaxTableError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// 接口层错误 (显式模式下映射为 4xx/5xx)
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("malformed order: {0}")]
    MalformedOrder(#[from] serde_json::Error),

    #[error("invalid order: {0}")]
    InvalidOrder(#[from] InvalidOrder),

    #[error("tax table unavailable: {0}")]
    TaxTable(#[from] TaxTableError),

    #[error("tax table export failed: {0}")]
    Export(#[from] csv::Error),
}

/// 错误响应体
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedOrder(_) | ApiError::InvalidOrder(_) => StatusCode::BAD_REQUEST,
            ApiError::TaxTable(_) | ApiError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

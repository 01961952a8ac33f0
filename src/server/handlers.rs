//! 登录 API Handler 函数

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::{json, Value};

use crate::oauth::{LoginError, LoginOutcome};

use super::middleware::AppState;
use super::types::{ErrorResponse, LoginResponse};

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// POST /v1/login/access-token
///
/// 请求体即原始登录参数（`serviceName`、`accessToken` 等）
pub async fn login_with_access_token(
    State(state): State<AppState>,
    Json(options): Json<Value>,
) -> Response {
    match state.dispatcher.handle_login(&options).await {
        Ok(Some(LoginOutcome::LoggedIn(result))) => {
            tracing::info!("access token 登录成功: user={}", result.user_id);
            Json(LoginResponse {
                login_type: "oauth",
                user_id: result.user_id,
                is_new: result.is_new,
            })
            .into_response()
        }
        Ok(Some(LoginOutcome::Cancelled(cancelled))) => {
            (StatusCode::FORBIDDEN, Json(cancelled)).into_response()
        }
        Ok(None) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::invalid_request("没有可处理该登录请求的 handler")),
        )
            .into_response(),
        Err(e) => login_error_response(e),
    }
}

fn login_error_response(err: LoginError) -> Response {
    if err.is_client_error() {
        tracing::warn!("登录请求无效: {}", err);
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::invalid_request(err.to_string())),
        )
            .into_response();
    }

    // 细节只进日志
    tracing::error!("access token 登录失败: {:#}", anyhow::Error::new(err));
    (StatusCode::UNAUTHORIZED, Json(ErrorResponse::login_failed())).into_response()
}

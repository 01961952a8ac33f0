//! 登录 API 路由配置

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::oauth::LoginDispatcher;

use super::{
    handlers::{health, login_with_access_token},
    middleware::{auth_middleware, cors_layer, AppState},
};

/// 创建登录 API 路由
///
/// # 端点
/// - `GET /health` - 存活检查
/// - `POST /v1/login/access-token` - access token 登录
///
/// # 认证
/// 配置了 `api_key` 时，`/v1` 路径需要 `x-api-key` 或 `Authorization: Bearer` 认证
pub fn create_router(api_key: Option<String>, dispatcher: Arc<LoginDispatcher>) -> Router {
    let mut state = AppState::new(dispatcher);
    if let Some(key) = api_key {
        state = state.with_api_key(key);
    }

    let v1_routes = Router::new()
        .route("/login/access-token", post(login_with_access_token))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health))
        .nest("/v1", v1_routes)
        .layer(cors_layer())
        .with_state(state)
}

//! 登录 HTTP 服务
//!
//! # 端点
//! - `GET /health` - 存活检查
//! - `POST /v1/login/access-token` - access token 登录
//!
//! # 使用示例
//! ```rust,ignore
//! use custom_oauth_login::server;
//!
//! let app = server::create_router(None, dispatcher);
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, app).await?;
//! ```

mod handlers;
mod middleware;
mod router;
pub mod types;

pub use router::create_router;

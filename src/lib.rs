//! 自定义 OAuth access token 登录服务

pub mod http_client;
pub mod model;
pub mod oauth;
pub mod server;

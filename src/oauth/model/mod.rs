//! 登录流程数据模型
//!
//! - `service_config`: OAuth 服务配置与 secret 包装
//! - `request`: access token 登录请求
//! - `introspection`: RFC 7662 introspection
//! - `identity`: 外部 identity 与字段别名
//! - `service_data`: 归一化输出

pub mod identity;
pub mod introspection;
pub mod request;
pub mod service_config;
pub mod service_data;

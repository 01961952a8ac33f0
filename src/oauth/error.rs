//! 登录流程错误类型

use http::StatusCode;
use serde::Serialize;

/// 中止登录的错误
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// 登录参数形状不合法，未发起任何外呼
    #[error("登录参数校验失败: {0}")]
    Validation(String),

    /// identity 获取失败
    #[error("从自定义 OAuth 服务 {service} 获取 identity 失败: {message}")]
    IdentityFetch {
        service: String,
        message: String,
        status: Option<StatusCode>,
        body: Option<String>,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// 配置缺失或无法计算过期时间等
    #[error("配置错误: {0}")]
    Configuration(String),

    /// 既没有注册 handler 也没有服务配置
    #[error("未知的 AccessToken 服务: {0}")]
    UnexpectedService(String),

    /// 有 handler 但没有服务配置
    #[error("服务未配置: {0}")]
    ServiceNotConfigured(String),

    /// 账号系统拒绝创建或更新用户
    #[error("账号系统处理失败")]
    Host(#[source] anyhow::Error),
}

impl LoginError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// 传输层失败（连接、超时、响应体解析）
    pub fn identity_transport(service: &str, err: reqwest::Error) -> Self {
        Self::IdentityFetch {
            service: service.to_string(),
            message: err.to_string(),
            status: err.status(),
            body: None,
            source: Some(err),
        }
    }

    /// 上游返回非 2xx
    pub fn identity_status(service: &str, status: StatusCode, body: String) -> Self {
        Self::IdentityFetch {
            service: service.to_string(),
            message: format!("上游返回 {}", status),
            status: Some(status),
            body: Some(body),
            source: None,
        }
    }

    /// 是否应以参数错误返回给客户端
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// introspection 失败，只记录日志不中止登录
#[derive(Debug, thiserror::Error)]
pub enum IntrospectionError {
    #[error("无法解开 {service} 的 client secret")]
    Secret {
        service: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("从自定义 OAuth 服务 {service} 获取 tokeninfo 失败")]
    Transport {
        service: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("从自定义 OAuth 服务 {service} 获取 tokeninfo 失败: {status} {body}")]
    Status {
        service: String,
        status: StatusCode,
        body: String,
    },

    #[error("{service} 报告 token 已失效")]
    Inactive { service: String },
}

/// `Accounts.LoginCancelledError` 的数字错误码
pub const LOGIN_CANCELLED_NUMERIC_ERROR: u32 = 0x8acdc2f;

/// 登录被取消，作为结构化结果返回给客户端而不是错误
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginCancelled {
    #[serde(rename = "type")]
    pub login_type: &'static str,
    pub error: CancelledDetail,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CancelledDetail {
    pub error: u32,
    pub reason: String,
}

impl LoginCancelled {
    /// 服务名不在已注册的 OAuth 服务列表中
    pub fn unregistered_service(service_name: &str) -> Self {
        Self {
            login_type: "oauth",
            error: CancelledDetail {
                error: LOGIN_CANCELLED_NUMERIC_ERROR,
                reason: format!("No registered oauth service found for: {}", service_name),
            },
        }
    }
}

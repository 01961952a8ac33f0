//! 登录 API 类型定义

use serde::Serialize;

/// API 错误响应
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// 错误详情
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                error_type: error_type.into(),
                message: message.into(),
            },
        }
    }

    /// 调用方 API Key 无效
    pub fn authentication_error() -> Self {
        Self::new("authentication_error", "Invalid API key")
    }

    /// 登录失败，不向终端用户暴露细节
    pub fn login_failed() -> Self {
        Self::new("authentication_error", "Authentication failed")
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new("invalid_request_error", message)
    }
}

/// 登录成功响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(rename = "type")]
    pub login_type: &'static str,
    pub user_id: String,
    pub is_new: bool,
}

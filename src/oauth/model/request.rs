//! Access token 登录请求

use serde_json::{Map, Value};

use crate::oauth::error::LoginError;

/// 客户端直接提交的 access token 登录请求
///
/// 只能通过 [`AccessTokenRequest::from_value`] 从原始登录参数构造，
/// 构造成功即代表形状校验通过
#[derive(Debug, Clone, PartialEq)]
pub struct AccessTokenRequest {
    pub service_name: String,
    pub access_token: String,
    /// 剩余有效期（秒）
    pub expires_in: Option<u64>,
    pub scope: Option<String>,
    /// 客户端预先获取的 identity
    pub identity: Option<Map<String, Value>>,
    pub refresh_token: Option<String>,
}

impl AccessTokenRequest {
    /// 校验并解析登录参数
    ///
    /// 未知字段忽略；`null` 与缺省等价
    pub fn from_value(options: &Value) -> Result<Self, LoginError> {
        let obj = options
            .as_object()
            .ok_or_else(|| LoginError::validation("登录参数必须是对象"))?;

        let service_name = match field(obj, "serviceName") {
            Some(Value::String(s)) => s.clone(),
            Some(_) => return Err(LoginError::validation("serviceName 必须是字符串")),
            None => return Err(LoginError::validation("缺少 serviceName")),
        };

        let access_token = match field(obj, "accessToken") {
            Some(Value::String(s)) => s.clone(),
            Some(_) => return Err(LoginError::validation("accessToken 必须是字符串")),
            None => return Err(LoginError::validation("缺少 accessToken")),
        };

        let expires_in = match field(obj, "expiresIn") {
            Some(v) => Some(
                whole_seconds(v)
                    .ok_or_else(|| LoginError::validation("expiresIn 必须是非负整数"))?,
            ),
            None => None,
        };

        let scope = optional_string(obj, "scope")?;
        let refresh_token = optional_string(obj, "refreshToken")?;

        let identity = match field(obj, "identity") {
            Some(Value::Object(map)) => Some(map.clone()),
            Some(_) => return Err(LoginError::validation("identity 必须是对象")),
            None => None,
        };

        Ok(Self {
            service_name,
            access_token,
            expires_in,
            scope,
            identity,
            refresh_token,
        })
    }

    /// 请求自带的 scope，空白字符串视为未提供
    pub fn requested_scope(&self) -> Option<&str> {
        self.scope.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// 有效期或 scope 任一缺失时需要 introspection
    pub fn needs_introspection(&self) -> bool {
        self.expires_in.is_none() || self.requested_scope().is_none()
    }
}

fn field<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| !v.is_null())
}

/// 非负整数，允许小数部分为 0 的浮点数（如 `3600.0`）
fn whole_seconds(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 {
        Some(f as u64)
    } else {
        None
    }
}

fn optional_string(obj: &Map<String, Value>, key: &str) -> Result<Option<String>, LoginError> {
    match field(obj, key) {
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(LoginError::validation(format!("{} 必须是字符串", key))),
        None => Ok(None),
    }
}

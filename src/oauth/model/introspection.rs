use serde::{Deserialize, Serialize};

/// RFC 7662 introspection 请求体（form 编码）
#[derive(Debug, Serialize)]
pub struct IntrospectionRequest<'a> {
    pub token: &'a str,
    pub token_type_hint: &'a str,
}

impl<'a> IntrospectionRequest<'a> {
    pub fn access_token(token: &'a str) -> Self {
        Self {
            token,
            token_type_hint: "access_token",
        }
    }
}

/// RFC 7662 introspection 响应，只关心过期时间和 scope
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TokenIntrospection {
    #[serde(default)]
    pub active: Option<bool>,
    /// 绝对过期时间（epoch 秒）
    #[serde(default)]
    pub exp: Option<i64>,
    /// 空格分隔的 scope
    #[serde(default)]
    pub scope: Option<String>,
}

impl TokenIntrospection {
    /// 授权服务器明确声明 token 无效
    pub fn is_inactive(&self) -> bool {
        self.active == Some(false)
    }

    /// 过期时间（epoch 毫秒）
    ///
    /// 部分授权服务器用 0 表示永不过期，非正值视为未提供
    pub fn expires_at_millis(&self) -> Option<i64> {
        self.exp
            .filter(|exp| *exp > 0)
            .map(|exp| exp.saturating_mul(1000))
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref().filter(|s| !s.trim().is_empty())
    }
}

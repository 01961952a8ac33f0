//! OAuth 服务配置
//!
//! 由配置存储持有，登录流程只读

use serde::Deserialize;
use std::fmt;

/// 加密包装后的 client secret
///
/// 明文只能通过 [`SecretOpener`] 取出，`Debug` 输出不包含内容
#[derive(Clone, Deserialize)]
#[serde(transparent)]
pub struct WrappedSecret(String);

impl WrappedSecret {
    pub fn new(wrapped: impl Into<String>) -> Self {
        Self(wrapped.into())
    }

    /// 包装后的原始值，仅供 [`SecretOpener`] 实现使用
    pub fn wrapped(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for WrappedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WrappedSecret(***)")
    }
}

/// 解开 [`WrappedSecret`] 的能力，由密钥存储方注入
pub trait SecretOpener: Send + Sync {
    fn open(&self, secret: &WrappedSecret) -> anyhow::Result<String>;
}

/// 配置中直接保存明文 secret 时使用
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainSecretOpener;

impl SecretOpener for PlainSecretOpener {
    fn open(&self, secret: &WrappedSecret) -> anyhow::Result<String> {
        Ok(secret.wrapped().to_string())
    }
}

/// 单个 OAuth 服务的持久化配置
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceConfig {
    /// 服务名
    pub service: String,

    /// 授权服务器地址，introspection 与 identity 路径都拼接在其后
    #[serde(rename = "serverURL")]
    pub server_url: String,

    /// identity 接口路径
    pub identity_path: String,

    pub client_id: String,

    pub secret: WrappedSecret,

    /// identity 中作为外部用户 id 的字段
    pub username_field: String,

    /// 默认 scope，空格分隔
    #[serde(default)]
    pub scope: String,
}

impl ServiceConfig {
    /// RFC 7662 introspection 地址，路径不可配置
    pub fn introspection_url(&self) -> String {
        format!("{}/introspect", self.server_url.trim_end_matches('/'))
    }

    pub fn identity_url(&self) -> String {
        format!("{}{}", self.server_url, self.identity_path)
    }
}

//! HTTP Client 构建模块
//!
//! 登录路径上的所有外呼（introspection、identity）共享同一个 Client，
//! 超时时间必须有上限，避免登录请求被上游无限阻塞

use reqwest::{Client, Proxy};
use std::time::Duration;

/// 代理配置
#[derive(Debug, Clone, Default)]
pub struct ProxyConfig {
    /// 代理地址，支持 http/https/socks5
    pub url: String,
    /// 代理认证用户名
    pub username: Option<String>,
    /// 代理认证密码
    pub password: Option<String>,
}

impl ProxyConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            username: None,
            password: None,
        }
    }

    pub fn with_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// 从应用配置中提取代理配置，未配置代理地址时返回 None
    pub fn from_config(config: &crate::model::config::Config) -> Option<Self> {
        let url = config.proxy_url.as_ref()?;
        let proxy = Self::new(url.clone());
        match (&config.proxy_username, &config.proxy_password) {
            (Some(username), Some(password)) => Some(proxy.with_auth(username, password)),
            _ => Some(proxy),
        }
    }
}

/// 构建外呼用的 HTTP Client
///
/// # Arguments
/// * `proxy` - 可选的代理配置
/// * `timeout_secs` - 单次请求超时（秒），0 会被提升为 1
pub fn build_client(proxy: Option<&ProxyConfig>, timeout_secs: u64) -> anyhow::Result<Client> {
    let timeout = Duration::from_secs(timeout_secs.max(1));
    let mut builder = Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout);

    if let Some(proxy_config) = proxy {
        let mut proxy = Proxy::all(&proxy_config.url)?;

        if let (Some(username), Some(password)) = (&proxy_config.username, &proxy_config.password) {
            proxy = proxy.basic_auth(username, password);
        }

        builder = builder.proxy(proxy);
        tracing::debug!("HTTP Client 使用代理: {}", proxy_config.url);
    }

    Ok(builder.build()?)
}

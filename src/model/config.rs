use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

use crate::oauth::model::identity::LocaleAliasMode;
use crate::oauth::model::service_config::ServiceConfig;

/// 应用配置
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// 调用方 API 密钥（可选，配置后 /v1 路由需要认证）
    #[serde(default)]
    pub api_key: Option<String>,

    /// 单次外呼超时（秒）
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// locale → lang 别名处理方式
    #[serde(default)]
    pub locale_alias: LocaleAliasMode,

    /// HTTP 代理地址（可选）
    /// 支持格式: http://host:port, https://host:port, socks5://host:port
    #[serde(default)]
    pub proxy_url: Option<String>,

    #[serde(default)]
    pub proxy_username: Option<String>,

    #[serde(default)]
    pub proxy_password: Option<String>,

    /// 已配置的 OAuth 服务
    #[serde(default)]
    pub services: Vec<ServiceConfig>,

    /// 当前启用的 OAuth 服务名（可选，缺省为 services 中的全部服务）
    #[serde(default)]
    pub active_services: Option<Vec<String>>,
}

impl Config {
    /// 从环境变量覆盖配置
    pub fn override_from_env(&mut self) {
        if let Ok(host) = env::var("HOST") {
            self.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            if let Ok(p) = port.parse() {
                self.port = p;
            }
        }
        if let Ok(api_key) = env::var("API_KEY") {
            self.api_key = Some(api_key);
        }
        if let Ok(timeout) = env::var("REQUEST_TIMEOUT_SECS") {
            if let Ok(t) = timeout.parse() {
                self.request_timeout_secs = t;
            }
        }
        if let Ok(mode) = env::var("LOCALE_ALIAS") {
            match mode.parse() {
                Ok(mode) => self.locale_alias = mode,
                Err(e) => tracing::warn!("忽略无效的 LOCALE_ALIAS: {}", e),
            }
        }
        if let Ok(proxy) = env::var("PROXY_URL") {
            self.proxy_url = Some(proxy);
        }
        if let Ok(username) = env::var("PROXY_USERNAME") {
            self.proxy_username = Some(username);
        }
        if let Ok(password) = env::var("PROXY_PASSWORD") {
            self.proxy_password = Some(password);
        }
    }

    /// 当前启用的 OAuth 服务名
    pub fn active_service_names(&self) -> Vec<String> {
        match &self.active_services {
            Some(names) => names.clone(),
            None => self.services.iter().map(|s| s.service.clone()).collect(),
        }
    }
}

fn default_host() -> String {
    env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
}

fn default_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080)
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            api_key: None,
            request_timeout_secs: default_request_timeout_secs(),
            locale_alias: LocaleAliasMode::default(),
            proxy_url: None,
            proxy_username: None,
            proxy_password: None,
            services: Vec::new(),
            active_services: None,
        }
    }
}

impl Config {
    /// 获取默认配置文件路径
    pub fn default_config_path() -> &'static str {
        "config.json"
    }

    /// 从文件加载配置
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            // 配置文件不存在，返回默认配置
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }
}

//! Access token 服务注册表
//!
//! 启动时由组合根填充，之后包进 `Arc` 只读共享，请求处理期间无需加锁

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use super::error::LoginError;
use super::model::request::AccessTokenRequest;
use super::model::service_config::ServiceConfig;
use super::model::service_data::AccessTokenResult;

/// 保留的服务名，已配置但未单独注册 handler 的服务回退到它
pub const CUSTOM_SERVICE: &str = "custom";

/// 把 access token 转换为 service data 的 handler
#[async_trait]
pub trait AccessTokenHandler: Send + Sync {
    async fn handle_access_token_request(
        &self,
        request: &AccessTokenRequest,
        config: &ServiceConfig,
    ) -> Result<AccessTokenResult, LoginError>;
}

/// 已注册的服务
#[derive(Clone)]
pub struct AccessTokenService {
    pub service_name: String,
    pub handler: Arc<dyn AccessTokenHandler>,
}

#[derive(Clone, Default)]
pub struct AccessTokenServiceRegistry {
    services: HashMap<String, AccessTokenService>,
}

impl AccessTokenServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册 handler，同名时后注册者覆盖
    pub fn register(&mut self, service_name: impl Into<String>, handler: Arc<dyn AccessTokenHandler>) {
        let service_name = service_name.into();
        if self.services.contains_key(&service_name) {
            tracing::debug!("覆盖已注册的 AccessToken 服务: {}", service_name);
        }
        self.services.insert(
            service_name.clone(),
            AccessTokenService {
                service_name,
                handler,
            },
        );
    }

    pub fn lookup(&self, service_name: &str) -> Option<&AccessTokenService> {
        self.services.get(service_name)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

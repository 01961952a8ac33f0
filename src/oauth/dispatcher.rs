//! access token 登录分发
//!
//! 作为登录 handler 链中的一环：请求不带 `accessToken` 时直接放行给其他 handler，
//! 否则解析服务、调用对应 handler，并把结果交给账号系统

use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;

use super::error::{LoginCancelled, LoginError};
use super::fingerprint::token_fingerprint;
use super::model::request::AccessTokenRequest;
use super::registry::{AccessTokenService, AccessTokenServiceRegistry, CUSTOM_SERVICE};
use super::store::{ExternalUserStore, LoginResult, ServiceConfigStore};

/// 登录处理结果
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    LoggedIn(LoginResult),
    /// 可报告给客户端的取消
    Cancelled(LoginCancelled),
}

pub struct LoginDispatcher {
    registry: Arc<AccessTokenServiceRegistry>,
    configs: Arc<dyn ServiceConfigStore>,
    users: Arc<dyn ExternalUserStore>,
    /// 当前启用的 OAuth 服务名，与 registry 相互独立
    oauth_service_names: HashSet<String>,
}

impl LoginDispatcher {
    pub fn new(
        registry: Arc<AccessTokenServiceRegistry>,
        configs: Arc<dyn ServiceConfigStore>,
        users: Arc<dyn ExternalUserStore>,
        oauth_service_names: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            registry,
            configs,
            users,
            oauth_service_names: oauth_service_names.into_iter().collect(),
        }
    }

    /// 处理一次登录请求
    ///
    /// 返回 `Ok(None)` 表示本 handler 不处理该请求
    pub async fn handle_login(&self, options: &Value) -> Result<Option<LoginOutcome>, LoginError> {
        if !has_access_token(options) {
            return Ok(None);
        }

        let service_name = match options.get("serviceName") {
            Some(Value::String(name)) => name.as_str(),
            _ => return Err(LoginError::validation("serviceName 必须是字符串")),
        };

        let config = self.configs.find(service_name);
        let service = self.resolve_service(service_name, config.is_some());

        let Some(service) = service else {
            return Err(LoginError::UnexpectedService(service_name.to_string()));
        };
        let Some(config) = config else {
            return Err(LoginError::ServiceNotConfigured(service_name.to_string()));
        };

        if !self.oauth_service_names.contains(service_name) {
            tracing::warn!("未注册的 OAuth 服务，取消登录: {}", service_name);
            return Ok(Some(LoginOutcome::Cancelled(
                LoginCancelled::unregistered_service(service_name),
            )));
        }

        let request = AccessTokenRequest::from_value(options)?;
        tracing::debug!(
            "{} 处理 {} 的 access token 登录 (token {})",
            service.service_name,
            service_name,
            token_fingerprint(&request.access_token)
        );

        let result = service
            .handler
            .handle_access_token_request(&request, &config)
            .await?;

        let login = self
            .users
            .update_or_create_user_from_external_service(
                service_name,
                &result.service_data,
                &result.options,
            )
            .await
            .map_err(LoginError::Host)?;

        Ok(Some(LoginOutcome::LoggedIn(login)))
    }

    /// 优先使用单独注册的 handler，已配置的服务回退到 `custom`
    fn resolve_service(&self, service_name: &str, configured: bool) -> Option<&AccessTokenService> {
        self.registry.lookup(service_name).or_else(|| {
            if configured {
                self.registry.lookup(CUSTOM_SERVICE)
            } else {
                None
            }
        })
    }
}

/// 与 JavaScript 真值语义一致：缺失、null、空串、false、0 都视为没有 token
fn has_access_token(options: &Value) -> bool {
    match options.get("accessToken") {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Some(_) => true,
    }
}

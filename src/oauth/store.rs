//! 宿主系统协作接口：服务配置存储与账号系统
//!
//! 附带进程内实现，供独立部署和测试使用

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::model::service_config::ServiceConfig;
use super::model::service_data::{LoginOptions, ServiceData};

/// 按服务名查询服务配置
pub trait ServiceConfigStore: Send + Sync {
    fn find(&self, service_name: &str) -> Option<ServiceConfig>;
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryServiceConfigStore {
    configs: HashMap<String, ServiceConfig>,
}

impl InMemoryServiceConfigStore {
    pub fn new(configs: impl IntoIterator<Item = ServiceConfig>) -> Self {
        Self {
            configs: configs
                .into_iter()
                .map(|config| (config.service.clone(), config))
                .collect(),
        }
    }
}

impl ServiceConfigStore for InMemoryServiceConfigStore {
    fn find(&self, service_name: &str) -> Option<ServiceConfig> {
        self.configs.get(service_name).cloned()
    }
}

/// 登录成功后账号系统返回的结果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResult {
    pub user_id: String,
    /// 本次是否新建了用户
    pub is_new: bool,
}

/// 按外部服务 id 创建或更新本地用户
#[async_trait]
pub trait ExternalUserStore: Send + Sync {
    async fn update_or_create_user_from_external_service(
        &self,
        service_name: &str,
        service_data: &ServiceData,
        options: &LoginOptions,
    ) -> anyhow::Result<LoginResult>;
}

/// 进程内的本地用户
#[derive(Debug, Clone)]
pub struct LocalUser {
    pub id: String,
    pub profile_name: Option<Value>,
    /// 服务名 → service data 字段
    pub services: HashMap<String, Map<String, Value>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    /// (服务名, 外部 id) → 用户
    users: Mutex<HashMap<(String, String), LocalUser>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn find(&self, service_name: &str, external_id: &str) -> Option<LocalUser> {
        let users = self.users.lock().await;
        users
            .get(&(service_name.to_string(), external_id.to_string()))
            .cloned()
    }

    pub async fn len(&self) -> usize {
        self.users.lock().await.len()
    }
}

#[async_trait]
impl ExternalUserStore for InMemoryUserStore {
    async fn update_or_create_user_from_external_service(
        &self,
        service_name: &str,
        service_data: &ServiceData,
        options: &LoginOptions,
    ) -> anyhow::Result<LoginResult> {
        if service_data.id.is_empty() {
            anyhow::bail!("{} 的 service data 缺少 id", service_name);
        }

        let fields = service_data.to_fields();
        let key = (service_name.to_string(), service_data.id.clone());
        let now = Utc::now();
        let mut users = self.users.lock().await;

        if let Some(user) = users.get_mut(&key) {
            // 逐键覆盖，本次未提供的字段（如 refreshToken）保持原值
            let stored = user.services.entry(service_name.to_string()).or_default();
            for (k, v) in fields {
                stored.insert(k, v);
            }
            user.updated_at = now;
            return Ok(LoginResult {
                user_id: user.id.clone(),
                is_new: false,
            });
        }

        let user = LocalUser {
            id: Uuid::new_v4().to_string(),
            profile_name: options.profile.name.clone(),
            services: HashMap::from([(service_name.to_string(), fields)]),
            created_at: now,
            updated_at: now,
        };
        let user_id = user.id.clone();
        users.insert(key, user);
        tracing::info!("为 {} 外部用户创建本地账号: {}", service_name, user_id);

        Ok(LoginResult {
            user_id,
            is_new: true,
        })
    }
}

//! 归一化后的 service data 及登录选项

use serde::Serialize;
use serde_json::{Map, Value};

use super::identity::Identity;

/// 可信任的 identity 字段
pub const WHITELISTED_FIELDS: [&str; 6] = [
    "name",
    "description",
    "profile_image_url",
    "profile_image_url_https",
    "lang",
    "email",
];

/// 可持久化的外部身份记录
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceData {
    /// 标记该记录由自定义 OAuth access token 流程生成
    #[serde(rename = "_OAuthCustom")]
    pub oauth_custom: bool,
    pub access_token: String,
    /// 过期时间（epoch 毫秒）
    pub expires_at: i64,
    pub scope: Vec<String>,
    /// 外部用户 id
    pub id: String,
    /// 只在本次请求提供时设置，缺省时不输出该键，以保留已存储的值
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// 白名单内的 identity 字段
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

impl ServiceData {
    /// 该键是否已被固定字段占用
    pub fn has_key(&self, key: &str) -> bool {
        match key {
            "_OAuthCustom" | "accessToken" | "expiresAt" | "scope" | "id" => true,
            "refreshToken" => self.refresh_token.is_some(),
            other => self.profile.contains_key(other),
        }
    }

    /// 从 identity 合并白名单字段
    ///
    /// `username_field` 不在白名单且未占用已有键时，一并合并
    pub fn merge_whitelisted(&mut self, identity: &Identity, username_field: &str) {
        let mut fields: Vec<&str> = WHITELISTED_FIELDS.to_vec();
        if !fields.contains(&username_field) && !self.has_key(username_field) {
            fields.push(username_field);
        }

        for key in fields {
            if let Some(value) = identity.get(key) {
                self.profile.insert(key.to_string(), value.clone());
            }
        }
    }

    /// 按字段名序列化为 JSON 对象，供账号系统按键合并
    pub fn to_fields(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

/// 以空白拆分 scope 字符串
pub fn split_scope(scope: &str) -> Vec<String> {
    scope.split_whitespace().map(str::to_string).collect()
}

/// 创建或更新本地用户时附带的资料
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoginProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoginOptions {
    pub profile: LoginProfile,
}

/// access token handler 的输出
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenResult {
    pub service_data: ServiceData,
    pub options: LoginOptions,
}

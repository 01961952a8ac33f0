//! 外部 identity 及 OpenID Connect 字段别名

use serde::Deserialize;
use serde_json::{Map, Value};
use std::str::FromStr;

use crate::oauth::error::LoginError;

/// 由 provider 定义、未做类型约束的用户信息
pub type Identity = Map<String, Value>;

/// locale → lang 别名的处理方式
///
/// 旧版本在 `lang` 缺失且存在 `locale` 时，错误地把 `picture` 写进了
/// `profile_image_url`。`Legacy` 保留该行为以兼容依赖它的部署
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleAliasMode {
    /// `lang = locale`
    #[default]
    Corrected,
    /// `profile_image_url = picture`
    Legacy,
}

impl LocaleAliasMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Corrected => "corrected",
            Self::Legacy => "legacy",
        }
    }
}

impl FromStr for LocaleAliasMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "corrected" => Ok(Self::Corrected),
            "legacy" => Ok(Self::Legacy),
            other => Err(format!("未知的 locale 别名模式: {}", other)),
        }
    }
}

/// 把 OpenID Connect userinfo 字段名映射到内部字段名
pub fn apply_oidc_aliases(identity: &mut Identity, mode: LocaleAliasMode) {
    if is_undefined(identity, "profile_image_url") && is_truthy(identity.get("picture")) {
        if let Some(picture) = identity.get("picture").cloned() {
            identity.insert("profile_image_url".to_string(), picture);
        }
    }

    if is_undefined(identity, "lang") && is_truthy(identity.get("locale")) {
        match mode {
            LocaleAliasMode::Corrected => {
                if let Some(locale) = identity.get("locale").cloned() {
                    identity.insert("lang".to_string(), locale);
                }
            }
            LocaleAliasMode::Legacy => match identity.get("picture").cloned() {
                Some(picture) => {
                    identity.insert("profile_image_url".to_string(), picture);
                }
                None => {
                    identity.remove("profile_image_url");
                }
            },
        }
    }
}

/// 取出 `identity[username_field]` 作为外部用户 id
///
/// 只接受非空字符串或数字
pub fn external_id(identity: &Identity, username_field: &str) -> Result<String, LoginError> {
    match identity.get(username_field) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(LoginError::Configuration(format!(
            "identity 中缺少可用的 {} 字段",
            username_field
        ))),
    }
}

fn is_undefined(identity: &Identity, key: &str) -> bool {
    !identity.contains_key(key)
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Some(_) => true,
    }
}

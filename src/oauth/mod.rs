//! 自定义 OAuth access token 登录
//!
//! 客户端直接提交 access token（而不是走授权码跳转流程），服务端：
//! - 可选地通过 RFC 7662 introspection 获取过期时间和 scope
//! - 从 identity 接口获取用户信息
//! - 归一化为可持久化的 service data，交给账号系统创建或更新本地用户
//!
//! # 使用示例
//! ```rust,ignore
//! use custom_oauth_login::oauth::{self, CustomOAuthHandler, LoginDispatcher};
//!
//! let mut registry = oauth::AccessTokenServiceRegistry::new();
//! registry.register(oauth::CUSTOM_SERVICE, Arc::new(CustomOAuthHandler::new(client)));
//! let dispatcher = LoginDispatcher::new(Arc::new(registry), configs, users, active_names);
//! let outcome = dispatcher.handle_login(&options).await?;
//! ```

pub mod clock;
pub mod custom;
pub mod dispatcher;
pub mod error;
pub mod fingerprint;
pub mod model;
pub mod registry;
pub mod store;

pub use custom::CustomOAuthHandler;
pub use dispatcher::{LoginDispatcher, LoginOutcome};
pub use error::{LoginCancelled, LoginError};
pub use registry::{AccessTokenHandler, AccessTokenServiceRegistry, CUSTOM_SERVICE};

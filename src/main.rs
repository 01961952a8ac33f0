use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use custom_oauth_login::http_client::{build_client, ProxyConfig};
use custom_oauth_login::model::arg::Args;
use custom_oauth_login::model::config::Config;
use custom_oauth_login::oauth::store::{InMemoryServiceConfigStore, InMemoryUserStore};
use custom_oauth_login::oauth::{
    AccessTokenServiceRegistry, CustomOAuthHandler, LoginDispatcher, CUSTOM_SERVICE,
};
use custom_oauth_login::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config_path = args
        .config
        .unwrap_or_else(|| Config::default_config_path().to_string());
    let mut config = Config::load(&config_path)?;
    config.override_from_env();

    tracing::info!(
        "已加载 {} 个 OAuth 服务配置，locale 别名模式: {}",
        config.services.len(),
        config.locale_alias.as_str()
    );

    let proxy = ProxyConfig::from_config(&config);
    let client = build_client(proxy.as_ref(), config.request_timeout_secs)?;

    // 注册表只在启动时写入，之后只读共享
    let mut registry = AccessTokenServiceRegistry::new();
    registry.register(
        CUSTOM_SERVICE,
        Arc::new(CustomOAuthHandler::new(client).with_locale_alias(config.locale_alias)),
    );

    let dispatcher = LoginDispatcher::new(
        Arc::new(registry),
        Arc::new(InMemoryServiceConfigStore::new(config.services.clone())),
        Arc::new(InMemoryUserStore::new()),
        config.active_service_names(),
    );

    if config.api_key.is_none() {
        tracing::warn!("未配置 API_KEY，/v1 路由不做调用方认证");
    }
    let app = server::create_router(config.api_key.clone(), Arc::new(dispatcher));

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("启动服务: {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

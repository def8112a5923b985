use anyhow::Context;
use config::{Config, FileFormat};
use serde::Deserialize;
use std::sync::LazyLock;

static CONFIG: LazyLock<AppConfig> =
    LazyLock::new(|| AppConfig::load().expect("Failed to initialize config"));

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// 后端服务地址
    pub api_base_url: String,
    /// 请求超时（秒）
    pub request_timeout_secs: u64,
    /// 推荐完成后自动预取分数线的院校数量
    pub prefetch_count: usize,
    /// 预取分数线的并发数
    pub concurrency: usize,
    /// 本地偏好文件路径
    pub prefs_path: String,
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        Config::builder()
            .add_source(
                config::File::with_name("application")
                    .format(FileFormat::Yaml)
                    .required(true),
            )
            .add_source(config::Environment::with_prefix("APP").try_parsing(true))
            .build()
            .with_context(|| anyhow::anyhow!("Failed to load config"))?
            .try_deserialize()
            .with_context(|| anyhow::anyhow!("Failed to deserialize config"))
    }
}

pub fn get() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config() {
        let config = AppConfig::load().expect("Failed to load config");
        assert!(!config.api_base_url.is_empty());
        assert!(config.request_timeout_secs > 0);
    }
}

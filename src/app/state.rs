use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tokio::sync::RwLock;
use tracing::debug;

use crate::app::prefs::PrefsStore;
use crate::config::AppConfig;

/// 应用程序共享状态
#[derive(Clone)]
pub struct AppState {
    /// HTTP 客户端，全局复用一个连接池
    pub client: Client,
    /// 本地偏好存储
    pub prefs: Arc<RwLock<PrefsStore>>,
    /// 查询动作的代数计数，用于丢弃过期响应
    generation: Arc<AtomicU64>,
    /// 应用配置
    pub config: &'static AppConfig,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new() -> Result<Self> {
        let config = crate::config::get();

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json, text/plain, */*"),
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .default_headers(headers)
            .build()
            .context("构建 HTTP 客户端失败")?;

        let prefs = PrefsStore::open(&config.prefs_path);
        debug!("偏好存储路径: {}", config.prefs_path);

        Ok(Self {
            client,
            prefs: Arc::new(RwLock::new(prefs)),
            generation: Arc::new(AtomicU64::new(0)),
            config,
        })
    }

    /// 开始一次新的查询动作，返回本次的代数令牌
    ///
    /// 旧令牌随之失效，迟到的响应由 is_current 判定后丢弃，
    /// 防止慢响应覆盖更新的结果。
    pub fn begin_request(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// 判断令牌是否仍属于最新一次动作
    pub fn is_current(&self, token: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == token
    }
}

use anyhow::Result;
use tracing::{info, warn};

use crate::api;
use crate::app::presenter;
use crate::app::state::AppState;

/// 触发后端数据同步并输出各类数据的更新数量
pub async fn run_refresh(state: &AppState) -> Result<()> {
    info!("🚀 开始同步最新数据...");
    let stats = api::admin::refresh_data(state).await?;
    presenter::render_refresh_stats(&stats);
    info!("🎉 数据同步完成");
    Ok(())
}

/// 查询数据源状态，全部不可用时给出提示
pub async fn run_sources(state: &AppState) -> Result<()> {
    let sources = api::admin::data_sources(state).await?;
    if !sources.values().any(|active| *active) {
        warn!("当前没有可用的在线数据源，将使用本地缓存数据");
    }
    presenter::render_data_sources(&sources);
    Ok(())
}
